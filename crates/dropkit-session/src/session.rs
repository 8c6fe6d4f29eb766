#![forbid(unsafe_code)]

//! Per-component drag sessions and their state machine.
//!
//! A [`DragCoordinator`] owns one [`DragSession`] per component, keyed by
//! [`ComponentId`], so independent lists and grids never interact. Each
//! session moves `Idle → Active → Idle`; drop, cancel, and abort all
//! converge on the same unconditional clear, so there is exactly one
//! cleanup path to reason about.
//!
//! Transitions report their outcome as returned [`SessionEvent`] values.
//! The rendering layer forwards `TargetChanged` events to its own
//! drop-indicator styling; the coordinator itself never touches visuals.
//!
//! # Invariants
//!
//! 1. A drag is well-formed: one `start_drag`, zero or more `update_target`
//!    calls, ending in `complete_drop` or `clear`.
//! 2. `update_target` with the pair already stored emits nothing — hover
//!    ticks arrive every pointer move and must not churn downstream.
//! 3. Reads on an absent session return empty/`None` defaults, never an
//!    error.
//! 4. `complete_drop` reads the session's final state before clearing, so
//!    a drop always wins over any buffered hover update.

use crate::payload::{DropPayload, PayloadSource};
use dropkit_core::grid::Grid;
use dropkit_core::position::DropPosition;
use dropkit_core::reorder::{ReorderError, apply_drop};
use dropkit_core::tree::{NodeId, Tree};
use std::collections::HashMap;

/// Identifier for one list or grid component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

/// Transient state of one in-progress drag gesture.
///
/// Created on drag start, mutated on hover, consumed by the drop. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    dragging: Vec<NodeId>,
    target: Option<NodeId>,
    position: Option<DropPosition>,
}

impl DragSession {
    /// The ids being dragged, in the order they were captured.
    #[must_use]
    pub fn dragging(&self) -> &[NodeId] {
        &self.dragging
    }

    /// The currently hovered target and verdict, if any.
    #[must_use]
    pub fn target(&self) -> Option<(NodeId, DropPosition)> {
        match (self.target, self.position) {
            (Some(t), Some(p)) => Some((t, p)),
            _ => None,
        }
    }
}

/// Notification produced by a session transition.
///
/// Plain values: the caller forwards them to whatever visual-feedback layer
/// it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A drag began; `dragging` is the full captured id set.
    DragStarted {
        /// Component owning the new session.
        component: ComponentId,
        /// Ids captured into the drag.
        dragging: Vec<NodeId>,
    },
    /// The hovered target or verdict changed since the last notification.
    TargetChanged {
        /// Component owning the session.
        component: ComponentId,
        /// Newly hovered node.
        target: NodeId,
        /// Placement verdict for the hover.
        position: DropPosition,
        /// Whether the hovered node is a group (for indicator styling).
        is_group: bool,
    },
}

/// Registry of drag sessions, one per component.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    sessions: HashMap<ComponentId, DragSession>,
}

impl DragCoordinator {
    /// Create an empty coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag from `item` in the given component.
    ///
    /// If `item` is part of the caller's current selection the whole
    /// selection is captured; otherwise only `item` is, and the caller is
    /// expected to narrow its selection to match. Any stale session for the
    /// component is discarded first, so an aborted previous gesture cannot
    /// leak state into this one.
    pub fn start_drag(
        &mut self,
        component: ComponentId,
        item: NodeId,
        selection: &[NodeId],
    ) -> SessionEvent {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "start_drag",
            component = component.0,
            item = item.0,
            selection = selection.len()
        )
        .entered();

        let dragging = if selection.contains(&item) {
            let mut ids = Vec::with_capacity(selection.len());
            for &id in selection {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            ids
        } else {
            vec![item]
        };

        self.sessions.insert(
            component,
            DragSession {
                dragging: dragging.clone(),
                target: None,
                position: None,
            },
        );
        SessionEvent::DragStarted {
            component,
            dragging,
        }
    }

    /// Record the hovered target for an active drag.
    ///
    /// Emits `TargetChanged` only when `(target, position)` differs from
    /// the stored pair. Repeated identical hover ticks and calls while Idle
    /// yield `None`.
    pub fn update_target(
        &mut self,
        component: ComponentId,
        target: NodeId,
        position: DropPosition,
        is_group: bool,
    ) -> Option<SessionEvent> {
        let session = self.sessions.get_mut(&component)?;
        if session.dragging.is_empty() {
            return None;
        }
        if session.target == Some(target) && session.position == Some(position) {
            return None;
        }
        session.target = Some(target);
        session.position = Some(position);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            component = component.0,
            target = target.0,
            position = ?position,
            "drag target changed"
        );

        Some(SessionEvent::TargetChanged {
            component,
            target,
            position,
            is_group,
        })
    }

    /// Unconditionally reset the component's session to Idle.
    ///
    /// Called after drop completion, after the platform reports the gesture
    /// ended (including cancellation), and defensively by `start_drag`.
    pub fn clear(&mut self, component: ComponentId) {
        self.sessions.remove(&component);
    }

    /// Whether the component currently has an active drag.
    #[must_use]
    pub fn is_active(&self, component: ComponentId) -> bool {
        self.sessions
            .get(&component)
            .is_some_and(|s| !s.dragging.is_empty())
    }

    /// The ids being dragged in the component; empty when Idle.
    #[must_use]
    pub fn dragging_ids(&self, component: ComponentId) -> &[NodeId] {
        self.sessions
            .get(&component)
            .map_or(&[], |s| s.dragging.as_slice())
    }

    /// The current hover target and verdict; `None` when Idle or unhovered.
    #[must_use]
    pub fn current_target(&self, component: ComponentId) -> Option<(NodeId, DropPosition)> {
        self.sessions.get(&component).and_then(DragSession::target)
    }

    /// Commit the component's drag against a tree.
    ///
    /// Reads the session's final state, applies the reorder engine, and
    /// clears the session whatever the outcome — this is the single cleanup
    /// path for drop, rejection, and "dropped on nothing" alike. A session
    /// with no recorded target commits nothing and reports
    /// [`ReorderError::EmptySelection`].
    pub fn complete_drop(
        &mut self,
        component: ComponentId,
        tree: &Tree,
    ) -> Result<Tree, ReorderError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("complete_drop", component = component.0).entered();

        let session = self.sessions.remove(&component).unwrap_or_default();
        match (session.dragging.as_slice(), session.target()) {
            ([], _) | (_, None) => Err(ReorderError::EmptySelection),
            (dragging, Some((target, position))) => apply_drop(tree, dragging, target, position),
        }
    }

    /// Commit a grid drag against a grid.
    ///
    /// The source cell comes from the decoded payload; `to` is the cell the
    /// gesture was released over. Payloads that do not carry a grid-cell
    /// source leave the grid unchanged. The component's session is cleared
    /// unconditionally, same as [`complete_drop`](Self::complete_drop).
    pub fn complete_grid_drop<T: Clone>(
        &mut self,
        component: ComponentId,
        grid: &Grid<T>,
        payload: &DropPayload,
        to: (u16, u16),
    ) -> Grid<T> {
        self.sessions.remove(&component);
        match payload.source {
            PayloadSource::Cell { col, row } => grid.move_content((col, row), to),
            PayloadSource::Nodes(_) => grid.clone(),
        }
    }
}
