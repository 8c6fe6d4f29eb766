#![forbid(unsafe_code)]

//! The reorder engine: applying a committed drop to a tree.
//!
//! [`apply_drop`] is a pure transform `(Tree, dragged ids, target, position)
//! → Result<Tree, ReorderError>`. The input tree is never mutated; callers
//! get a fresh value they can diff against the old one for undo support.
//!
//! # Invariants
//!
//! 1. Validity is checked before anything moves; a rejected drop leaves no
//!    trace.
//! 2. Dragged nodes keep their original document order among themselves,
//!    regardless of the order their ids were supplied.
//! 3. A dragged id nested inside another dragged group moves once, inside
//!    its group; it is never extracted twice.
//! 4. A no-op move (placement identical to the current one) returns an
//!    unchanged tree — it is valid, not an error.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | `EmptySelection` | No dragged ids | Tree untouched |
//! | `UnknownItem` | Dragged id not in tree | Tree untouched |
//! | `InvalidTarget` | Target dragged, missing, inside a dragged subtree, or `Into` on a leaf | Tree untouched |

use crate::position::DropPosition;
use crate::tree::{Node, NodeId, Tree};
use std::collections::HashSet;
use std::fmt;

/// Why a drop could not be applied.
///
/// Every variant is recoverable by design: the tree is untouched and the
/// interaction loop carries on. Users drag incorrectly all the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    /// The dragged set was empty.
    EmptySelection,
    /// A dragged id does not exist in the tree.
    UnknownItem(NodeId),
    /// The target is missing, part of the dragged set, inside a dragged
    /// subtree, or a leaf receiving an `Into` drop.
    InvalidTarget(NodeId),
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "nothing is being dragged"),
            Self::UnknownItem(id) => write!(f, "dragged node {} is not in the tree", id.0),
            Self::InvalidTarget(id) => write!(f, "node {} cannot receive this drop", id.0),
        }
    }
}

impl std::error::Error for ReorderError {}

/// Apply a committed drop, producing a new tree.
///
/// Dragged nodes are removed from their current positions (whole subtrees,
/// in document order) and reinserted relative to `target`:
///
/// - [`DropPosition::Before`] / [`DropPosition::After`] — spliced into the
///   target's container immediately around it.
/// - [`DropPosition::Into`] — appended to the end of the target group's
///   children. The target must be a group.
///
/// Nodes dragged across container boundaries change their owning container;
/// their ids and content are otherwise unchanged.
pub fn apply_drop(
    tree: &Tree,
    dragging: &[NodeId],
    target: NodeId,
    position: DropPosition,
) -> Result<Tree, ReorderError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "apply_drop",
        target = target.0,
        count = dragging.len(),
        position = ?position
    )
    .entered();

    if dragging.is_empty() {
        return Err(ReorderError::EmptySelection);
    }
    for &id in dragging {
        if !tree.contains(id) {
            return Err(ReorderError::UnknownItem(id));
        }
    }

    let dragged: HashSet<NodeId> = dragging.iter().copied().collect();
    if dragged.contains(&target) || !tree.contains(target) {
        return Err(ReorderError::InvalidTarget(target));
    }
    // A group may not land inside its own subtree.
    for &id in &dragged {
        if tree.is_descendant_of(target, id) {
            return Err(ReorderError::InvalidTarget(target));
        }
    }
    if position.is_into() && !tree.is_group(target) {
        return Err(ReorderError::InvalidTarget(target));
    }

    let mut roots = tree.roots().to_vec();
    let mut moved = Vec::with_capacity(dragging.len());
    extract(&mut roots, &dragged, &mut moved);

    // The target is not dragged, so it survived extraction.
    if let Some(leftover) = insert(&mut roots, target, position, moved) {
        debug_assert!(leftover.is_empty(), "drop target vanished during insert");
        return Err(ReorderError::InvalidTarget(target));
    }

    Ok(Tree::new(roots))
}

/// Remove every dragged node (with its subtree) in document order.
///
/// Does not descend into extracted subtrees, so dragged ids nested inside a
/// dragged group are subsumed by it.
fn extract(nodes: &mut Vec<Node>, dragged: &HashSet<NodeId>, out: &mut Vec<Node>) {
    let mut i = 0;
    while i < nodes.len() {
        if dragged.contains(&nodes[i].id()) {
            out.push(nodes.remove(i));
        } else {
            if let Node::Group { children, .. } = &mut nodes[i] {
                extract(children, dragged, out);
            }
            i += 1;
        }
    }
}

/// Splice `moved` in around the target. Returns the payload back when the
/// target is not in this subtree.
fn insert(
    nodes: &mut Vec<Node>,
    target: NodeId,
    position: DropPosition,
    mut moved: Vec<Node>,
) -> Option<Vec<Node>> {
    for i in 0..nodes.len() {
        if nodes[i].id() == target {
            match position {
                DropPosition::Before => {
                    nodes.splice(i..i, moved);
                }
                DropPosition::After => {
                    nodes.splice(i + 1..i + 1, moved);
                }
                DropPosition::Into => {
                    if let Node::Group { children, .. } = &mut nodes[i] {
                        children.extend(moved);
                    }
                }
            }
            return None;
        }
        if let Node::Group { children, .. } = &mut nodes[i] {
            match insert(children, target, position, moved) {
                None => return None,
                Some(back) => moved = back,
            }
        }
    }
    Some(moved)
}
