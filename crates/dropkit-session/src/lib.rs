#![forbid(unsafe_code)]

//! Stateful drag-session layer for DropKit.
//!
//! This crate tracks in-progress drag gestures — one session per list or
//! grid component — and carries the payload codec that lets drop targets
//! validate gesture compatibility before accepting. The pure data
//! transforms it drives live in `dropkit-core`.
//!
//! # Example
//!
//! ```
//! use dropkit_core::{DropPosition, Node, NodeId, Tree};
//! use dropkit_session::{ComponentId, DragCoordinator};
//!
//! let tree = Tree::new(vec![Node::item(NodeId(1)), Node::item(NodeId(2))]);
//! let mut drags = DragCoordinator::new();
//! let list = ComponentId(7);
//!
//! let _ = drags.start_drag(list, NodeId(2), &[]);
//! let _ = drags.update_target(list, NodeId(1), DropPosition::Before, false);
//! let moved = drags.complete_drop(list, &tree).unwrap();
//!
//! let order: Vec<_> = moved.roots().iter().map(|n| n.id()).collect();
//! assert_eq!(order, vec![NodeId(2), NodeId(1)]);
//! assert!(!drags.is_active(list)); // session cleared by the drop
//! ```

pub mod payload;
pub mod session;

pub use payload::{DropPayload, GRID_CELL_KIND, NODE_LIST_KIND, PayloadError, PayloadSource};
pub use session::{ComponentId, DragCoordinator, DragSession, SessionEvent};
