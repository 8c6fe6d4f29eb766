#![forbid(unsafe_code)]

//! Core data model and pure transforms for DropKit.
//!
//! This crate holds everything that is a value or a pure function: the
//! hierarchical [`Tree`] model, the flat [`Grid`] model, drop-position
//! classification, and the reorder transform that applies a committed drop.
//! Nothing here retains state between calls; the stateful drag-session
//! layer lives in `dropkit-session`.
//!
//! # Example
//!
//! ```
//! use dropkit_core::{apply_drop, DropPosition, Node, NodeId, Tree};
//!
//! let tree = Tree::new(vec![
//!     Node::item(NodeId(1)),
//!     Node::item(NodeId(2)),
//!     Node::item(NodeId(3)),
//! ]);
//!
//! // Drag item 3 before item 1.
//! let moved = apply_drop(&tree, &[NodeId(3)], NodeId(1), DropPosition::Before).unwrap();
//! let order: Vec<_> = moved.roots().iter().map(|n| n.id()).collect();
//! assert_eq!(order, vec![NodeId(3), NodeId(1), NodeId(2)]);
//! ```

pub mod grid;
pub mod position;
pub mod reorder;
pub mod tree;

pub use grid::Grid;
pub use position::DropPosition;
pub use reorder::{ReorderError, apply_drop};
pub use tree::{Node, NodeId, Tree};
