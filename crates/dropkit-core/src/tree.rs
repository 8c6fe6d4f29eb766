#![forbid(unsafe_code)]

//! Hierarchical tree model for reorderable lists.
//!
//! A [`Tree`] is an ordered sequence of [`Node`]s; a node is either a leaf
//! item or a group holding its own ordered children. Groups nest to any
//! depth. Because the tree is a plain value (no parent pointers, no shared
//! ownership), the containment graph is acyclic by construction.
//!
//! The reorder engine relies on one invariant the tree itself cannot
//! enforce during construction: every [`NodeId`] appears exactly once.
//! [`Tree::validate`] checks it; the engine's validity pass assumes it.

/// Identifier for a node, unique within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

/// A node in a reorderable tree: a leaf item or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf entity. Order within its container is significant.
    Item {
        /// Identifier, unique within the tree.
        id: NodeId,
    },
    /// A container entity; children keep their own order and may be
    /// items or further groups.
    Group {
        /// Identifier, unique within the tree.
        id: NodeId,
        /// Ordered children.
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a leaf item.
    #[must_use]
    pub fn item(id: NodeId) -> Self {
        Self::Item { id }
    }

    /// Create an empty group.
    #[must_use]
    pub fn group(id: NodeId) -> Self {
        Self::Group {
            id,
            children: Vec::new(),
        }
    }

    /// Add a child to a group (builder style). Has no effect on items.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        if let Self::Group { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Set a group's children from a vec. Has no effect on items.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Node>) -> Self {
        if let Self::Group { children, .. } = &mut self {
            *children = nodes;
        }
        self
    }

    /// The node's identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Item { id } | Self::Group { id, .. } => *id,
        }
    }

    /// Whether this node is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// The node's children, or `None` for items.
    #[must_use]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Item { .. } => None,
            Self::Group { children, .. } => Some(children),
        }
    }

    /// Find a node by id within this subtree (including this node).
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Item { .. } => None,
            Self::Group { children, .. } => children.iter().find_map(|c| c.find(id)),
        }
    }

    fn collect_ids(&self, out: &mut Vec<NodeId>) {
        out.push(self.id());
        if let Self::Group { children, .. } = self {
            for child in children {
                child.collect_ids(out);
            }
        }
    }
}

/// The root ordered sequence of a reorderable list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    /// Create a tree from its top-level nodes.
    #[must_use]
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    /// The top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Consume the tree, yielding its top-level nodes.
    #[must_use]
    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    /// Find a node anywhere in the tree.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.roots.iter().find_map(|n| n.find(id))
    }

    /// Whether the tree contains a node with the given id.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Whether the node with the given id is a group.
    ///
    /// Returns `false` for unknown ids.
    #[must_use]
    pub fn is_group(&self, id: NodeId) -> bool {
        self.find(id).is_some_and(Node::is_group)
    }

    /// Whether `id` lies strictly inside the subtree rooted at `ancestor`.
    ///
    /// A node is not a descendant of itself. Returns `false` when either id
    /// is unknown or `ancestor` is a leaf.
    #[must_use]
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let Some(root) = self.find(ancestor) else {
            return false;
        };
        match root.children() {
            Some(children) => children.iter().any(|c| c.find(id).is_some()),
            None => false,
        }
    }

    /// All ids in document (pre-order) order.
    #[must_use]
    pub fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for node in &self.roots {
            node.collect_ids(&mut out);
        }
        out
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.document_order().len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Check the unique-id invariant.
    ///
    /// Returns the first id that appears more than once, if any.
    pub fn validate(&self) -> Result<(), NodeId> {
        let mut seen = std::collections::HashSet::new();
        for id in self.document_order() {
            if !seen.insert(id) {
                return Err(id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        // [1, G2[3, G4[5]], 6]
        Tree::new(vec![
            Node::item(NodeId(1)),
            Node::group(NodeId(2))
                .child(Node::item(NodeId(3)))
                .child(Node::group(NodeId(4)).child(Node::item(NodeId(5)))),
            Node::item(NodeId(6)),
        ])
    }

    #[test]
    fn builder_child_on_item_is_ignored() {
        let node = Node::item(NodeId(1)).child(Node::item(NodeId(2)));
        assert_eq!(node, Node::item(NodeId(1)));
    }

    #[test]
    fn find_and_contains() {
        let tree = sample();
        assert!(tree.contains(NodeId(5)));
        assert!(!tree.contains(NodeId(99)));
        assert_eq!(tree.find(NodeId(4)).map(Node::id), Some(NodeId(4)));
    }

    #[test]
    fn is_group_distinguishes_kinds() {
        let tree = sample();
        assert!(tree.is_group(NodeId(2)));
        assert!(tree.is_group(NodeId(4)));
        assert!(!tree.is_group(NodeId(3)));
        assert!(!tree.is_group(NodeId(99)));
    }

    #[test]
    fn descendant_checks() {
        let tree = sample();
        assert!(tree.is_descendant_of(NodeId(3), NodeId(2)));
        assert!(tree.is_descendant_of(NodeId(5), NodeId(2))); // transitive
        assert!(tree.is_descendant_of(NodeId(5), NodeId(4)));
        assert!(!tree.is_descendant_of(NodeId(2), NodeId(2))); // not its own descendant
        assert!(!tree.is_descendant_of(NodeId(1), NodeId(2)));
        assert!(!tree.is_descendant_of(NodeId(3), NodeId(1))); // leaf ancestor
    }

    #[test]
    fn document_order_is_preorder() {
        let tree = sample();
        let ids: Vec<u64> = tree.document_order().iter().map(|n| n.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn validate_accepts_unique_ids() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_duplicate() {
        let tree = Tree::new(vec![
            Node::item(NodeId(1)),
            Node::group(NodeId(2)).child(Node::item(NodeId(1))),
        ]);
        assert_eq!(tree.validate(), Err(NodeId(1)));
    }

    #[test]
    fn empty_tree() {
        let tree = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(NodeId(0)));
    }

    #[test]
    fn len_counts_nested_nodes() {
        assert_eq!(sample().len(), 6);
    }
}
