//! Ordered left-child/right-sibling tree.
//!
//! Nodes live in a [`SlotMap`] owned by the tree and link forward only:
//! each node knows its first child and its next sibling, nothing else.
//! Replacing the root drops every node at once.

use slotmap::SlotMap;

use crate::error::TreeError;

slotmap::new_key_type! {
    /// Handle to a node in a [`Tree`].
    pub struct NodeId;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            first_child: None,
            next_sibling: None,
        }
    }
}

/// A tree that keeps children in insertion order.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` as the last child of `parent`.
    ///
    /// With `parent` set to `None` the whole tree is discarded and `value`
    /// becomes the new root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if `parent` is not in this tree,
    /// for instance a handle that outlived a root reset.
    pub fn insert(&mut self, value: T, parent: Option<NodeId>) -> Result<NodeId, TreeError> {
        let Some(parent) = parent else {
            self.nodes.clear();
            let root = self.nodes.insert(Node::new(value));
            self.root = Some(root);
            return Ok(root);
        };

        let mut last = match self.nodes.get(parent) {
            Some(node) => node.first_child,
            None => return Err(TreeError::NodeNotFound),
        };
        while let Some(sibling) = last.and_then(|id| self.nodes[id].next_sibling) {
            last = Some(sibling);
        }

        let id = self.nodes.insert(Node::new(value));
        match last {
            Some(last) => self.nodes[last].next_sibling = Some(id),
            None => self.nodes[parent].first_child = Some(id),
        }
        Ok(id)
    }

    /// The root node, if any value was ever inserted.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Value stored at `id`, or `None` for a stale handle.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    /// Mutable value stored at `id`, or `None` for a stale handle.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// First child of `id`.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.first_child)
    }

    /// Next sibling of `id` under the same parent.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.next_sibling)
    }

    /// Direct children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.first_child(id), move |&child| self.next_sibling(child))
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk starting at `start` with depth 0.
    ///
    /// Each node is visited before its first child's subtree (at depth + 1),
    /// which is visited before the node's next sibling (at the same depth).
    /// Starting anywhere but the root therefore also walks the start node's
    /// later siblings.
    pub fn traverse<F>(&self, start: NodeId, mut visitor: F)
    where
        F: FnMut(NodeId, &T, usize),
    {
        let mut stack = vec![(start, 0)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            visitor(id, &node.value, depth);
            if let Some(sibling) = node.next_sibling {
                stack.push((sibling, depth));
            }
            if let Some(child) = node.first_child {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Same walk as [`Tree::traverse`], handing out mutable values.
    pub fn traverse_mut<F>(&mut self, start: NodeId, mut visitor: F)
    where
        F: FnMut(NodeId, &mut T, usize),
    {
        let mut stack = vec![(start, 0)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };
            visitor(id, &mut node.value, depth);
            if let Some(sibling) = node.next_sibling {
                stack.push((sibling, depth));
            }
            if let Some(child) = node.first_child {
                stack.push((child, depth + 1));
            }
        }
    }
}
