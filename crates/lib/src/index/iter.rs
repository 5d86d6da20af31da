//! In-order iterators over an [`IndexedTree`](super::IndexedTree).
//!
//! Traversal uses an explicit stack holding the nodes whose left subtree has
//! been visited but which have not been yielded yet. Each node is pushed and
//! popped exactly once.

use std::iter::FusedIterator;

use super::{Node, NodeId};

/// Iterator over `(key, value)` pairs in ascending key order.
pub struct Iter<'a, V> {
    nodes: &'a [Node<V>],
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(nodes: &'a [Node<V>], root: Option<NodeId>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            remaining: nodes.len(),
        };
        iter.push_leftmost_path(root);
        iter
    }

    fn push_leftmost_path(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id.0].left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id.0];
        self.remaining = self.remaining.saturating_sub(1);
        self.push_leftmost_path(node.right);
        Some((node.key.as_str(), &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over keys in ascending order.
pub struct Keys<'a, V> {
    pub(super) inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over values in ascending key order.
pub struct Values<'a, V> {
    pub(super) inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
