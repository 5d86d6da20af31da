//! Unbalanced binary search tree keyed by strings.
//!
//! [`IndexedTree`] is the ordered lookup structure behind every inventory
//! index. It is a plain binary search tree: keys are compared
//! lexicographically, nothing is rebalanced, and a tree built from sorted keys
//! degenerates into a list. To keep that case safe, nodes live in an arena and
//! every operation (insert, lookup, traversal, drop) is iterative, so tree
//! height never translates into call-stack depth.
//!
//! The tree stores values of any type. The inventory stores lightweight
//! product handles so the same product can be reachable from several trees
//! without shared ownership.

use std::cmp::Ordering;

mod errors;
mod iter;

pub use errors::IndexError;
pub use iter::{Iter, Keys, Values};

/// Position of a node inside the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    key: String,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary search tree mapping non-empty string keys to values.
///
/// Invariant: for every node, all keys in its left subtree compare less than
/// the node's key and all keys in its right subtree compare greater.
/// Duplicate keys are never stored; the first value inserted for a key wins.
#[derive(Debug, Clone)]
pub struct IndexedTree<V> {
    nodes: Vec<Node<V>>,
    root: Option<NodeId>,
}

impl<V> Default for IndexedTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IndexedTree<V> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// The tree is descended by lexicographic comparison and a new leaf is
    /// attached at the first free position. If `key` is already present the
    /// tree is left untouched and the existing value is kept.
    ///
    /// # Returns
    /// * `Ok(true)` - The key was new and the value was stored
    /// * `Ok(false)` - The key already existed; nothing changed
    ///
    /// # Errors
    /// Returns [`IndexError::EmptyKey`] if `key` is empty. The tree is not
    /// descended in that case.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<bool, IndexError> {
        let key = key.into();
        if key.is_empty() {
            return Err(IndexError::EmptyKey);
        }

        let Some(mut current) = self.root else {
            self.root = Some(self.push_node(key, value));
            return Ok(true);
        };

        loop {
            let node = &self.nodes[current.0];
            let ordering = key.as_str().cmp(node.key.as_str());
            let child = match ordering {
                Ordering::Equal => return Ok(false),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };

            match child {
                Some(next) => current = next,
                None => {
                    let id = self.push_node(key, value);
                    let parent = &mut self.nodes[current.0];
                    if ordering == Ordering::Less {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return Ok(true);
                }
            }
        }
    }

    /// Looks up the value stored under exactly `key`.
    ///
    /// Only the tree's own key is compared, so the search prunes one subtree
    /// at every step.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id.0];
            current = match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Returns `true` if `key` is stored in the tree.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the first value, in ascending key order, accepted by `predicate`.
    ///
    /// Unlike [`get`](Self::get) this cannot use the ordering of the keys: it
    /// is meant for matching on some property of the value, and visits the
    /// whole tree in the worst case.
    pub fn find<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V) -> bool,
    {
        self.values().find(|&value| predicate(value))
    }

    /// In-order iterator over `(key, value)` pairs.
    ///
    /// Each call starts a fresh traversal from the root.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.nodes, self.root)
    }

    /// In-order iterator over the keys.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    /// In-order iterator over the values.
    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id.0];
            for child in [node.left, node.right].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        deepest
    }

    fn push_node(&mut self, key: String, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key,
            value,
            left: None,
            right: None,
        });
        id
    }
}

impl<'a, V> IntoIterator for &'a IndexedTree<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
