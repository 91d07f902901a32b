//! The four ways of walking a [`Tree`]: level order, in-order, pre-order and post-order.
//!
//! Each order comes as a pair. The `*_with` form hands every [`Node`] to a visitor and returns
//! nothing, and the plain form collects the keys into a `Vec` in the order they were visited.
//! All of them use an explicit queue or stack, so how far a tree has drifted from balanced only
//! affects how much memory a walk takes, never how deep the call stack goes.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build(1..=7).unwrap();
//!
//! assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.pre_order(), vec![4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(tree.post_order(), vec![1, 3, 2, 5, 7, 6, 4]);
//!
//! let mut leaves = 0;
//! tree.post_order_with(|node| {
//!     if node.is_leaf() {
//!         leaves += 1;
//!     }
//! });
//! assert_eq!(leaves, 4);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::key::Key;
use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// Visits every node level by level, from the root down, left to right within a level.
    pub fn level_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visits every node's left subtree, then the node, then its right subtree. In a BST this is
    /// ascending key order.
    pub fn in_order_with<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        Nodes::new(self.root()).for_each(visit);
    }

    /// Visits every node before either of its subtrees, left subtree first.
    pub fn pre_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        let mut stack: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(node);
            // Right goes on first so the left subtree is walked first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Visits every node after both of its subtrees, left subtree first.
    pub fn post_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        // The flag says whether the node's children have already been pushed.
        let mut stack: Vec<(&Node<K>, bool)> = Vec::new();
        stack.extend(self.root().map(|root| (root, false)));
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(node);
            } else {
                stack.push((node, true));
                stack.extend(node.right().map(|right| (right, false)));
                stack.extend(node.left().map(|left| (left, false)));
            }
        }
    }

    /// An iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![3, 1, 2]).unwrap();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            nodes: Nodes::new(self.root()),
            remaining: self.len(),
        }
    }
}

impl<K: Key> Tree<K> {
    /// The keys in level order. See [`Tree::level_order_with`].
    pub fn level_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        self.level_order_with(|node| keys.push(*node.key()));
        keys
    }

    /// The keys in ascending order. See [`Tree::in_order_with`].
    pub fn in_order(&self) -> Vec<K> {
        self.iter().copied().collect()
    }

    /// The keys in pre-order. See [`Tree::pre_order_with`].
    pub fn pre_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        self.pre_order_with(|node| keys.push(*node.key()));
        keys
    }

    /// The keys in post-order. See [`Tree::post_order_with`].
    pub fn post_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        self.post_order_with(|node| keys.push(*node.key()));
        keys
    }
}

/// In-order walk over nodes. `stack` holds the nodes whose left subtrees are being walked, the
/// next one to yield on top.
struct Nodes<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Nodes<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut nodes = Self { stack: Vec::new() };
        nodes.push_left_edge(root);
        nodes
    }

    fn push_left_edge(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right());
        Some(node)
    }
}

/// Ascending iterator over the keys of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K> {
    nodes: Nodes<'a, K>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
