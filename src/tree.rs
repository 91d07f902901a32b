//! A BST over numeric keys that is built balanced, drifts as it is mutated, and can be rebuilt
//! balanced on demand.
//!
//! Building the tree sorts and deduplicates the input and then picks the (lower) median of every
//! range as that subtree's root, so a freshly built tree has the smallest height possible for its
//! keys. [`Tree::insert`] and [`Tree::delete`] keep the BST ordering but make no attempt to keep
//! the tree balanced. [`Tree::is_balanced`] reports whether that has happened and
//! [`Tree::rebalance`] fixes it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build(vec![5, 3, 3, 8, 1]).unwrap();
//!
//! // Duplicates are dropped and the lower median of `[1, 3, 5, 8]` becomes the root.
//! assert_eq!(tree.root().map(|root| *root.key()), Some(3));
//! assert_eq!(tree.in_order(), vec![1, 3, 5, 8]);
//! assert_eq!(tree.height(), 2);
//!
//! // Keep adding to the right and the tree leans over.
//! for key in 9..12 {
//!     tree.insert(key).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebuilding it restores the balance without losing anything.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), vec![1, 3, 5, 8, 9, 10, 11]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::key::Key;

/// An owned, possibly empty, subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A single vertex in a [`Tree`]. It owns its children, and it has no way back up to its parent.
///
/// Nodes can only be read from outside the tree. Use the methods on [`Tree`] to change them.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Drop for Node<K> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so that dropping a tree that has drifted
        // into a long chain doesn't recurse once per level.
        let mut orphans: Vec<Box<Node<K>>> = Vec::new();
        orphans.extend(self.left.take());
        orphans.extend(self.right.take());
        while let Some(mut node) = orphans.pop() {
            orphans.extend(node.left.take());
            orphans.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Node<K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            left: Self::clone_link(&self.left),
            right: Self::clone_link(&self.right),
        }
    }
}

impl<K: PartialEq> PartialEq for Node<K> {
    /// Two nodes are equal when their subtrees have the same shape and the same keys.
    fn eq(&self, other: &Self) -> bool {
        Self::same_subtrees(Some(self), Some(other))
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, where every key is smaller than this one.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, where every key is larger than this one.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The left child (if any) followed by the right child (if any).
    fn children(&self) -> impl Iterator<Item = &Node<K>> + '_ {
        self.left().into_iter().chain(self.right())
    }

    /// Follows left children for as long as there are any.
    fn leftmost(&self) -> &Node<K> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Node<K> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Copies a whole subtree without recursing.
    fn clone_link(link: &Link<K>) -> Link<K>
    where
        K: Clone,
    {
        // Post-order walk. When a node comes back off `pending` with `children_done` set, the
        // copies of its present children are on top of `copies`, right above left.
        let mut pending: Vec<(&Node<K>, bool)> = Vec::new();
        pending.extend(link.as_deref().map(|node| (node, false)));
        let mut copies: Vec<Box<Node<K>>> = Vec::new();

        while let Some((node, children_done)) = pending.pop() {
            if children_done {
                let right = node.right.as_ref().and_then(|_| copies.pop());
                let left = node.left.as_ref().and_then(|_| copies.pop());
                copies.push(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|right| (right, false)));
                pending.extend(node.left().map(|left| (left, false)));
            }
        }
        copies.pop()
    }

    /// Whether two subtrees have the same shape and the same keys, compared without recursing.
    fn same_subtrees(a: Option<&Node<K>>, b: Option<&Node<K>>) -> bool
    where
        K: PartialEq,
    {
        let mut pairs: Vec<(Option<&Node<K>>, Option<&Node<K>>)> = vec![(a, b)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Some(a), Some(b)) => {
                    if a.key != b.key {
                        return false;
                    }
                    pairs.push((a.right(), b.right()));
                    pairs.push((a.left(), b.left()));
                }
                (None, None) => {}
                _ => return false,
            }
        }
        true
    }
}

/// A Binary Search Tree of unique numeric keys.
///
/// Only the BST ordering is maintained across mutations. Balance is something that can be
/// checked ([`Tree::is_balanced`]) and restored ([`Tree::rebalance`]).
///
/// Two trees are equal when they have the same shape and the same keys.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K: Clone> Clone for Tree<K> {
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && Node::same_subtrees(self.root(), other.root())
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    // The pre-order keys are enough to rebuild the shape by inserting them in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pre_order = Vec::with_capacity(self.len);
        self.pre_order_with(|node| pre_order.push(node.key()));

        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &pre_order)
            .finish()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K: Key> Tree<K> {
    /// Builds a balanced tree out of `items`. Duplicate items are kept once and the input order
    /// doesn't matter: the same set of keys always produces the same shape, with a height of
    /// `floor(log2(n))` for `n` unique keys.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidInput`] if one of the items can't be ordered (i.e. `NaN`). This is
    /// checked before any node is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::build(vec![7, 1, 4, 1]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.is_balanced());
    ///
    /// let empty = Tree::<u8>::build(vec![]).unwrap();
    /// assert_eq!(empty.height(), -1);
    ///
    /// let error = Tree::build(vec![1.0, f64::NAN]).unwrap_err();
    /// assert_eq!(error, TreeError::InvalidInput { position: 1 });
    /// ```
    pub fn build<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = items.into_iter().collect();
        if let Some(position) = keys.iter().position(|key| !key.is_orderable()) {
            return Err(TreeError::InvalidInput { position });
        }

        // Every key is orderable at this point so `partial_cmp` always answers.
        keys.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        keys.dedup();

        Ok(Self::from_sorted(&keys))
    }

    /// Builds the tree for keys that are already sorted and unique.
    fn from_sorted(keys: &[K]) -> Self {
        let tree = Self {
            root: Self::build_range(keys),
            len: keys.len(),
        };
        debug!(
            "built tree of {} keys with height {}",
            tree.len,
            tree.height()
        );

        if cfg!(debug_assertions) {
            assert!(tree.is_ordered());
            assert!(tree.is_balanced());
        }
        tree
    }

    /// The recursion here only goes as deep as the resulting tree, which is `floor(log2(n))`.
    fn build_range(keys: &[K]) -> Link<K> {
        if keys.is_empty() {
            return None;
        }

        // Lower median for even lengths.
        let mid = (keys.len() - 1) / 2;
        Some(Box::new(Node {
            key: keys[mid],
            left: Self::build_range(&keys[..mid]),
            right: Self::build_range(&keys[mid + 1..]),
        }))
    }

    /// Walks down from `link` towards `key` and returns the slot that holds it, or the empty slot
    /// where it would be placed. Returns `None` if `key` can't be compared with a key on the way.
    fn search<'a>(mut link: &'a mut Link<K>, key: &K) -> Option<&'a mut Link<K>> {
        loop {
            let ordering = match link.as_deref() {
                None => return Some(link),
                Some(node) => key.partial_cmp(&node.key)?,
            };
            if ordering == Ordering::Equal {
                return Some(link);
            }

            let node = link.as_mut()?;
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Adds `key` to the tree as a new leaf and returns `true`. If the key is already in the tree
    /// nothing changes and `false` is returned. The tree is not rebalanced.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidKey`] if `key` can't be ordered (i.e. `NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(true));
    /// assert_eq!(tree.insert(1), Ok(false));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<bool> {
        if !key.is_orderable() {
            return Err(TreeError::InvalidKey);
        }

        let inserted = match Self::search(&mut self.root, &key) {
            Some(slot) if slot.is_none() => {
                *slot = Some(Box::new(Node::new(key)));
                self.len += 1;
                true
            }
            _ => false,
        };

        if inserted {
            trace!("inserted {:?}", key);
        } else {
            trace!("{:?} already present, insert ignored", key);
        }
        Ok(inserted)
    }

    /// Removes `key` from the tree and returns whether it was there. The tree is not rebalanced.
    ///
    /// A node with two children takes the smallest key of its right subtree, and that key's
    /// original node is removed from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build(1..=5).unwrap();
    ///
    /// assert!(tree.delete(&3));
    /// assert!(!tree.delete(&3));
    /// assert_eq!(tree.in_order(), vec![1, 2, 4, 5]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = Self::remove(&mut self.root, key);
        if removed {
            self.len -= 1;
            trace!("deleted {:?}", key);
        } else {
            trace!("{:?} not present, delete ignored", key);
        }
        removed
    }

    fn remove(link: &mut Link<K>, key: &K) -> bool {
        let slot = match Self::search(link, key) {
            Some(slot) => slot,
            None => return false,
        };
        let node = match slot.as_mut() {
            Some(node) => node,
            None => return false,
        };

        let successor = match (node.left(), node.right()) {
            (Some(_), Some(right)) => Some(right.leftmost().key),
            _ => None,
        };

        match successor {
            Some(successor) => {
                node.key = successor;
                // The successor has no left child so this lands in the branch below.
                let removed = Self::remove(&mut node.right, &successor);

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left() {
                        assert!(left.key < node.key);
                    }
                    if let Some(right) = node.right() {
                        assert!(right.leftmost().key > node.key);
                    }
                }
                removed
            }
            None => {
                if let Some(mut removed) = slot.take() {
                    *slot = removed.left.take().or_else(|| removed.right.take());
                }
                true
            }
        }
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]).unwrap();
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.partial_cmp(&node.key)? {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.leftmost().key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| root.rightmost().key())
    }

    /// The height of the whole tree. See [`Tree::height_of`].
    pub fn height(&self) -> isize {
        Self::height_of(self.root())
    }

    /// The number of edges on the longest path from `node` down to a leaf. A leaf has a height
    /// of `0` and a missing node has a height of `-1`, so a node's height is always one more
    /// than the taller of its two children.
    pub fn height_of(node: Option<&Node<K>>) -> isize {
        let mut height = -1;
        let mut level: Vec<&Node<K>> = node.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter().flat_map(|node| node.children()).collect();
        }
        height
    }

    /// The number of edges from the root down to `target`, or `None` if `target` isn't a node of
    /// this tree. See [`Tree::depth_from`].
    pub fn depth(&self, target: &Node<K>) -> Option<usize> {
        Self::depth_from(target, self.root())
    }

    /// The number of edges from `from` down to `target`, or `None` if `target` isn't in the
    /// subtree rooted at `from`. Nodes are compared by identity, not by key, so a node of another
    /// tree is never found even if it holds the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(1..=7).unwrap();
    /// let one = tree.find(&1).unwrap();
    ///
    /// assert_eq!(tree.depth(one), Some(2));
    /// assert_eq!(Tree::depth_from(one, tree.find(&2)), Some(1));
    /// assert_eq!(Tree::depth_from(one, tree.find(&6)), None);
    /// ```
    pub fn depth_from(target: &Node<K>, from: Option<&Node<K>>) -> Option<usize> {
        let mut current = from;
        let mut depth = 0;
        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Some(depth);
            }
            current = match target.key.partial_cmp(&node.key)? {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                // Same key, different node: `target` lives in some other tree.
                Ordering::Equal => return None,
            };
            depth += 1;
        }
        None
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        Self::is_balanced_at(self.root())
    }

    /// Whether the subtree rooted at `node` is balanced. A missing node is balanced.
    pub fn is_balanced_at(node: Option<&Node<K>>) -> bool {
        // Post-order walk. When a node comes back off `pending` with `children_done` set, the
        // heights of its present children are on top of `heights`, right above left.
        let mut pending: Vec<(&Node<K>, bool)> = Vec::new();
        pending.extend(node.map(|node| (node, false)));
        let mut heights: Vec<isize> = Vec::new();

        while let Some((node, children_done)) = pending.pop() {
            if children_done {
                let right = match node.right {
                    Some(_) => heights.pop().unwrap_or(-1),
                    None => -1,
                };
                let left = match node.left {
                    Some(_) => heights.pop().unwrap_or(-1),
                    None => -1,
                };
                if (left - right).abs() > 1 {
                    return false;
                }
                heights.push(left.max(right) + 1);
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|right| (right, false)));
                pending.extend(node.left().map(|left| (left, false)));
            }
        }
        true
    }

    /// Throws away the current shape and builds a balanced tree out of the same keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 0..10 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.height(), 9);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn rebalance(&mut self) {
        let keys = self.in_order();
        debug!(
            "rebalancing {} keys from height {}",
            keys.len(),
            self.height()
        );
        *self = Self::from_sorted(&keys);
    }

    /// Whether an in-order walk visits keys in strictly ascending order.
    pub(crate) fn is_ordered(&self) -> bool {
        let keys = self.in_order();
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }
}
