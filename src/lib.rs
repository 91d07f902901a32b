//! A Binary Search Tree over numeric keys that is built balanced and can be rebalanced on demand,
//! along with the usual ways of walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the number of edges on the
//! longest path from the root `Node` down to a leaf. A tree built from `N` keys with
//! [`Tree::build`] has the smallest height possible, `floor(lg N)`. Inserting and deleting keep
//! the invariants above but not the height, so a tree can drift out of balance;
//! [`Tree::is_balanced`] detects this and [`Tree::rebalance`] undoes it.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree visits the keys in
//! sorted order. That and the other traversal orders are in [`traverse`].

#![deny(missing_docs)]

mod diagnostics;
mod display;
mod error;
mod key;
pub mod traverse;
pub mod tree;

#[cfg(test)]
mod test;

pub use crate::diagnostics::Diagnostics;
pub use crate::error::{Result, TreeError};
pub use crate::key::Key;
pub use crate::traverse::Iter;
pub use crate::tree::{Node, Tree};
