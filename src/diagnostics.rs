use std::fmt;

use crate::key::Key;
use crate::tree::Tree;

/// A snapshot of a tree's balance and of its keys in every traversal order, as produced by
/// [`Tree::collect_diagnostics`].
///
/// Its `Display` output has one labelled line per field:
///
/// ```text
/// Is balanced: true
/// Level Order: [2, 1, 3]
/// Pre Order: [2, 1, 3]
/// Post Order: [1, 3, 2]
/// In Order: [1, 2, 3]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<K> {
    /// See [`Tree::is_balanced`].
    pub is_balanced: bool,
    /// See [`Tree::level_order`].
    pub level_order: Vec<K>,
    /// See [`Tree::pre_order`].
    pub pre_order: Vec<K>,
    /// See [`Tree::post_order`].
    pub post_order: Vec<K>,
    /// See [`Tree::in_order`].
    pub in_order: Vec<K>,
}

impl<K: Key> Tree<K> {
    /// Gathers the balance flag and all four traversals in one go.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let diagnostics = Tree::build(vec![1, 2, 3]).unwrap().collect_diagnostics();
    ///
    /// assert!(diagnostics.is_balanced);
    /// assert_eq!(diagnostics.post_order, vec![1, 3, 2]);
    /// ```
    pub fn collect_diagnostics(&self) -> Diagnostics<K> {
        Diagnostics {
            is_balanced: self.is_balanced(),
            level_order: self.level_order(),
            pre_order: self.pre_order(),
            post_order: self.post_order(),
            in_order: self.in_order(),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Diagnostics<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Is balanced: {}", self.is_balanced)?;
        writeln!(f, "Level Order: {:?}", self.level_order)?;
        writeln!(f, "Pre Order: {:?}", self.pre_order)?;
        writeln!(f, "Post Order: {:?}", self.post_order)?;
        writeln!(f, "In Order: {:?}", self.in_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let diagnostics = Tree::<u16>::new().collect_diagnostics();

        assert!(diagnostics.is_balanced);
        assert!(diagnostics.level_order.is_empty());
        assert!(diagnostics.pre_order.is_empty());
        assert!(diagnostics.post_order.is_empty());
        assert!(diagnostics.in_order.is_empty());
    }

    #[test]
    fn drifted_tree() {
        let mut tree = Tree::build(vec![1, 2, 3]).unwrap();
        tree.insert(4).unwrap();
        tree.insert(5).unwrap();

        assert_eq!(
            tree.collect_diagnostics(),
            Diagnostics {
                is_balanced: false,
                level_order: vec![2, 1, 3, 4, 5],
                pre_order: vec![2, 1, 3, 4, 5],
                post_order: vec![1, 5, 4, 3, 2],
                in_order: vec![1, 2, 3, 4, 5],
            }
        );
    }

    #[test]
    fn display() {
        let diagnostics = Tree::build(vec![3, 1, 2]).unwrap().collect_diagnostics();

        assert_eq!(
            diagnostics.to_string(),
            "Is balanced: true\n\
             Level Order: [2, 1, 3]\n\
             Pre Order: [2, 1, 3]\n\
             Post Order: [1, 3, 2]\n\
             In Order: [1, 2, 3]\n"
        );
    }
}
