//! Renders the shape of a [`Tree`] sideways: the root at the left edge, right subtrees above their
//! parent and left subtrees below it.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::build(1..=3).unwrap();
//!
//! assert_eq!(tree.to_string(), "|   ┌── 3\n└── 2\n    └── 1\n");
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

/// Work left to do while rendering. Expanding a subtree queues its own line between its two
/// child subtrees.
enum Step<'a, K> {
    Subtree {
        node: &'a Node<K>,
        prefix: String,
        is_left: bool,
    },
    Line {
        node: &'a Node<K>,
        prefix: String,
        is_left: bool,
    },
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps: Vec<Step<'_, K>> = Vec::new();
        steps.extend(self.root().map(|root| Step::Subtree {
            node: root,
            prefix: String::new(),
            is_left: true,
        }));

        while let Some(step) = steps.pop() {
            match step {
                Step::Line {
                    node,
                    prefix,
                    is_left,
                } => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{}{}{}", prefix, connector, node.key())?;
                }
                Step::Subtree {
                    node,
                    prefix,
                    is_left,
                } => {
                    let (right_guide, left_guide) = if is_left {
                        ("|   ", "    ")
                    } else {
                        ("    ", "|   ")
                    };

                    // Pushed in reverse: the right subtree is printed first.
                    if let Some(left) = node.left() {
                        steps.push(Step::Subtree {
                            node: left,
                            prefix: format!("{}{}", prefix, left_guide),
                            is_left: true,
                        });
                    }
                    let right = node
                        .right()
                        .map(|right| (right, format!("{}{}", prefix, right_guide)));
                    steps.push(Step::Line {
                        node,
                        prefix,
                        is_left,
                    });
                    if let Some((right, prefix)) = right {
                        steps.push(Step::Subtree {
                            node: right,
                            prefix,
                            is_left: false,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn single_node() {
        assert_eq!(Tree::build(vec![42]).unwrap().to_string(), "└── 42\n");
    }

    #[test]
    fn full_tree() {
        let tree = Tree::build(1..=7).unwrap();
        let expected = [
            "|       ┌── 7",
            "|   ┌── 6",
            "|   |   └── 5",
            "└── 4",
            "    |   ┌── 3",
            "    └── 2",
            "        └── 1",
        ];

        assert_eq!(tree.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn drifted_chain() {
        let mut tree = Tree::new();
        for key in [1, 2, 3] {
            tree.insert(key).unwrap();
        }
        let expected = ["|       ┌── 3", "|   ┌── 2", "└── 1"];

        // Only the root line is a left connector; everything else hangs off to the right.
        assert_eq!(tree.to_string(), expected.join("\n") + "\n");
    }
}
