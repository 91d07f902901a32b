use thiserror::Error;

/// Ways a [`Tree`][crate::Tree] can refuse its input. Looking up, deleting or measuring something
/// that isn't in the tree is never an error; those operations just report that nothing was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An item passed to [`Tree::build`][crate::Tree::build] can't be ordered (e.g. `NaN`). No
    /// node is built when this is returned.
    #[error("item at position {position} cannot be ordered against the other items")]
    InvalidInput {
        /// Index of the first offending item in the input.
        position: usize,
    },
    /// A key passed to [`Tree::insert`][crate::Tree::insert] can't be ordered. The tree is left
    /// untouched.
    #[error("key cannot be ordered against the keys in the tree")]
    InvalidKey,
}

/// Shorthand for results whose error is a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
