//! Property tests that only go through the public API of the crate.

mod tree;
