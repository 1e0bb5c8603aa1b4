//! Traversal tests over the public API
//!
//! Trees are decoded from the JSON an external parser would emit, then walked
//! by visitors the way downstream passes use them.

mod helpers;

mod json_trees;
mod visitors;
