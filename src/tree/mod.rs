//! Ownership trees
//!
//! Builds, for each starting object, the tree of owners it declares through
//! `metadata.ownerReferences`, and renders it as indented text.

mod batch;
mod builder;
mod node;
mod render;

pub use batch::{TreeFailure, print_trees};
pub use builder::{TreeBuilder, TreeOptions};
pub use node::TreeNode;
pub use render::{RenderOptions, render, write_tree};
