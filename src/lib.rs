//! kubectl-tree library
//!
//! Resolves the owner references of Kubernetes objects into trees and renders
//! them as indented text. The binary is a thin wrapper; everything here can be
//! driven against any `RestMapper` and `ObjectStore` for testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod kube;
pub mod models;
pub mod select;
pub mod tree;

// Re-export commonly used types for convenience
pub use crate::error::TreeError;
pub use crate::kube::{DiscoveryMapper, ObjectStore, RestMapper};
pub use crate::models::{LiveObject, ObjectKey, ObjectRef, ResourceType, TypeQuery};
pub use crate::tree::{RenderOptions, TreeBuilder, TreeNode, TreeOptions, print_trees, render};
