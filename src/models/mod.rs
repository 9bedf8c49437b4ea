//! Object model shared by the resolver, the fetcher and the tree builder
//!
//! Structure:
//! - `resource_type.rs` - fully-qualified resource types and lookup queries
//! - `object.rs` - fetched objects and the owner references they declare

mod object;
mod resource_type;

pub use object::{LiveObject, ObjectKey, ObjectRef};
pub use resource_type::{ResourceType, TypeQuery, split_api_version};
