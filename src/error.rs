//! Failure taxonomy for owner resolution and tree construction
//!
//! Every message names the operation that failed (`resolve`, `fetch`, `list`)
//! and the reference it was working on. A type whose scope cannot be
//! classified is reported as a failed `resolve`.

use thiserror::Error;

use crate::models::ObjectKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The REST mapper has no entry for the name or group/kind
    #[error("resolve {query}: the server doesn't have a resource type \"{query}\"")]
    UnresolvableType { query: String },

    /// The referenced object no longer exists
    #[error("fetch {resource} {}: not found", display_name(.namespace, .name))]
    NotFound {
        resource: String,
        namespace: String,
        name: String,
    },

    /// The caller may not read the object's type or namespace
    #[error("fetch {resource} {}: unauthorized: {message}", display_name(.namespace, .name))]
    Unauthorized {
        resource: String,
        namespace: String,
        name: String,
        message: String,
    },

    /// Network or server-side fault from the object store
    #[error("{operation} {resource}: {message}")]
    TransientFailure {
        operation: String,
        resource: String,
        message: String,
    },

    /// An owner reference points back at an object already on the current path
    #[error("owner cycle detected: {key} already appears on the path {}", format_path(.path))]
    CycleDetected { key: ObjectKey, path: Vec<ObjectKey> },

    /// The owner chain is deeper than the configured maximum
    #[error("owner chain exceeds maximum depth {max_depth} at {key}")]
    DepthExceeded { max_depth: usize, key: ObjectKey },

    /// The traversal issued more fetches than allowed
    #[error("owner traversal exceeded {limit} fetches")]
    FetchBudgetExceeded { limit: usize },
}

impl TreeError {
    /// Whether the failure means the object is gone, as opposed to unreachable
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }
}

fn display_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", namespace, name)
    }
}

fn format_path(path: &[ObjectKey]) -> String {
    path.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
