//! Building and printing several starting objects in one run

use std::fmt;
use std::io::Write;

use super::builder::TreeBuilder;
use super::render::{RenderOptions, write_tree};
use crate::error::TreeError;
use crate::kube::{ObjectStore, RestMapper};
use crate::models::{LiveObject, ObjectKey};

/// A starting object whose tree could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFailure {
    pub root: ObjectKey,
    pub error: TreeError,
}

impl fmt::Display for TreeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.root.kind, self.root.name, self.error)
    }
}

impl std::error::Error for TreeFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Build and print the tree of every starting object, in order
///
/// Each tree is written as soon as it is complete. A failed traversal prints
/// nothing for its object and does not stop the objects after it; the failures
/// are returned for the caller to report.
pub async fn print_trees<M, S, W>(
    builder: &TreeBuilder<'_, M, S>,
    roots: Vec<LiveObject>,
    options: &RenderOptions,
    out: &mut W,
) -> std::io::Result<Vec<TreeFailure>>
where
    M: RestMapper + ?Sized,
    S: ObjectStore + ?Sized,
    W: Write,
{
    let mut failures = Vec::new();

    for root in roots {
        let key = root.key();
        match builder.build(root).await {
            Ok(tree) => {
                write_tree(out, &tree, options)?;
                out.flush()?;
            }
            Err(error) => {
                tracing::warn!("Owner tree for {} failed: {}", key, error);
                failures.push(TreeFailure { root: key, error });
            }
        }
    }

    Ok(failures)
}
