//! Owner tree construction
//!
//! Depth-first: a node is complete only once every owner subtree beneath it
//! is complete, which is also the order the renderer emits lines in. Every
//! owner edge costs one resolve, one scope lookup and one fetch, issued one
//! after another on the calling task.
//!
//! Owner references are plain strings nothing validates, so the walk keeps
//! the path from the root to the current node and refuses to revisit an
//! object on it. Depth and total fetches are bounded by `TreeOptions`.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::node::TreeNode;
use crate::error::TreeError;
use crate::kube::{ObjectStore, RestMapper};
use crate::models::{LiveObject, ObjectKey, ObjectRef, TypeQuery};

/// Limits applied to a single traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Deepest owner level allowed below the starting object
    pub max_depth: usize,
    /// Most owner fetches a single starting object may issue
    pub max_fetches: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_fetches: 1000,
        }
    }
}

/// State owned by one traversal
#[derive(Debug, Default)]
struct Walk {
    path: Vec<ObjectKey>,
    fetches: usize,
}

/// Builds ownership trees against a REST mapper and an object store
pub struct TreeBuilder<'a, M: ?Sized, S: ?Sized> {
    mapper: &'a M,
    store: &'a S,
    options: TreeOptions,
}

impl<'a, M, S> TreeBuilder<'a, M, S>
where
    M: RestMapper + ?Sized,
    S: ObjectStore + ?Sized,
{
    pub fn new(mapper: &'a M, store: &'a S, options: TreeOptions) -> Self {
        Self {
            mapper,
            store,
            options,
        }
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    /// Build the ownership tree rooted at `object`
    ///
    /// Any failure at any depth aborts the whole traversal; no partial tree is
    /// returned.
    pub async fn build(&self, object: LiveObject) -> Result<TreeNode, TreeError> {
        let mut walk = Walk::default();
        let root = object.key();
        tracing::debug!("Building owner tree for {}", root);

        let tree = self.build_node(object, &mut walk).await?;
        tracing::debug!(
            "Built owner tree for {}: {} nodes, {} levels, {} fetches",
            root,
            tree.size(),
            tree.height(),
            walk.fetches
        );
        Ok(tree)
    }

    fn build_node<'w>(
        &'w self,
        object: LiveObject,
        walk: &'w mut Walk,
    ) -> BoxFuture<'w, Result<TreeNode, TreeError>> {
        async move {
            walk.path.push(object.key());

            let mut owners = Vec::with_capacity(object.owner_refs.len());
            for owner_ref in &object.owner_refs {
                let owner = self.fetch_owner(&object, owner_ref, walk).await?;
                owners.push(self.build_node(owner, walk).await?);
            }

            walk.path.pop();
            Ok(TreeNode { object, owners })
        }
        .boxed()
    }

    /// Resolve, scope and fetch one declared owner of `child`
    async fn fetch_owner(
        &self,
        child: &LiveObject,
        owner_ref: &ObjectRef,
        walk: &mut Walk,
    ) -> Result<LiveObject, TreeError> {
        let resource = self
            .mapper
            .resource_for(&TypeQuery::group_kind(&owner_ref.api_group, &owner_ref.kind))?;

        // A cluster-scoped owner is fetched without a namespace even when the
        // child is namespaced.
        let namespace = if self.mapper.is_namespaced(&resource.group, &owner_ref.kind)? {
            child.namespace.as_str()
        } else {
            ""
        };

        let key = ObjectKey {
            group: resource.group.clone(),
            kind: resource.kind.clone(),
            namespace: namespace.to_string(),
            name: owner_ref.name.clone(),
        };
        if walk.path.contains(&key) {
            return Err(TreeError::CycleDetected {
                key,
                path: walk.path.clone(),
            });
        }
        // The path holds every ancestor of the owner, so its length is the
        // owner's depth below the root.
        if walk.path.len() > self.options.max_depth {
            return Err(TreeError::DepthExceeded {
                max_depth: self.options.max_depth,
                key,
            });
        }
        if walk.fetches >= self.options.max_fetches {
            return Err(TreeError::FetchBudgetExceeded {
                limit: self.options.max_fetches,
            });
        }
        walk.fetches += 1;

        let owner = self.store.get(&resource, namespace, &owner_ref.name).await?;

        if let (Some(expected), Some(actual)) = (&owner_ref.uid, &owner.uid) {
            if expected != actual {
                tracing::warn!(
                    "Owner UID mismatch for {}: expected {}, got {}",
                    owner_ref,
                    expected,
                    actual
                );
            }
        }

        Ok(owner)
    }
}
