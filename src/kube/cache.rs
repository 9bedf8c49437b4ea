//! Per-run memoization of owner reads
//!
//! A shared owner (one ReplicaSet above fifty pods) is otherwise read once per
//! path that reaches it. Wrapping the store changes the number of API calls,
//! never the rendered output.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::ObjectStore;
use crate::error::TreeError;
use crate::models::{LiveObject, ResourceType};

type CacheKey = (ResourceType, String, String);

/// `ObjectStore` that remembers successful `get`s for the lifetime of the run
///
/// Failures are not cached. `list` is passed through untouched.
pub struct CachingStore<S> {
    inner: S,
    objects: RwLock<HashMap<CacheKey, LiveObject>>,
}

impl<S: ObjectStore> CachingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct objects held
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl<S: ObjectStore> ObjectStore for CachingStore<S> {
    async fn get(
        &self,
        resource: &ResourceType,
        namespace: &str,
        name: &str,
    ) -> Result<LiveObject, TreeError> {
        let key = (resource.clone(), namespace.to_string(), name.to_string());
        if let Some(hit) = self.objects.read().await.get(&key) {
            tracing::trace!("Cache hit for {} {}/{}", resource, namespace, name);
            return Ok(hit.clone());
        }

        let obj = self.inner.get(resource, namespace, name).await?;
        self.objects.write().await.insert(key, obj.clone());
        Ok(obj)
    }

    async fn list(
        &self,
        resource: &ResourceType,
        namespace: &str,
    ) -> Result<Vec<LiveObject>, TreeError> {
        self.inner.list(resource, namespace).await
    }
}
