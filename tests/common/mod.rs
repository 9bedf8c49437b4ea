//! In-memory cluster shared by the integration tests
//!
//! The REST mapper is the real `DiscoveryMapper` built from a fixed set of
//! resources; the object store is a map that records every read.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kube::core::ApiResource;
use kubectl_tree::{DiscoveryMapper, LiveObject, ObjectRef, ObjectStore, ResourceType, TreeError};

pub fn pods() -> ResourceType {
    ResourceType::new("", "v1", "pods", "Pod")
}

pub fn nodes() -> ResourceType {
    ResourceType::new("", "v1", "nodes", "Node")
}

pub fn configmaps() -> ResourceType {
    ResourceType::new("", "v1", "configmaps", "ConfigMap")
}

pub fn replicasets() -> ResourceType {
    ResourceType::new("apps", "v1", "replicasets", "ReplicaSet")
}

pub fn deployments() -> ResourceType {
    ResourceType::new("apps", "v1", "deployments", "Deployment")
}

pub fn widgets() -> ResourceType {
    ResourceType::new("example.com", "v1", "widgets", "Widget")
}

/// Discovery snapshot of the fake cluster
pub fn mapper() -> DiscoveryMapper {
    DiscoveryMapper::from_resources(vec![
        (pods().to_api_resource(), true),
        (configmaps().to_api_resource(), true),
        (nodes().to_api_resource(), false),
        (replicasets().to_api_resource(), true),
        (deployments().to_api_resource(), true),
        (widgets().to_api_resource(), false),
    ])
}

/// Discovery snapshot without any `example.com` types
pub fn mapper_without_crds() -> DiscoveryMapper {
    let resources: Vec<(ApiResource, bool)> = vec![
        (pods().to_api_resource(), true),
        (replicasets().to_api_resource(), true),
        (deployments().to_api_resource(), true),
    ];
    DiscoveryMapper::from_resources(resources)
}

pub fn object(resource: &ResourceType, name: &str, namespace: &str) -> LiveObject {
    LiveObject {
        api_version: resource.api_version(),
        kind: resource.kind.clone(),
        name: name.to_string(),
        namespace: namespace.to_string(),
        uid: Some(format!("{}-{}-uid", resource.resource, name)),
        owner_refs: vec![],
    }
}

pub fn owner_ref(resource: &ResourceType, name: &str) -> ObjectRef {
    ObjectRef::new(&resource.group, &resource.kind, name)
}

pub fn owned_by(mut obj: LiveObject, owners: Vec<ObjectRef>) -> LiveObject {
    obj.owner_refs = owners;
    obj
}

type StoreKey = (String, String, String);

/// Object store over a fixed set of objects
///
/// Clones share one read log, so a clone wrapped in another store still
/// reports through the original.
#[derive(Clone, Default)]
pub struct FakeCluster {
    objects: HashMap<StoreKey, LiveObject>,
    gets: Arc<Mutex<Vec<String>>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: &ResourceType, obj: LiveObject) -> Self {
        let key = (resource.to_string(), obj.namespace.clone(), obj.name.clone());
        self.objects.insert(key, obj);
        self
    }

    /// Every `get` issued so far, as `resource namespace/name`
    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for FakeCluster {
    async fn get(
        &self,
        resource: &ResourceType,
        namespace: &str,
        name: &str,
    ) -> Result<LiveObject, TreeError> {
        self.gets
            .lock()
            .unwrap()
            .push(format!("{} {}/{}", resource, namespace, name));

        let key = (resource.to_string(), namespace.to_string(), name.to_string());
        self.objects
            .get(&key)
            .cloned()
            .ok_or_else(|| TreeError::NotFound {
                resource: resource.to_string(),
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    async fn list(
        &self,
        resource: &ResourceType,
        namespace: &str,
    ) -> Result<Vec<LiveObject>, TreeError> {
        let resource = resource.to_string();
        let mut found: Vec<LiveObject> = self
            .objects
            .iter()
            .filter(|((res, ns, _), _)| *res == resource && (namespace.is_empty() || ns == namespace))
            .map(|(_, obj)| obj.clone())
            .collect();
        found.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));
        Ok(found)
    }
}

/// Pod/foo -> ReplicaSet/bar -> Deployment/baz, all in kube-system
pub fn pod_replicaset_deployment() -> (FakeCluster, LiveObject) {
    let pod = owned_by(
        object(&pods(), "foo", "kube-system"),
        vec![owner_ref(&replicasets(), "bar")],
    );
    let rs = owned_by(
        object(&replicasets(), "bar", "kube-system"),
        vec![owner_ref(&deployments(), "baz")],
    );
    let deploy = object(&deployments(), "baz", "kube-system");

    let cluster = FakeCluster::new()
        .with(&pods(), pod.clone())
        .with(&replicasets(), rs)
        .with(&deployments(), deploy);
    (cluster, pod)
}
