//! Fetched objects and their owner references

use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::core::DynamicObject;

use super::resource_type::{ResourceType, split_api_version};

/// Weak reference to an owner, as declared in `metadata.ownerReferences`
///
/// Nothing guarantees the referenced object still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub kind: String,
    pub name: String,
    pub api_group: String,
    pub uid: Option<String>,
}

impl ObjectRef {
    pub fn new(
        api_group: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            api_group: api_group.into(),
            uid: None,
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }
}

impl From<&OwnerReference> for ObjectRef {
    fn from(owner: &OwnerReference) -> Self {
        let (group, _) = split_api_version(&owner.api_version);
        Self {
            kind: owner.kind.clone(),
            name: owner.name.clone(),
            api_group: group.to_string(),
            uid: Some(owner.uid.clone()).filter(|uid| !uid.is_empty()),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.api_group.is_empty() {
            write!(f, "{}/{}", self.kind, self.name)
        } else {
            write!(f, "{}.{}/{}", self.kind, self.api_group, self.name)
        }
    }
}

/// One object read from the cluster
///
/// Immutable once fetched. Cluster-scoped objects have an empty namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveObject {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub uid: Option<String>,
    /// Declared owners, in declaration order
    pub owner_refs: Vec<ObjectRef>,
}

impl LiveObject {
    /// Convert a dynamic object returned by the API server
    ///
    /// List responses may omit `apiVersion`/`kind` on items, so the resource
    /// type the object was fetched with fills them in.
    pub fn from_dynamic(obj: DynamicObject, resource: &ResourceType) -> Self {
        let (api_version, kind) = match obj.types {
            Some(types) if !types.kind.is_empty() => (types.api_version, types.kind),
            _ => (resource.api_version(), resource.kind.clone()),
        };
        let meta = obj.metadata;

        Self {
            api_version,
            kind,
            name: meta.name.unwrap_or_default(),
            namespace: meta.namespace.unwrap_or_default(),
            uid: meta.uid,
            owner_refs: meta
                .owner_references
                .unwrap_or_default()
                .iter()
                .map(ObjectRef::from)
                .collect(),
        }
    }

    /// API group parsed from `apiVersion`
    pub fn group(&self) -> &str {
        split_api_version(&self.api_version).0
    }

    /// Identity of this object within one traversal
    pub fn key(&self) -> ObjectKey {
        ObjectKey {
            group: self.group().to_string(),
            kind: self.kind.clone(),
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }
}

/// `(type, namespace, name)` identity used for cycle detection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    pub group: String,
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.group.is_empty() {
            self.kind.clone()
        } else {
            format!("{}.{}", self.kind, self.group)
        };
        if self.namespace.is_empty() {
            write!(f, "{}/{}", kind, self.name)
        } else {
            write!(f, "{}/{} -n {}", kind, self.name, self.namespace)
        }
    }
}
