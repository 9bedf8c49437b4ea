//! Resource type identifiers
//!
//! A `ResourceType` is what the REST mapper hands back once a short name or an
//! owner's group/kind has been resolved. It is the only thing the object store
//! accepts for addressing a category of objects.

use std::fmt;

use kube::core::ApiResource;

/// Fully-qualified group/version/resource identifier
///
/// `kind` is carried alongside so objects returned without type metadata
/// (list items) can still report their kind and apiVersion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceType {
    pub group: String,
    pub version: String,
    /// Plural resource name, as used in the REST path (e.g. `replicasets`)
    pub resource: String,
    pub kind: String,
}

impl ResourceType {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
            kind: kind.into(),
        }
    }

    /// The `apiVersion` string objects of this type carry (`apps/v1`, `v1`)
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Build the kube `ApiResource` used to address this type dynamically
    pub fn to_api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: self.api_version(),
            kind: self.kind.clone(),
            plural: self.resource.clone(),
        }
    }
}

impl From<&ApiResource> for ResourceType {
    fn from(ar: &ApiResource) -> Self {
        Self::new(&ar.group, &ar.version, &ar.plural, &ar.kind)
    }
}

impl fmt::Display for ResourceType {
    /// Formats like kubectl does: `replicasets.apps`, or `pods` for the core group
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Input to the type resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeQuery {
    /// A name typed by a user: plural, singular, kind or short alias,
    /// optionally qualified with a group (`deployments.apps`)
    Name(String),
    /// An owner reference's API group and kind
    GroupKind { group: String, kind: String },
}

impl TypeQuery {
    pub fn name(name: impl Into<String>) -> Self {
        TypeQuery::Name(name.into())
    }

    pub fn group_kind(group: impl Into<String>, kind: impl Into<String>) -> Self {
        TypeQuery::GroupKind {
            group: group.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for TypeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeQuery::Name(name) => write!(f, "{}", name),
            TypeQuery::GroupKind { group, kind } if group.is_empty() => write!(f, "{}", kind),
            TypeQuery::GroupKind { group, kind } => write!(f, "{}.{}", kind, group),
        }
    }
}

/// Split an `apiVersion` string into group and version
///
/// The core group has no prefix: `v1` splits into `("", "v1")`.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_core_group() {
        let pods = ResourceType::new("", "v1", "pods", "Pod");
        assert_eq!(pods.api_version(), "v1");
        assert_eq!(pods.to_string(), "pods");
    }

    #[test]
    fn test_api_version_named_group() {
        let rs = ResourceType::new("apps", "v1", "replicasets", "ReplicaSet");
        assert_eq!(rs.api_version(), "apps/v1");
        assert_eq!(rs.to_string(), "replicasets.apps");

        let ar = rs.to_api_resource();
        assert_eq!(ar.api_version, "apps/v1");
        assert_eq!(ar.plural, "replicasets");
        assert_eq!(ResourceType::from(&ar), rs);
    }

    #[test]
    fn test_split_api_version() {
        assert_eq!(split_api_version("v1"), ("", "v1"));
        assert_eq!(split_api_version("apps/v1"), ("apps", "v1"));
        assert_eq!(
            split_api_version("cert-manager.io/v1"),
            ("cert-manager.io", "v1")
        );
    }

    #[test]
    fn test_type_query_display() {
        assert_eq!(TypeQuery::name("deploy").to_string(), "deploy");
        assert_eq!(
            TypeQuery::group_kind("apps", "ReplicaSet").to_string(),
            "ReplicaSet.apps"
        );
        assert_eq!(TypeQuery::group_kind("", "Node").to_string(), "Node");
    }
}
