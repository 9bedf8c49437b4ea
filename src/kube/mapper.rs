//! REST mapping: short names and owner group/kinds to resource types
//!
//! Discovery runs once when the mapper is created; every lookup after that is
//! answered from the snapshot. Owner types recur a lot (many pods under one
//! ReplicaSet), so a single discovery pass is all the traversal needs.

use kube::Client;
use kube::Discovery;
use kube::core::ApiResource;
use kube::discovery::Scope;

use crate::error::TreeError;
use crate::models::{ResourceType, TypeQuery};

/// Resolves type names and classifies their scope
#[cfg_attr(test, mockall::automock)]
pub trait RestMapper: Send + Sync {
    /// Resolve a user-typed name or an owner's group/kind to a resource type
    fn resource_for(&self, query: &TypeQuery) -> Result<ResourceType, TreeError>;

    /// Whether instances of `group`/`kind` live inside a namespace
    fn is_namespaced(&self, group: &str, kind: &str) -> Result<bool, TreeError>;
}

/// Standard kubectl short names
///
/// Discovery does not expose short names through `ApiResource`, so the
/// built-in ones are mapped to their plural here.
const SHORT_NAMES: &[(&str, &str)] = &[
    ("cm", "configmaps"),
    ("crd", "customresourcedefinitions"),
    ("cj", "cronjobs"),
    ("csr", "certificatesigningrequests"),
    ("deploy", "deployments"),
    ("ds", "daemonsets"),
    ("ep", "endpoints"),
    ("ev", "events"),
    ("hpa", "horizontalpodautoscalers"),
    ("ing", "ingresses"),
    ("limits", "limitranges"),
    ("netpol", "networkpolicies"),
    ("no", "nodes"),
    ("ns", "namespaces"),
    ("pc", "priorityclasses"),
    ("pdb", "poddisruptionbudgets"),
    ("po", "pods"),
    ("pv", "persistentvolumes"),
    ("pvc", "persistentvolumeclaims"),
    ("quota", "resourcequotas"),
    ("rc", "replicationcontrollers"),
    ("rs", "replicasets"),
    ("sa", "serviceaccounts"),
    ("sc", "storageclasses"),
    ("sts", "statefulsets"),
    ("svc", "services"),
];

#[derive(Debug, Clone)]
struct MappedResource {
    resource: ResourceType,
    namespaced: bool,
}

impl MappedResource {
    fn matches_name(&self, name: &str) -> bool {
        self.resource.resource == name || self.resource.kind.eq_ignore_ascii_case(name)
    }

    fn matches_group_kind(&self, group: &str, kind: &str) -> bool {
        self.resource.group == group && self.resource.kind.eq_ignore_ascii_case(kind)
    }
}

/// `RestMapper` backed by a discovery snapshot of the cluster
#[derive(Debug, Clone, Default)]
pub struct DiscoveryMapper {
    // Core group first, then by group name, so ambiguous names such as
    // `events` resolve the way kubectl resolves them.
    entries: Vec<MappedResource>,
}

impl DiscoveryMapper {
    /// Run API discovery against the cluster and index the preferred version
    /// of every resource
    pub async fn discover(client: &Client) -> Result<Self, TreeError> {
        tracing::debug!("Running API discovery");
        let discovery = Discovery::new(client.clone()).run().await.map_err(|e| {
            TreeError::TransientFailure {
                operation: "discover".to_string(),
                resource: "api resources".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut resources = Vec::new();
        for group in discovery.groups() {
            for (ar, caps) in group.recommended_resources() {
                let namespaced = matches!(caps.scope, Scope::Namespaced);
                resources.push((ar, namespaced));
            }
        }

        let mapper = Self::from_resources(resources);
        tracing::debug!("Discovered {} resource types", mapper.len());
        Ok(mapper)
    }

    /// Build a mapper from already-known resources and their scope
    pub fn from_resources(resources: impl IntoIterator<Item = (ApiResource, bool)>) -> Self {
        let mut entries: Vec<MappedResource> = resources
            .into_iter()
            .map(|(ar, namespaced)| MappedResource {
                resource: ResourceType::from(&ar),
                namespaced,
            })
            .collect();
        entries.sort_by(|a, b| {
            let a_key = (!a.resource.group.is_empty(), &a.resource.group);
            let b_key = (!b.resource.group.is_empty(), &b.resource.group);
            a_key.cmp(&b_key)
        });
        Self { entries }
    }

    /// Number of indexed resource types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup_name(&self, name: &str) -> Option<&MappedResource> {
        let name = name.to_ascii_lowercase();
        let name = SHORT_NAMES
            .iter()
            .find(|(short, _)| *short == name)
            .map(|(_, plural)| plural.to_string())
            .unwrap_or(name);

        if let Some(found) = self.entries.iter().find(|e| e.matches_name(&name)) {
            return Some(found);
        }

        // `deployments.apps` style: everything after the first dot is the group
        let (resource, group) = name.split_once('.')?;
        self.entries
            .iter()
            .find(|e| e.resource.group == group && e.matches_name(resource))
    }

    fn lookup_group_kind(&self, group: &str, kind: &str) -> Option<&MappedResource> {
        self.entries
            .iter()
            .find(|e| e.matches_group_kind(group, kind))
    }

    fn lookup(&self, query: &TypeQuery) -> Result<&MappedResource, TreeError> {
        let found = match query {
            TypeQuery::Name(name) => self.lookup_name(name),
            TypeQuery::GroupKind { group, kind } => self.lookup_group_kind(group, kind),
        };
        found.ok_or_else(|| TreeError::UnresolvableType {
            query: query.to_string(),
        })
    }
}

impl RestMapper for DiscoveryMapper {
    fn resource_for(&self, query: &TypeQuery) -> Result<ResourceType, TreeError> {
        let entry = self.lookup(query)?;
        tracing::trace!("Resolved {} to {}", query, entry.resource);
        Ok(entry.resource.clone())
    }

    fn is_namespaced(&self, group: &str, kind: &str) -> Result<bool, TreeError> {
        self.lookup(&TypeQuery::group_kind(group, kind))
            .map(|entry| entry.namespaced)
    }
}
