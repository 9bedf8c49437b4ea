//! Object store: point reads and the one-shot listing used for selection

use async_trait::async_trait;
use kube::Api;
use kube::api::ListParams;
use kube::core::DynamicObject;

use crate::error::TreeError;
use crate::models::{LiveObject, ResourceType};

/// Read-only access to cluster objects
///
/// An empty `namespace` addresses cluster-scoped objects, or for `list`,
/// every namespace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch exactly one object
    async fn get(
        &self,
        resource: &ResourceType,
        namespace: &str,
        name: &str,
    ) -> Result<LiveObject, TreeError>;

    /// List every object of a type, used only to seed the traversal
    async fn list(
        &self,
        resource: &ResourceType,
        namespace: &str,
    ) -> Result<Vec<LiveObject>, TreeError>;
}

/// `ObjectStore` over the kube dynamic API
#[derive(Clone)]
pub struct DynamicStore {
    client: kube::Client,
}

impl DynamicStore {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    fn api(&self, resource: &ResourceType, namespace: &str) -> Api<DynamicObject> {
        let api_resource = resource.to_api_resource();
        if namespace.is_empty() {
            Api::all_with(self.client.clone(), &api_resource)
        } else {
            Api::namespaced_with(self.client.clone(), namespace, &api_resource)
        }
    }
}

#[async_trait]
impl ObjectStore for DynamicStore {
    async fn get(
        &self,
        resource: &ResourceType,
        namespace: &str,
        name: &str,
    ) -> Result<LiveObject, TreeError> {
        tracing::debug!("GET {} {}/{}", resource, namespace, name);
        let obj = self
            .api(resource, namespace)
            .get(name)
            .await
            .map_err(|e| classify_error(e, "fetch", resource, namespace, name))?;
        Ok(LiveObject::from_dynamic(obj, resource))
    }

    async fn list(
        &self,
        resource: &ResourceType,
        namespace: &str,
    ) -> Result<Vec<LiveObject>, TreeError> {
        tracing::debug!("LIST {} in {:?}", resource, namespace);
        let list = self
            .api(resource, namespace)
            .list(&ListParams::default())
            .await
            .map_err(|e| classify_error(e, "list", resource, namespace, ""))?;
        Ok(list
            .items
            .into_iter()
            .map(|obj| LiveObject::from_dynamic(obj, resource))
            .collect())
    }
}

/// Map a kube error to the tree error taxonomy
fn classify_error(
    err: kube::Error,
    operation: &str,
    resource: &ResourceType,
    namespace: &str,
    name: &str,
) -> TreeError {
    match err {
        kube::Error::Api(ref response) => classify_status(
            response.code,
            &response.message,
            operation,
            resource,
            namespace,
            name,
        ),
        other => TreeError::TransientFailure {
            operation: operation.to_string(),
            resource: resource.to_string(),
            message: other.to_string(),
        },
    }
}

/// Map an API status code to the tree error taxonomy
fn classify_status(
    code: u16,
    message: &str,
    operation: &str,
    resource: &ResourceType,
    namespace: &str,
    name: &str,
) -> TreeError {
    match code {
        404 => TreeError::NotFound {
            resource: resource.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        401 | 403 => TreeError::Unauthorized {
            resource: resource.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            message: message.to_string(),
        },
        _ => TreeError::TransientFailure {
            operation: operation.to_string(),
            resource: resource.to_string(),
            message: format!("{} ({})", message, code),
        },
    }
}
