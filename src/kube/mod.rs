//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides the REST
//! mapper and object store the tree builder works against.

mod cache;
mod mapper;
mod store;

pub use cache::CachingStore;
pub use mapper::{DiscoveryMapper, RestMapper};
pub use store::{DynamicStore, ObjectStore};

#[cfg(test)]
pub use mapper::MockRestMapper;
#[cfg(test)]
pub use store::MockObjectStore;

use std::path::PathBuf;

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Where to find cluster credentials
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Explicit kubeconfig file instead of the default lookup
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of `current-context`
    pub context: Option<String>,
}

/// A connected client plus the namespace of the selected context
pub struct Connection {
    pub client: Client,
    pub default_namespace: String,
}

/// Initialize a Kubernetes client
///
/// Without options this uses the default loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn connect(options: &ConnectOptions) -> Result<Connection> {
    let kube_options = KubeConfigOptions {
        context: options.context.clone(),
        ..Default::default()
    };

    let config = match (&options.kubeconfig, &options.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &kube_options)
                .await
                .context("Failed to load kubeconfig")?
        }
        (None, Some(context)) => Config::from_kubeconfig(&kube_options)
            .await
            .with_context(|| format!("Failed to load context {}", context))?,
        (None, None) => Config::infer()
            .await
            .context("Failed to infer cluster configuration")?,
    };

    tracing::debug!(
        "Connecting to {} (default namespace {})",
        config.cluster_url,
        config.default_namespace
    );

    let default_namespace = config.default_namespace.clone();
    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(Connection {
        client,
        default_namespace,
    })
}
