//! The tree command

use std::process::ExitCode;

use anyhow::{Context, Result};

use super::args::TreeArgs;
use crate::config::{Config, ConfigLoader};
use crate::kube::{self, CachingStore, ConnectOptions, DiscoveryMapper, DynamicStore, ObjectStore};
use crate::select::{NamespaceScope, Target, parse_targets, select_objects};
use crate::tree::{TreeBuilder, print_trees};

/// Print the owner tree of every selected object
///
/// Exits with failure if any starting object's tree could not be built; the
/// trees that were built are still printed.
pub async fn run(args: TreeArgs) -> Result<ExitCode> {
    let config = args.apply_to(ConfigLoader::load().context("Failed to load configuration")?);
    ConfigLoader::check(&config)?;
    let targets = parse_targets(&args.targets)?;

    let connection = kube::connect(&ConnectOptions {
        kubeconfig: args.kubeconfig.clone(),
        context: args.context.clone(),
    })
    .await?;
    let scope = NamespaceScope {
        namespace: args
            .namespace
            .clone()
            .unwrap_or(connection.default_namespace),
        all_namespaces: args.all_namespaces,
    };

    let mapper = DiscoveryMapper::discover(&connection.client)
        .await
        .context("Failed to discover API resources")?;
    if mapper.is_empty() {
        anyhow::bail!("API discovery returned no resource types");
    }
    let store = DynamicStore::new(connection.client);

    if config.cache_owners {
        let store = CachingStore::new(store);
        let code = run_with(&mapper, &store, &targets, &scope, &config).await;
        tracing::debug!("Owner cache held {} objects", store.len().await);
        code
    } else {
        run_with(&mapper, &store, &targets, &scope, &config).await
    }
}

async fn run_with<S: ObjectStore>(
    mapper: &DiscoveryMapper,
    store: &S,
    targets: &[Target],
    scope: &NamespaceScope,
    config: &Config,
) -> Result<ExitCode> {
    let roots = select_objects(mapper, store, targets, scope).await?;
    if roots.is_empty() {
        if scope.all_namespaces {
            eprintln!("No resources found");
        } else {
            eprintln!("No resources found in {} namespace.", scope.namespace);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let builder = TreeBuilder::new(mapper, store, config.tree_options());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let failures = print_trees(&builder, roots, &config.render_options(), &mut out)
        .await
        .context("Failed to write output")?;

    for failure in &failures {
        eprintln!("error: {}", failure);
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
