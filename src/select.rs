//! Starting-object selection
//!
//! Turns command-line targets into the objects the traversal starts from.
//! Accepted forms mirror kubectl:
//! - `TYPE/NAME [TYPE/NAME ...]`
//! - `TYPE[,TYPE...] NAME [NAME ...]`
//! - `TYPE[,TYPE...]` for every object of those types

use thiserror::Error;

use crate::error::TreeError;
use crate::kube::{ObjectStore, RestMapper};
use crate::models::{LiveObject, TypeQuery};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("you must specify the type of resource to get")]
    NoArguments,

    #[error("there is no need to specify a resource type as a separate argument when passing arguments in resource/name form (e.g. 'kubectl tree resource/<resource_name>' instead of 'kubectl tree resource resource/<resource_name>'): {arg}")]
    MixedForms { arg: String },

    #[error("arguments in resource/name form must have a single resource and name: {arg}")]
    InvalidTarget { arg: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// A parsed command-line target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One object by type and name
    Named { type_name: String, name: String },
    /// Every object of a type
    All { type_name: String },
}

/// Namespace handling for the selection step only
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceScope {
    pub namespace: String,
    pub all_namespaces: bool,
}

/// Parse resource-type-or-name arguments
pub fn parse_targets(args: &[String]) -> Result<Vec<Target>, SelectionError> {
    if args.is_empty() {
        return Err(SelectionError::NoArguments);
    }

    if args.iter().any(|arg| arg.contains('/')) {
        return args.iter().map(|arg| parse_slash_target(arg)).collect();
    }

    let types = split_types(&args[0])?;
    let names = &args[1..];
    if names.is_empty() {
        return Ok(types
            .into_iter()
            .map(|type_name| Target::All { type_name })
            .collect());
    }

    let mut targets = Vec::with_capacity(types.len() * names.len());
    for type_name in &types {
        for name in names {
            targets.push(Target::Named {
                type_name: type_name.clone(),
                name: name.clone(),
            });
        }
    }
    Ok(targets)
}

fn parse_slash_target(arg: &str) -> Result<Target, SelectionError> {
    let Some((type_name, name)) = arg.split_once('/') else {
        return Err(SelectionError::MixedForms {
            arg: arg.to_string(),
        });
    };
    if type_name.is_empty() || name.is_empty() || name.contains('/') || type_name.contains(',') {
        return Err(SelectionError::InvalidTarget {
            arg: arg.to_string(),
        });
    }
    Ok(Target::Named {
        type_name: type_name.to_string(),
        name: name.to_string(),
    })
}

fn split_types(arg: &str) -> Result<Vec<String>, SelectionError> {
    let types: Vec<String> = arg.split(',').map(|t| t.trim().to_string()).collect();
    if types.iter().any(|t| t.is_empty()) {
        return Err(SelectionError::InvalidTarget {
            arg: arg.to_string(),
        });
    }
    Ok(types)
}

/// Fetch or list the objects the targets name
///
/// Cluster-scoped types ignore the namespace. `all_namespaces` only widens
/// listing; named objects are still read from `namespace`.
pub async fn select_objects<M, S>(
    mapper: &M,
    store: &S,
    targets: &[Target],
    scope: &NamespaceScope,
) -> Result<Vec<LiveObject>, SelectionError>
where
    M: RestMapper + ?Sized,
    S: ObjectStore + ?Sized,
{
    let mut objects = Vec::new();

    for target in targets {
        let type_name = match target {
            Target::Named { type_name, .. } | Target::All { type_name } => type_name,
        };
        let resource = mapper.resource_for(&TypeQuery::name(type_name))?;
        let namespaced = mapper.is_namespaced(&resource.group, &resource.kind)?;

        match target {
            Target::Named { name, .. } => {
                let namespace = if namespaced { scope.namespace.as_str() } else { "" };
                objects.push(store.get(&resource, namespace, name).await?);
            }
            Target::All { .. } => {
                let namespace = if namespaced && !scope.all_namespaces {
                    scope.namespace.as_str()
                } else {
                    ""
                };
                let listed = store.list(&resource, namespace).await?;
                tracing::debug!("Selected {} {}", listed.len(), resource);
                objects.extend(listed);
            }
        }
    }

    Ok(objects)
}
