//! Selecting starting objects from command-line targets
//!
//! Run with: cargo test --test selection_tests

mod common;

use common::*;
use kubectl_tree::select::{NamespaceScope, SelectionError, parse_targets, select_objects};
use kubectl_tree::{RenderOptions, TreeBuilder, TreeError, TreeOptions, print_trees};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn scope(namespace: &str) -> NamespaceScope {
    NamespaceScope {
        namespace: namespace.to_string(),
        all_namespaces: false,
    }
}

fn cluster() -> FakeCluster {
    FakeCluster::new()
        .with(&pods(), object(&pods(), "web-1", "default"))
        .with(&pods(), object(&pods(), "web-2", "default"))
        .with(&pods(), object(&pods(), "coredns", "kube-system"))
        .with(&replicasets(), object(&replicasets(), "web", "default"))
        .with(&nodes(), object(&nodes(), "worker-1", ""))
}

fn names(objects: &[kubectl_tree::LiveObject]) -> Vec<String> {
    objects
        .iter()
        .map(|o| format!("{}/{}", o.kind, o.name))
        .collect()
}

#[tokio::test]
async fn test_slash_form_fetches_each_object() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["po/web-1", "rs/web"])).unwrap();

    let selected = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    assert_eq!(names(&selected), vec!["Pod/web-1", "ReplicaSet/web"]);
}

#[tokio::test]
async fn test_type_then_names_fetches_from_namespace() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["pods", "web-2", "web-1"])).unwrap();

    let selected = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    assert_eq!(names(&selected), vec!["Pod/web-2", "Pod/web-1"]);
    assert_eq!(
        cluster.gets(),
        vec!["pods default/web-2", "pods default/web-1"]
    );
}

#[tokio::test]
async fn test_type_only_lists_current_namespace() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["pods"])).unwrap();

    let selected = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    assert_eq!(names(&selected), vec!["Pod/web-1", "Pod/web-2"]);
}

#[tokio::test]
async fn test_all_namespaces_widens_listing() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["pods"])).unwrap();
    let scope = NamespaceScope {
        namespace: "default".to_string(),
        all_namespaces: true,
    };

    let selected = select_objects(&mapper, &cluster, &targets, &scope)
        .await
        .unwrap();

    let namespaces: Vec<&str> = selected.iter().map(|o| o.namespace.as_str()).collect();
    assert_eq!(namespaces, vec!["default", "default", "kube-system"]);
}

#[tokio::test]
async fn test_all_namespaces_does_not_affect_named_objects() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["pod/coredns"])).unwrap();
    let scope = NamespaceScope {
        namespace: "default".to_string(),
        all_namespaces: true,
    };

    let err = select_objects(&mapper, &cluster, &targets, &scope)
        .await
        .unwrap_err();

    assert!(matches!(err, SelectionError::Tree(ref e) if e.is_not_found()), "{:?}", err);
}

#[tokio::test]
async fn test_cluster_scoped_target_ignores_namespace() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["no/worker-1"])).unwrap();

    let selected = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    assert_eq!(names(&selected), vec!["Node/worker-1"]);
    assert_eq!(cluster.gets(), vec!["nodes /worker-1"]);
}

#[tokio::test]
async fn test_unknown_type_is_reported() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["gizmos/one"])).unwrap();

    let err = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SelectionError::Tree(TreeError::UnresolvableType {
            query: "gizmos".to_string()
        })
    );
}

#[tokio::test]
async fn test_empty_listing_selects_nothing() {
    let mapper = mapper();
    let cluster = cluster();
    let targets = parse_targets(&args(&["deploy"])).unwrap();

    let selected = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    assert!(selected.is_empty());
}

#[tokio::test]
async fn test_selected_objects_print_in_selection_order() {
    let mapper = mapper();
    let cluster = cluster().with(
        &pods(),
        owned_by(
            object(&pods(), "web-3", "default"),
            vec![owner_ref(&replicasets(), "web")],
        ),
    );
    let targets = parse_targets(&args(&["pods", "web-3", "web-1"])).unwrap();
    let roots = select_objects(&mapper, &cluster, &targets, &scope("default"))
        .await
        .unwrap();

    let builder = TreeBuilder::new(&mapper, &cluster, TreeOptions::default());
    let mut out = Vec::new();
    let failures = print_trees(&builder, roots, &RenderOptions::default(), &mut out)
        .await
        .unwrap();

    assert!(failures.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Pod web-3 -n default\n    ReplicaSet web -n default\nPod web-1 -n default\n"
    );
}
