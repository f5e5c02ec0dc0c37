//! Project discovery and registry resolution over real directory trees.

use std::sync::Arc;

use kempt_core::{Glob, Project, ProjectRegistry, check};
use kempt_fs::{Folder, path};
use kempt_test_utils::TestTree;
use pretty_assertions::assert_eq;

const CONFIG: &str = "[files]\n\"**/*.rs\" = \"snake_case.lc\"\n";

fn seed_workspace() -> TestTree {
    let tree = TestTree::new();
    tree.write("app/.kempt.toml", CONFIG);
    tree.write("app/plugin/.kempt.toml", CONFIG);
    tree.write("lib/.kempt.toml", CONFIG);
    tree.write("node_modules/dep/.kempt.toml", CONFIG);
    tree.write("target/debug/.kempt.toml", CONFIG);
    tree.write(".cache/tool/.kempt.toml", CONFIG);
    tree
}

async fn discover(tree: &TestTree) -> ProjectRegistry {
    ProjectRegistry::discover(Arc::new(tree.folder()), 8)
        .await
        .expect("discovery should succeed")
}

#[tokio::test]
async fn discover_walks_the_disk_and_skips_cache_folders() {
    let tree = seed_workspace();
    let registry = discover(&tree).await;

    let root = tree.folder().path().to_string();
    let mut roots: Vec<String> = registry
        .iter()
        .map(|p| path::relative_to(p.root(), &root).unwrap().to_string())
        .collect();
    roots.sort_unstable();

    assert_eq!(roots, vec!["app", "app/plugin", "lib"]);
}

#[tokio::test]
async fn best_match_resolves_to_the_deepest_root() {
    let tree = seed_workspace();
    let registry = discover(&tree).await;
    let root = tree.folder().path().to_string();

    let inner = path::join(&root, "app/plugin/src/widget.rs");
    let owner = registry.best_match(&inner).unwrap();
    assert_eq!(owner.root(), path::join(&root, "app/plugin"));

    let outer = path::join(&root, "app/src/main.rs");
    let owner = registry.best_match(&outer).unwrap();
    assert_eq!(owner.root(), path::join(&root, "app"));

    assert!(registry.best_match(&path::join(&root, "docs/notes.md")).is_none());
}

#[tokio::test]
async fn discovered_projects_scan_their_own_subtrees() {
    let tree = seed_workspace();
    tree.write("app/src/BadName.rs", "");
    tree.write("app/plugin/AlsoBad.rs", "");

    let registry = discover(&tree).await;
    let root = tree.folder().path().to_string();

    let app = registry.find(&path::join(&root, "app")).unwrap();
    let problems = check(app, &Glob::anything()).await.unwrap();
    let paths: Vec<&str> = problems.iter().map(|p| p.path.as_str()).collect();

    // The nested plugin project's problem belongs to the plugin, not app.
    assert_eq!(paths, vec!["src/BadName.rs"]);

    let plugin = registry.find(&path::join(&root, "app/plugin")).unwrap();
    let problems = check(plugin, &Glob::anything()).await.unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].path, "AlsoBad.rs");
}

#[tokio::test]
async fn combine_merges_registries_across_trees() {
    let left_tree = seed_workspace();
    let right_tree = TestTree::new();
    right_tree.write("tool/.kempt.toml", CONFIG);

    let mut combined = discover(&left_tree).await;
    combined.combine(discover(&right_tree).await);

    assert_eq!(combined.len(), 4);
    let tool_root = path::join(&right_tree.folder().path().to_string(), "tool");
    assert!(combined.find(&tool_root).is_some());
}

#[tokio::test]
async fn removed_projects_stop_matching() {
    let tree = seed_workspace();
    let mut registry = discover(&tree).await;
    let root = tree.folder().path().to_string();

    registry.remove(&path::join(&root, "app/plugin"));

    let inner = path::join(&root, "app/plugin/src/widget.rs");
    let owner = registry.best_match(&inner).unwrap();
    assert_eq!(owner.root(), path::join(&root, "app"));
}

#[tokio::test]
async fn registries_load_projects_that_scan_like_directly_loaded_ones() {
    let tree = seed_workspace();
    tree.write("lib/src/find_me.rs", "");

    let registry = discover(&tree).await;
    let root = tree.folder().path().to_string();
    let lib = registry.find(&path::join(&root, "lib")).unwrap();

    let direct = Project::load(
        Arc::new(tree.folder()).child("lib"),
        Default::default(),
    )
    .await
    .unwrap();

    let via_registry = lib.list(&Glob::anything(), None).await.unwrap();
    let directly = direct.list(&Glob::anything(), None).await.unwrap();
    assert_eq!(via_registry, directly);
}
