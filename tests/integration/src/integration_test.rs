//! End-to-end scenarios against real temporary directories.
//!
//! Everything here goes through `DiskFolder`, exercising the same path the
//! CLI takes: load a project from disk, scan it, fix it, scan it again.

use std::sync::Arc;

use kempt_core::{Glob, LoadOptions, Project, check, fix};
use kempt_fs::{EntryType, Folder};
use kempt_test_utils::TestTree;
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
ignore = ["**/generated"]

[files]
"**/*.rs"  = "snake_case.lc"
"**/*.tsx" = "PascalCase.kebab-case.lc"
"**/*.md"  = "UPPER CASE.lc"

[folders]
"**/*" = "kebab-case"
"#;

async fn load(tree: &TestTree) -> Project {
    Project::load(Arc::new(tree.folder()), LoadOptions::default())
        .await
        .expect("project should load")
}

/// Scan and fix until the tree is clean, tolerating stale paths from
/// folder renames within a batch. Two passes always suffice here.
///
/// Overwriting is allowed for case-only renames, which case-insensitive
/// filesystems report as conflicts with the entry being renamed.
async fn fix_all(project: &Project) {
    for _ in 0..2 {
        let problems = check(project, &Glob::anything()).await.unwrap();
        if problems.is_empty() {
            return;
        }
        for problem in problems {
            let name = kempt_fs::path::file_name(&problem.path);
            let case_only =
                name.to_lowercase() == problem.details.expected_name.to_lowercase();
            let _ = fix(project, &problem, case_only).await;
        }
    }
}

#[tokio::test]
async fn check_fix_recheck_lifecycle() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write("readme.md", "# hi");
    tree.write("src/MainWidget.rs", "");
    tree.write("src/lib.rs", "");
    tree.write("components/[slug].test.tsx", "");
    tree.mkdir("My Assets");

    let project = load(&tree).await;

    let mut problems = check(&project, &Glob::anything()).await.unwrap();
    problems.sort_by(|a, b| a.path.cmp(&b.path));
    let report: Vec<(&str, &str)> = problems
        .iter()
        .map(|p| (p.path.as_str(), p.details.expected_name.as_str()))
        .collect();
    assert_eq!(
        report,
        vec![
            ("My Assets", "my-assets"),
            ("components/[slug].test.tsx", "[Slug].test.tsx"),
            ("readme.md", "README.md"),
            ("src/MainWidget.rs", "main_widget.rs"),
        ]
    );

    fix_all(&project).await;

    assert!(check(&project, &Glob::anything()).await.unwrap().is_empty());
    tree.assert_exists("README.md");
    tree.assert_exists("my-assets");
    tree.assert_exists("src/main_widget.rs");
    tree.assert_exists("src/lib.rs");
    tree.assert_exists("components/[Slug].test.tsx");
    tree.assert_not_exists("src/MainWidget.rs");
}

#[tokio::test]
async fn nested_projects_are_scan_boundaries_on_disk() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write("src/Outer.rs", "");
    tree.write("plugin/.kempt.toml", "[files]\n");
    tree.write("plugin/InnerName.rs", "");

    let project = load(&tree).await;
    fix_all(&project).await;

    // The outer fix run never touches the nested project's entries.
    tree.assert_exists("src/outer.rs");
    tree.assert_exists("plugin/InnerName.rs");
}

#[tokio::test]
async fn settings_and_gitignore_patterns_prune_the_disk_walk() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write(".gitignore", "dist\n");
    tree.write("dist/BadName.rs", "");
    tree.write("src/generated/BadName.rs", "");
    tree.write("src/KeepMe.rs", "");

    let project = load(&tree).await;
    let problems = check(&project, &Glob::anything()).await.unwrap();
    let paths: Vec<&str> = problems.iter().map(|p| p.path.as_str()).collect();

    assert_eq!(paths, vec!["src/KeepMe.rs"]);
}

#[tokio::test]
async fn reload_picks_up_ignore_file_edits_on_disk() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write(".gitignore", "vendor\n");
    tree.write("vendor/OldName.rs", "");

    let project = load(&tree).await;
    assert!(project.ignores("vendor/OldName.rs"));

    tree.write(".gitignore", "");
    project.reload().await.unwrap();
    assert!(!project.ignores("vendor/OldName.rs"));

    // A deleted ignore file degrades to an empty pattern set.
    tree.remove(".gitignore");
    project.reload().await.unwrap();
    assert!(!project.ignores("vendor/OldName.rs"));
}

#[tokio::test]
async fn extra_ignorefiles_use_glob_semantics_by_filename() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write(".npmignore", "**/*.rs\n!**/keep.rs\n");
    tree.write("src/BadName.rs", "");
    tree.write("src/keep.rs", "");

    let options = LoadOptions {
        ignorefiles: vec![".gitignore".to_string(), ".npmignore".to_string()],
    };
    let project = Project::load(Arc::new(tree.folder()), options)
        .await
        .unwrap();

    // Negated patterns veto ignoring under glob semantics, so keep.rs
    // stays visible while every other Rust file is excluded.
    assert!(project.ignores("src/BadName.rs"));
    assert!(!project.ignores("src/keep.rs"));
}

#[tokio::test]
async fn fix_collisions_surface_and_do_not_abort_the_batch() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.write("src/My Widget.rs", "new");
    tree.write("src/my_widget.rs", "old");
    tree.write("src/OtherName.rs", "");

    let project = load(&tree).await;
    let problems = check(&project, &Glob::anything()).await.unwrap();
    assert_eq!(problems.len(), 2);

    let mut failures = 0;
    for problem in &problems {
        if fix(&project, problem, false).await.is_err() {
            failures += 1;
        }
    }

    assert_eq!(failures, 1);
    tree.assert_exists("src/other_name.rs");
    tree.assert_exists("src/My Widget.rs");
    assert_eq!(
        std::fs::read_to_string(tree.root().join("src/my_widget.rs")).unwrap(),
        "old"
    );
}

#[tokio::test]
async fn near_finds_the_project_from_a_subfolder_on_disk() {
    let tree = TestTree::new();
    tree.write(".kempt.toml", CONFIG);
    tree.mkdir("src/deeply/nested");

    let start = Arc::new(tree.folder()).child("src/deeply/nested");
    let project = Project::near(start, Default::default())
        .await
        .unwrap()
        .expect("config four levels up is within the default search depth");

    assert_eq!(project.root(), tree.folder().path());
    assert!(
        project
            .get_convention(EntryType::File, "src/lib.rs")
            .is_some()
    );
}
