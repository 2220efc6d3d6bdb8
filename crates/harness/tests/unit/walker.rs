//! # Traversal Tests
//!
//! Verifies the depth-bounded walk: pre-order visitation root included,
//! depth capping, and classification of non-regular entries.

use std::fs;
use std::path::PathBuf;

use rvregress_core::common::HarnessError;
use rvregress_core::run::Walker;

use crate::common::harness::TestContext;

/// Collects every regular file the walker hands out.
fn visit_all(walker: Walker, root: &std::path::Path) -> Vec<PathBuf> {
    let mut seen = Vec::new();
    walker
        .walk(root, |path| {
            seen.push(path.to_path_buf());
            Ok(())
        })
        .unwrap();
    seen
}

/// Files at any depth within the budget are visited.
#[test]
fn visits_nested_files() {
    let ctx = TestContext::new();
    let a = ctx.add_corpus_file("top");
    let b = ctx.add_corpus_file("isa/rv32ui-p-add");
    let c = ctx.add_corpus_file("isa/deep/nested/rv32mi-p-csr");

    let seen = visit_all(Walker::new(20), ctx.corpus.path());
    assert_eq!(seen.len(), 3);
    for path in [a, b, c] {
        assert!(seen.contains(&path));
    }
}

/// Entries below the depth cap are never visited.
#[test]
fn depth_cap_bounds_the_walk() {
    let ctx = TestContext::new();
    let shallow = ctx.add_corpus_file("d1/shallow");
    let deep = ctx.add_corpus_file("d1/d2/d3/deep");

    let seen = visit_all(Walker::new(2), ctx.corpus.path());
    assert!(seen.contains(&shallow));
    assert!(!seen.contains(&deep));
}

/// The policy cap of 20 levels stops a pathologically deep tree.
#[test]
fn policy_cap_stops_pathological_depth() {
    let ctx = TestContext::new();
    let chain: Vec<String> = (1..=21).map(|i| format!("d{i}")).collect();
    let rel = format!("{}/too-deep", chain.join("/"));
    let too_deep = ctx.add_corpus_file(&rel);
    let within = ctx.add_corpus_file("d1/d2/within");

    let seen = visit_all(Walker::new(20), ctx.corpus.path());
    assert!(seen.contains(&within));
    assert!(!seen.contains(&too_deep));
}

/// The root itself is visited: a root that is a regular file is handed out.
#[test]
fn root_file_is_visited() {
    let ctx = TestContext::new();
    let file = ctx.add_corpus_file("solo");

    let seen = visit_all(Walker::new(20), &file);
    assert_eq!(seen, vec![file]);
}

/// Symlinks are not followed and do not count as regular files, so a
/// symlinked directory cannot form a traversal loop.
#[test]
fn symlinks_classify_as_other() {
    let ctx = TestContext::new();
    let real = ctx.add_corpus_file("real/rv32ui-p-add");
    fs::create_dir_all(ctx.corpus.path().join("real")).unwrap();
    std::os::unix::fs::symlink(ctx.corpus.path().join("real"), ctx.corpus.path().join("loop"))
        .unwrap();
    std::os::unix::fs::symlink(&real, ctx.corpus.path().join("alias")).unwrap();

    let seen = visit_all(Walker::new(20), ctx.corpus.path());
    // Only the real file, once: neither symlink is followed or handed out.
    assert_eq!(seen, vec![real]);
}

/// An unreadable root surfaces as a traversal error.
#[test]
fn missing_root_is_walk_error() {
    let ctx = TestContext::new();
    let missing = ctx.corpus.path().join("does-not-exist");

    let err = Walker::new(20)
        .walk(&missing, |_| Ok(()))
        .unwrap_err();
    assert!(matches!(err, HarnessError::Walk(_)));
}
