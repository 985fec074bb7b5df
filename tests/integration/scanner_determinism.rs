//! Scanner ordering and relative-key stability

use std::fs;
use tempfile::TempDir;
use vigil::scan::{Walker, WalkerConfig};
use vigil::snapshot::SnapshotBuilder;

/// Two walks of the same tree yield the same entries in the same order.
#[test]
fn test_walk_order_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir_all(root.join("b_dir")).unwrap();
    fs::create_dir_all(root.join("a_dir")).unwrap();
    fs::write(root.join("z.txt"), "z").unwrap();
    fs::write(root.join("b_dir").join("inner.txt"), "b").unwrap();
    fs::write(root.join("a_dir").join("inner.txt"), "a").unwrap();

    let walker = Walker::new(root);
    let keys1: Vec<_> = walker.walk().unwrap().into_iter().map(|e| e.rel_path).collect();
    let keys2: Vec<_> = walker.walk().unwrap().into_iter().map(|e| e.rel_path).collect();

    assert_eq!(keys1, keys2);
    assert_eq!(keys1, vec!["a_dir/inner.txt", "b_dir/inner.txt", "z.txt"]);
}

/// Snapshot keys are root-relative: the same tree content produces the same
/// mapping no matter where on disk the root lives.
#[test]
fn test_snapshot_portable_across_root_locations() {
    let make_tree = |root: &std::path::Path| {
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("top.txt"), "same bytes").unwrap();
        fs::write(root.join("sub").join("leaf.txt"), "more bytes").unwrap();
    };

    let temp1 = TempDir::new().unwrap();
    let temp2 = TempDir::new().unwrap();
    make_tree(temp1.path());
    make_tree(temp2.path());

    let snap1 = SnapshotBuilder::new(temp1.path().to_path_buf()).build().unwrap();
    let snap2 = SnapshotBuilder::new(temp2.path().to_path_buf()).build().unwrap();

    assert_eq!(snap1, snap2);
}

/// The ignore list prunes whole subtrees without affecting sibling entries.
#[test]
fn test_ignored_subtree_pruned() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir_all(root.join("cache")).unwrap();
    fs::write(root.join("cache").join("blob"), "scratch").unwrap();
    fs::write(root.join("data.txt"), "real").unwrap();

    let config = WalkerConfig {
        ignore_names: vec!["cache".to_string()],
        ..WalkerConfig::default()
    };
    let entries = Walker::with_config(root, config).walk().unwrap();

    let keys: Vec<_> = entries.iter().map(|e| e.rel_path.as_str()).collect();
    assert_eq!(keys, vec!["data.txt"]);
}

/// Symlinks are not followed by default, so a link cannot smuggle content
/// from outside the root into the snapshot.
#[cfg(unix)]
#[test]
fn test_symlinks_not_followed_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    let outside = temp_dir.path().join("outside");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&outside).unwrap();
    fs::write(outside.join("secret.txt"), "outside content").unwrap();
    fs::write(root.join("real.txt"), "inside content").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

    let entries = Walker::new(root).walk().unwrap();
    let keys: Vec<_> = entries.iter().map(|e| e.rel_path.as_str()).collect();
    assert_eq!(keys, vec!["real.txt"]);
}
