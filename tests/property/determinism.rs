//! Property-based tests for digest and comparator guarantees

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use vigil::compare::{compare, ChangeRecord};
use vigil::scan::{digest_bytes, digest_file};
use vigil::snapshot::Snapshot;

/// Digest computation is deterministic in content alone.
#[test]
fn test_digest_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(any::<Vec<u8>>(), any::<Vec<u8>>()),
            |(content1, content2)| {
                let hash1 = digest_bytes(&content1);
                let hash2 = digest_bytes(&content2);

                if content1 == content2 {
                    assert_eq!(hash1, hash2);
                }

                if content1 != content2 {
                    // Collisions are theoretically possible but never expected
                    prop_assume!(hash1 != hash2);
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Streaming a file through the chunked reader matches hashing the same
/// bytes in one shot, regardless of how the content aligns with chunks.
#[test]
fn test_streamed_digest_matches_whole_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("payload.bin");

    runner
        .run(&proptest::collection::vec(any::<u8>(), 0..40_000), |content| {
            fs::write(&path, &content).unwrap();
            assert_eq!(digest_file(&path).unwrap(), digest_bytes(&content));
            Ok(())
        })
        .unwrap();
}

fn to_snapshot(map: &BTreeMap<String, String>) -> Snapshot {
    map.iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    let digest_str = proptest::string::string_regex("[0-9a-f]{8}").unwrap();
    let path_str = proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,2}").unwrap();
    proptest::collection::btree_map(path_str, digest_str, 0..12)
}

/// Every fresh path yields exactly one record with the right classification,
/// and baseline-only paths never appear.
#[test]
fn test_comparator_classification_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(map_strategy(), map_strategy()),
            |(baseline_map, fresh_map)| {
                let baseline = to_snapshot(&baseline_map);
                let fresh = to_snapshot(&fresh_map);

                let records = compare(&baseline, &fresh);

                // One record per fresh path, in sorted order
                let record_paths: Vec<_> =
                    records.iter().map(|r| r.path().to_string()).collect();
                let fresh_paths: Vec<_> = fresh_map.keys().cloned().collect();
                assert_eq!(record_paths, fresh_paths);

                for record in &records {
                    let path = record.path();
                    let fresh_digest = &fresh_map[path];
                    match (baseline_map.get(path), record) {
                        (None, ChangeRecord::New(_)) => {}
                        (Some(old), ChangeRecord::Modified(_)) => {
                            assert_ne!(old, fresh_digest)
                        }
                        (Some(old), ChangeRecord::Unchanged(_)) => {
                            assert_eq!(old, fresh_digest)
                        }
                        (expected, actual) => panic!(
                            "wrong classification for {}: baseline {:?}, record {:?}",
                            path, expected, actual
                        ),
                    }
                }

                // Baseline-only paths are never reported
                for path in baseline_map.keys() {
                    if !fresh_map.contains_key(path) {
                        assert!(records.iter().all(|r| r.path() != path));
                    }
                }

                Ok(())
            },
        )
        .unwrap();
}
