//! CLI routing: command execution through RunContext

use std::fs;
use tempfile::TempDir;
use vigil::cli::{Commands, RunContext};
use vigil::error::EngineError;

fn context_in(temp_dir: &TempDir) -> RunContext {
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    RunContext::new(
        root,
        Some(temp_dir.path().join("baseline.json")),
        None,
    )
    .unwrap()
}

#[test]
fn test_snapshot_command_reports_count() {
    let temp_dir = TempDir::new().unwrap();
    let context = context_in(&temp_dir);

    fs::write(context.engine().root().join("a.txt"), "a").unwrap();
    fs::write(context.engine().root().join("b.txt"), "b").unwrap();

    let outcome = context.execute(&Commands::Snapshot).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.output.contains("2 files"));
}

#[test]
fn test_verify_clean_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let context = context_in(&temp_dir);

    fs::write(context.engine().root().join("a.txt"), "a").unwrap();
    context.execute(&Commands::Snapshot).unwrap();

    let outcome = context
        .execute(&Commands::Verify {
            format: "text".to_string(),
            all: false,
        })
        .unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.output.contains("match the baseline"));
}

#[test]
fn test_verify_with_changes_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let context = context_in(&temp_dir);

    fs::write(context.engine().root().join("a.txt"), "before").unwrap();
    context.execute(&Commands::Snapshot).unwrap();
    fs::write(context.engine().root().join("a.txt"), "after").unwrap();

    let outcome = context
        .execute(&Commands::Verify {
            format: "text".to_string(),
            all: false,
        })
        .unwrap();
    assert_eq!(outcome.exit_code, 1);
    assert!(outcome.output.contains("a.txt"));
    assert!(outcome.output.contains("modified"));
}

#[test]
fn test_verify_json_output_parses() {
    let temp_dir = TempDir::new().unwrap();
    let context = context_in(&temp_dir);

    fs::write(context.engine().root().join("a.txt"), "before").unwrap();
    context.execute(&Commands::Snapshot).unwrap();
    fs::write(context.engine().root().join("b.txt"), "new file").unwrap();

    let outcome = context
        .execute(&Commands::Verify {
            format: "json".to_string(),
            all: false,
        })
        .unwrap();
    assert_eq!(outcome.exit_code, 1);

    let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["state"], "new");
    assert_eq!(records[0]["path"], "b.txt");
}

#[test]
fn test_verify_before_snapshot_surfaces_missing_baseline() {
    let temp_dir = TempDir::new().unwrap();
    let context = context_in(&temp_dir);

    fs::write(context.engine().root().join("a.txt"), "a").unwrap();

    let err = context
        .execute(&Commands::Verify {
            format: "text".to_string(),
            all: false,
        })
        .unwrap_err();
    assert!(matches!(err, EngineError::BaselineNotFound(_)));
    assert!(err.to_string().contains("vigil snapshot"));
}

#[test]
fn test_config_file_supplies_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("tree");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();

    let baseline_path = temp_dir.path().join("from-config.json");
    let config_path = temp_dir.path().join("vigil.toml");
    fs::write(
        &config_path,
        format!(
            "root = {:?}\nbaseline_path = {:?}\n",
            root.to_string_lossy(),
            baseline_path.to_string_lossy()
        ),
    )
    .unwrap();

    let context = RunContext::new(
        std::path::PathBuf::from("."),
        None,
        Some(config_path),
    )
    .unwrap();

    context.execute(&Commands::Snapshot).unwrap();
    assert!(baseline_path.exists());
}
