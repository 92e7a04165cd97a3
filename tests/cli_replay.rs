//! Integration tests for the `record` command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const POST_EXEC: &str = r#"{
    "hook_type": "POST_EXEC_HOOK",
    "context": {
        "plan": {
            "query_id": "hive_20240101_cli",
            "query_str": "INSERT INTO t SELECT * FROM s",
            "query_start_time": 1700000000000,
            "root_tasks": [{"id": "Stage-1", "kind": "map_red"}]
        },
        "session_id": "cli-session",
        "ugi": {"short_user_name": "etl", "user_name": "etl"},
        "hive_instance_address": "10.0.0.1",
        "map_red_stats": [
            {
                "job_id": "job_1700000000000_0001",
                "counters": [
                    {
                        "name": "org.apache.hadoop.mapreduce.TaskCounter",
                        "display_name": "Map-Reduce Framework",
                        "counters": {"MAP_INPUT_RECORDS": 42}
                    }
                ]
            }
        ]
    },
    "application": {"id": "application_1700000000000_0001"}
}"#;

fn write_snapshot(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_record_to_stdout() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "post.json", POST_EXEC);

    let mut cmd = Command::cargo_bin("query-event-hook").unwrap();
    cmd.arg("record")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""EventType":"QUERY_COMPLETED""#))
        .stdout(predicate::str::contains(
            r#""YarnApplicationId":"application_1700000000000_0001""#,
        ))
        .stdout(predicate::str::contains("MAP_INPUT_RECORDS"));
}

#[test]
fn test_record_appends_to_configured_output() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "post.json", POST_EXEC);
    let output = dir.path().join("events.jsonl");
    let config = dir.path().join("hook.toml");
    fs::write(
        &config,
        format!(
            "hive_version = \"3.1.3\"\n[output]\npath = {:?}\n",
            output.display().to_string()
        ),
    )
    .unwrap();

    for _ in 0..2 {
        Command::cargo_bin("query-event-hook")
            .unwrap()
            .args(["record", "--config"])
            .arg(&config)
            .arg("--snapshot")
            .arg(&snapshot)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.lines().count(), 2);
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(first["QueryId"], "hive_20240101_cli");
    assert_eq!(first["Status"], "SUCCESS");
}

#[test]
fn test_unsupported_hook_type_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        &dir,
        "driver.json",
        &POST_EXEC.replacen("POST_EXEC_HOOK", "POST_DRIVER_RUN", 1),
    );

    Command::cargo_bin("query-event-hook")
        .unwrap()
        .arg("record")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_hook_type_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(
        &dir,
        "lifetime.json",
        &POST_EXEC.replacen("POST_EXEC_HOOK", "QUERY_LIFETIME_HOOK", 1),
    );

    Command::cargo_bin("query-event-hook")
        .unwrap()
        .arg("record")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("query-event-hook")
        .unwrap()
        .arg("record")
        .arg("--snapshot")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot replay snapshot"));
}

#[test]
fn test_verbose_failure_describes_error_code() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("query-event-hook")
        .unwrap()
        .arg("-v")
        .arg("record")
        .arg("--snapshot")
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E2001: Snapshot file not found"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, "post.json", POST_EXEC);
    let config = dir.path().join("hook.toml");
    fs::write(&config, "queues = 7").unwrap();

    Command::cargo_bin("query-event-hook")
        .unwrap()
        .arg("record")
        .arg("--config")
        .arg(&config)
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}
