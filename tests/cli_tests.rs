#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write input file");
}

fn ddb_flatten() -> Command {
    let mut cmd = Command::cargo_bin("ddb-flatten").expect("cargo bin");
    cmd.env_remove("DDB_FLATTEN_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn flattens_default_schema_file() {
    let dir = tempdir().expect("tempdir");
    write_file(
        dir.path(),
        "schema.json",
        r#"{"name": {"S": " Alice "}, "age": {"N": "30"}, "tags": {"L": [{"S": "x"}, {"S": ""}]}}"#,
    );

    ddb_flatten()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("{\"name\":\"Alice\",\"age\":30,\"tags\":[\"x\"]}\n");
}

#[test]
fn reads_config_flag_and_pretty_prints() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "item.json", r#"{"ok": {"BOOL": "t"}}"#);

    ddb_flatten()
        .current_dir(dir.path())
        .args(["--config", "item.json", "--pretty"])
        .assert()
        .success()
        .stdout("{\n  \"ok\": true\n}\n");
}

#[test]
fn reads_config_from_environment() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "env.json", r#"{"gone": {"NULL": "true"}}"#);

    ddb_flatten()
        .current_dir(dir.path())
        .env("DDB_FLATTEN_CONFIG", "env.json")
        .assert()
        .success()
        .stdout("{\"gone\":null}\n");
}

#[test]
fn rejects_non_json_file_name() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "item.yaml", "{}");

    ddb_flatten()
        .current_dir(dir.path())
        .args(["-c", "item.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON file"));
}

#[test]
fn malformed_nested_map_fails_without_output() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "bad.json", r#"{"a": {"M": "not-a-map"}}"#);

    ddb_flatten()
        .current_dir(dir.path())
        .args(["-c", "bad.json"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Malformed nested map"));
}

#[test]
fn strict_tags_rejects_conflicts() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "multi.json", r#"{"a": {"S": "x", "N": "1"}}"#);

    ddb_flatten()
        .current_dir(dir.path())
        .args(["-c", "multi.json"])
        .assert()
        .success()
        .stdout("{\"a\":1}\n");

    ddb_flatten()
        .current_dir(dir.path())
        .args(["-c", "multi.json", "--strict-tags"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conflicting type tags"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");

    ddb_flatten()
        .current_dir(dir.path())
        .args(["-c", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}
