use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vidql_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("vidql"))
}

/// Temp dir with a config that removes the artificial delays
fn setup_test_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".vidql.toml"),
        "[data]\nlatency_ms = 0\ndeferred_value_ms = 0\n",
    )
    .unwrap();
    temp_dir
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    vidql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("video catalog"));
}

#[test]
fn test_version() {
    vidql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vidql"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();

    vidql_cmd()
        .args(["schema", "--config", "missing.toml"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".vidql.toml"), "[server\n").unwrap();

    vidql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

// =============================================================================
// Schema, Query, Mutate
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("interface Node"))
        .stdout(predicate::str::contains("type Video implements Node"));
}

#[test]
fn test_query() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .args(["query", "{ videos { totalCount edges { node { title } } } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalCount\": 3"))
        .stdout(predicate::str::contains("Ember.js CLI"))
        .stdout(predicate::str::contains("runTime"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .args([
            "query",
            "query ($id: ID!) { video(id: $id) { title } }",
            "--variables",
            r#"{"id": "a"}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Create a GraphQL Schema"));
}

#[test]
fn test_query_invalid_variables() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .args(["query", "{ foo }", "--variables", "{"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--variables"));
}

#[test]
fn test_query_error_is_reported_in_response() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .args(["query", "{ nope }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_mutate() {
    let temp_dir = setup_test_dir();

    vidql_cmd()
        .args([
            "mutate",
            r#"createVideo(input: { title: "CLI", duration: 5, watched: true, clientMutationId: "c1" }) { clientMutationId video { title } }"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"clientMutationId\": \"c1\""))
        .stdout(predicate::str::contains("\"title\": \"CLI\""));
}
