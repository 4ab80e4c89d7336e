use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todo_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("todo-graphql"));
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL API for todos"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("todo-graphql"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Todo"))
        .stdout(predicate::str::contains("createTodo(name: String!): Todo"));
}

// =============================================================================
// Documents against the in-memory store
// =============================================================================

#[test]
fn test_query_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let output = todo_cmd(&temp_dir)
        .args(["query", "--in-memory", "{ todos { id name status } }"])
        .assert()
        .success();

    let json = stdout_json(output.get_output());
    assert_eq!(json, serde_json::json!({ "data": { "todos": [] } }));
}

#[test]
fn test_mutate_create_todo() {
    let temp_dir = TempDir::new().unwrap();
    let output = todo_cmd(&temp_dir)
        .args([
            "mutate",
            "--in-memory",
            r#"createTodo(name: "buy milk") { id name status }"#,
        ])
        .assert()
        .success();

    let json = stdout_json(output.get_output());
    assert_eq!(json["data"]["createTodo"]["name"], "buy milk");
    assert_eq!(json["data"]["createTodo"]["status"], 1);
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .args([
            "query",
            "--in-memory",
            "--variables",
            r#"{"name": "from vars"}"#,
            "mutation Add($name: String!) { createTodo(name: $name) { name } }",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("from vars"));
}

#[test]
fn test_missing_todo_reports_field_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = todo_cmd(&temp_dir)
        .args(["query", "--in-memory", "{ todo(id: 1) { id } }"])
        .assert()
        .success();

    let json = stdout_json(output.get_output());
    assert!(json["data"]["todo"].is_null());
    assert_eq!(json["errors"][0]["message"], "record not found");
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .args(["query", "--in-memory", "--variables", "{oops", "{ todos { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_query_without_database_url_fails() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .args(["query", "{ todos { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database URL configured"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let temp_dir = TempDir::new().unwrap();
    todo_cmd(&temp_dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database URL configured"));
}

#[test]
fn test_unreachable_database_fails_at_startup() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("todo-graphql.toml"),
        "[database]\nurl = \"not-a-postgres-url\"\n",
    )
    .unwrap();

    todo_cmd(&temp_dir)
        .args(["query", "{ todos { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("todo-graphql.toml"),
        "[server]\nport = \"eighty\"\n",
    )
    .unwrap();

    todo_cmd(&temp_dir)
        .args(["query", "--in-memory", "{ todos { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
