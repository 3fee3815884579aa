use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_cmd(config_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_country-search"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("COUNTRY_SEARCH_BASE_URL");
    cmd
}

#[test]
fn test_cli_help() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("autocomplete"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--debounce-ms"));
}

#[test]
fn test_cli_version() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("country-search"));
}

#[test]
fn test_config_where() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .args(["config", "where"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));

    search_cmd(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create config"));
}

#[test]
fn test_invalid_subcommand() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home).arg("invalid-command").assert().failure();
}

#[test]
fn test_lookup_empty_query_sends_nothing() {
    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .args(["lookup", "", "--base-url", "http://127.0.0.1:1/name"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_prints_names_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/name/ind"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "India"},
            {"name": "Indonesia"}
        ])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .args(["lookup", "ind", "--base-url", &format!("{}/name", server.uri())])
        .assert()
        .success()
        .stdout("India\nIndonesia\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_failure_reports_no_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    search_cmd(&home)
        .args(["lookup", "zzzzz", "--base-url", &format!("{}/name", server.uri())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No suggestions found"));
}
