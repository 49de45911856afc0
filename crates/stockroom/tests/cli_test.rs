//! Integration tests for the `stockroom` CLI binary.
//!
//! Argument parsing, help output, shell completions, config handling, and
//! exit codes, plus end-to-end commands against a wiremock API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `stockroom` binary with env isolation.
///
/// Clears all `STOCKROOM_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn stockroom_cmd(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("stockroom");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("STOCKROOM_PROFILE")
        .env_remove("STOCKROOM_URL")
        .env_remove("STOCKROOM_OUTPUT")
        .env_remove("STOCKROOM_COLOR")
        .env_remove("STOCKROOM_YES")
        .env_remove("STOCKROOM_INSECURE")
        .env_remove("STOCKROOM_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// A URL nothing listens on.
const DEAD_URL: &str = "http://127.0.0.1:9/api";

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = stockroom_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("inventory")
                .and(predicate::str::contains("products"))
                .and(predicate::str::contains("suppliers"))
                .and(predicate::str::contains("orders"))
                .and(predicate::str::contains("dashboard")),
        );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stockroom"));
}

#[test]
fn test_orders_subcommands_exist() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["orders", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("details"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    let output = stockroom_cmd(home.path())
        .args(["--output", "invalid", "products", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_unreachable_api_exit_code() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", DEAD_URL, "products", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not connect"));
}

#[test]
fn test_status_unreachable() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", DEAD_URL, "status"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Cannot connect to API"));
}

#[test]
fn test_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--profile", "nope", "products", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'nope' not found"));
}

#[test]
fn test_bad_item_syntax() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["orders", "create", "--supplier", "s1", "--item", "p1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PRODUCT_ID:QTY"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    // `config show` renders the default config when no file exists.
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_set_then_use() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--profile", "lab", "config", "set", "url", "http://lab.test/api"])
        .assert()
        .success();

    stockroom_cmd(home.path())
        .args(["config", "use", "lab"])
        .assert()
        .success();

    stockroom_cmd(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab *"));

    stockroom_cmd(home.path())
        .args(["--output", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://lab.test/api"));
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["config", "use", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));
}

// ── Against a mock API ──────────────────────────────────────────────

fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_list_empty_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "products", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_orders_list_shows_item_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "o1",
            "supplierId": { "_id": "s1", "name": "Acme", "contact": "a" },
            "items": [
                { "productId": { "_id": "p1", "sku": "A1", "name": "Widget" }, "qty": 2, "price": 9.99 },
                { "productId": { "_id": "p2", "sku": "B2", "name": "Gadget" }, "qty": 1, "price": 4.5 }
            ],
            "status": "pending"
        }])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "orders", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Acme")
                .and(predicate::str::contains("2 items"))
                .and(predicate::str::contains("pending")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_order_create_captures_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10 },
            { "_id": "p2", "sku": "B2", "name": "Gadget", "price": 4.5, "stock": 3 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "supplierId": "s1",
            "status": "pending",
            "items": [
                { "productId": "p1", "qty": 2, "price": 9.99 },
                { "productId": "p2", "qty": 1, "price": 4.5 }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "o1" })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args([
            "--url",
            &api_url(&server),
            "orders",
            "create",
            "--supplier",
            "s1",
            "--item",
            "p1:2",
            "--item",
            "p2:1",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Order created successfully!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_order_create_without_items_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "orders", "create", "--supplier", "s1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please add at least one item"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_missing_product_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/p9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "products", "get", "p9"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("product 'p9' not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_yes_when_not_interactive() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "products", "delete", "p1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires confirmation"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/suppliers/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "--yes", "suppliers", "delete", "s1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Supplier deleted successfully!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_create_reports_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "db down" })),
        )
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    stockroom_cmd(home.path())
        .args([
            "--url",
            &api_url(&server),
            "products",
            "create",
            "--sku",
            "A1",
            "--name",
            "Widget",
            "--price",
            "9.99",
            "--stock",
            "10",
        ])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Error creating product"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dashboard_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "p1", "sku": "A1", "name": "Widget", "price": 9.99, "stock": 10 }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = stockroom_cmd(home.path())
        .args(["--url", &api_url(&server), "--output", "json", "dashboard"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_products"], 1);
    assert_eq!(value["total_orders"], 0);
    assert_eq!(
        value["recent_products"][0],
        "A1: Widget - $9.99 (Stock: 10)"
    );
}
