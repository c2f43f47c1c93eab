//! End-to-end tests for the `route-matcher` binary.

use std::process::{Command, Output};

use serde_json::Value;

mod common;

const ROUTES: &str = r#"
[observability]
log_format = "json"

[[routes]]
name = "user_post"
methods = "GET"
pattern = "/users/:id/posts/:postId"

[[routes]]
name = "health"
methods = ["GET", "HEAD"]
pattern = "/health"
"#;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_route-matcher"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_match_prints_route_and_params() {
    let file = common::route_file(ROUTES);
    let config = file.path().to_str().unwrap();

    let output = run(&["match", "--config", config, "GET", "/Users/42/posts/7"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["route"], "user_post");
    assert_eq!(json["pattern"], "/users/:id/posts/:postId");
    assert_eq!(json["params"]["id"], "42");
    assert_eq!(json["params"]["postId"], "7");
}

#[test]
fn test_match_miss_exits_non_zero() {
    let file = common::route_file(ROUTES);
    let config = file.path().to_str().unwrap();

    let output = run(&["match", "--config", config, "POST", "/health"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("path exists under another method"));

    let output = run(&["match", "--config", config, "GET", "/nowhere"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_match_missing_route_file_fails() {
    let output = run(&["match", "--config", "/definitely/not/here.toml", "GET", "/health"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_match_logs_route_file_load() {
    let file = common::route_file(ROUTES);
    let config = file.path().to_str().unwrap();

    let output = run(&["--log-level", "debug", "match", "--config", config, "HEAD", "/health"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Route file loaded"));
    assert!(stderr.contains("Route matched"));
}

#[test]
fn test_inspect_output() {
    let output = run(&["inspect", "/users/:id/posts/:postId"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["pattern"], "/users/:id/posts/:postId");
    assert_eq!(json["regex"], r"^\/users\/([^/]+)\/posts\/([^/]+)$");
    assert_eq!(json["compile_mode"], "raw");
    assert_eq!(json["placeholders"], serde_json::json!(["id", "postId"]));
    assert_eq!(json["param_names"], serde_json::json!(["id", "postId"]));
}

#[test]
fn test_inspect_single_placeholder_and_bad_regex() {
    let json = stdout_json(&run(&["inspect", "/users/:id"]));
    assert_eq!(json["placeholders"], serde_json::json!(["id"]));
    assert_eq!(json["param_names"], serde_json::json!([]));

    let json = stdout_json(&run(&["inspect", "/weird(/:id"]));
    assert_eq!(json["compile_mode"], "literal");
}
