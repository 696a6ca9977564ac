/*
 * SPDX-FileCopyrightText: 2024 A3Mailer Project
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::io::Write;
use template_server::api::{router, HEALTH_PATH, TEMPLATE_PATH};
use template_server::{generate_from_file, load_config};
use tower::ServiceExt;

fn payload(language: &str, signature: Value) -> Value {
    json!({
        "question_id": "q-42",
        "title": "Example",
        "description": "Example problem",
        "signature": signature,
        "language": language,
    })
}

fn fib_signature() -> Value {
    json!({
        "function_name": "fib",
        "parameters": [{"name": "n", "type": "int"}],
        "returns": {"type": "int"}
    })
}

async fn post_template(body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(TEMPLATE_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_create_template() {
    let (status, body) = post_template(&payload("python", fib_signature())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["language"], "python");
    let template = body["template"].as_str().unwrap();
    assert!(template.contains("def fib(self, n: int) -> int:"));
}

#[tokio::test]
async fn test_every_language_is_served() {
    for language in ["python", "java", "cpp", "javascript"] {
        let (status, body) = post_template(&payload(language, fib_signature())).await;
        assert_eq!(status, StatusCode::CREATED, "{language}");
        assert_eq!(body["language"], language);
        assert!(body["template"].as_str().unwrap().contains("fib"));
    }
}

#[tokio::test]
async fn test_unsupported_language() {
    let (status, body) = post_template(&payload("cobol", fib_signature())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Unsupported language: cobol");
    assert!(body.get("template").is_none());
}

#[tokio::test]
async fn test_unsupported_type() {
    let signature = json!({
        "function_name": "solve",
        "parameters": [{"name": "m", "type": "Matrix"}],
        "returns": {"type": "int"}
    });
    let (status, body) = post_template(&payload("java", signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Unsupported DSL type: Matrix for language java");
    assert!(body.get("template").is_none());
}

#[tokio::test]
async fn test_deeply_nested_type_is_rejected() {
    let token = format!("int{}", "[]".repeat(100_000));
    let signature = json!({
        "function_name": "flatten",
        "parameters": [{"name": "grid", "type": token}],
        "returns": {"type": "int"}
    });
    let (status, body) = post_template(&payload("java", signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Unsupported DSL type: int[][]"));
}

#[tokio::test]
async fn test_malformed_request_is_client_error() {
    let (status, _) = post_template(&json!({"language": "python"})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri(HEALTH_PATH)
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generate_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", payload("cpp", fib_signature())).unwrap();

    let template = generate_from_file(file.path()).await.unwrap();
    assert!(template.contains("int fib(int n) {"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", payload("rust", fib_signature())).unwrap();
    let err = generate_from_file(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("Unsupported language: rust"));
}

#[tokio::test]
async fn test_load_config_installs_logging() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "listen_port = 9100\nlog_level = \"debug\"").unwrap();

    let config = load_config(Some(file.path())).await.unwrap();
    assert_eq!(config.listen_port, 9100);
    assert_eq!(config.log_level, "debug");
    assert!(tracing::dispatcher::has_been_set());
}
