//! End-to-end tests for the decision endpoints.
//!
//! Each test binds an ephemeral port, serves one decision mode on it, and
//! drives it with a real HTTP client.

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, StatusCode};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::net::TcpListener;

use pdp_bench::policy::DecisionMode;
use pdp_bench::server;

/// Serve `mode` on an ephemeral port, returning the base URL.
async fn spawn_server(mode: DecisionMode) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server::serve(listener, mode).await;
    });
    format!("http://{addr}")
}

fn client() -> Client<HttpConnector, Full<Bytes>> {
    Client::builder(TokioExecutor::new()).build_http()
}

async fn send(method: &str, url: &str, body: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(url)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap();
    let response = client().request(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    (status, content_type, body)
}

#[tokio::test]
async fn test_stub_get_returns_fixed_denial() {
    let base = spawn_server(DecisionMode::Stub).await;
    let (status, content_type, body) =
        send("GET", &format!("{base}/v1/data/rbac/allow"), "").await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"result":false}"#);
}

#[tokio::test]
async fn test_stub_ignores_request_body() {
    let base = spawn_server(DecisionMode::Stub).await;
    let (status, _, body) = send(
        "POST",
        &format!("{base}/v1/data/rbac/allow"),
        r#"{"user": "alice"}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"result":false}"#);
}

#[tokio::test]
async fn test_stub_answers_any_method() {
    let base = spawn_server(DecisionMode::Stub).await;
    for method in ["GET", "POST", "PUT", "DELETE", "PATCH"] {
        let (status, _, body) = send(method, &format!("{base}/v1/data/rbac/allow"), "").await;
        assert_eq!(status, 200, "method {method}");
        assert_eq!(body, r#"{"result":false}"#, "method {method}");
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let base = spawn_server(DecisionMode::Stub).await;
    let (status, _, body) = send("GET", &format!("{base}/unknown/path"), "").await;
    assert_eq!(status, 404);
    assert_ne!(body, r#"{"result":false}"#);
}

#[tokio::test]
async fn test_port_cannot_be_bound_twice() {
    let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap();
    assert!(TcpListener::bind(addr).await.is_err());
}

#[tokio::test]
async fn test_evaluate_decides_over_http() {
    let base = spawn_server(DecisionMode::Evaluate).await;
    let url = format!("{base}/v1/data/rbac/allow");

    let (status, content_type, body) = send(
        "POST",
        &url,
        r#"{"input":{"user":"alice","action":"read","object":"server123"}}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"result":true}"#);

    let (_, _, body) = send(
        "POST",
        &url,
        r#"{"input":{"user":"bob","action":"write","object":"database456"}}"#,
    )
    .await;
    assert_eq!(body, r#"{"result":false}"#);
}

#[tokio::test]
async fn test_evaluate_rejects_non_object_body() {
    let base = spawn_server(DecisionMode::Evaluate).await;
    let (status, _, body) = send("POST", &format!("{base}/v1/data/rbac/allow"), "[]").await;
    assert_eq!(status, 400);
    assert_eq!(body, "Synopsis: `{\"input\":{...}}`.\n");
}

#[tokio::test]
async fn test_parse_only_parses_but_denies() {
    let base = spawn_server(DecisionMode::ParseOnly).await;
    let url = format!("{base}/v1/data/rbac/allow");

    let (status, _, body) = send(
        "POST",
        &url,
        r#"{"input":{"user":"alice","action":"read","object":"server123"}}"#,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"result":false}"#);

    let (status, _, _) = send("POST", &url, "garbage").await;
    assert_eq!(status, 400);
}
