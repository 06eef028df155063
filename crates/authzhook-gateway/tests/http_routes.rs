//! Router-level tests: requests are driven through the axum service directly,
//! without binding a socket or loading TLS material.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use authzhook_gateway::{app_state::AppState, config::GatewayConfig, router};

const LIMIT: usize = 1024 * 1024;

fn app() -> Router {
    let state = AppState::new(GatewayConfig::default()).unwrap();
    router::build_router(state)
}

async fn post_authorize(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/authorize")
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), LIMIT).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), LIMIT).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn authorize_scenarios() {
    for sc in vector_loader::load_scenarios() {
        let (status, out) = post_authorize(app(), sc.review.to_string()).await;
        assert_eq!(status, StatusCode::OK, "{}", sc.description);
        assert_eq!(out["status"]["allowed"], sc.expect.allowed, "{}", sc.description);
        assert_eq!(out["status"]["denied"], sc.expect.denied, "{}", sc.description);
        match &sc.expect.reason {
            Some(r) => assert_eq!(out["status"]["reason"], r.as_str(), "{}", sc.description),
            None => assert!(out["status"].get("reason").is_none(), "{}", sc.description),
        }
    }
}

#[tokio::test]
async fn authorize_echoes_review() {
    let review = json!({
        "apiVersion": "authorization.k8s.io/v1",
        "kind": "SubjectAccessReview",
        "metadata": { "creationTimestamp": null },
        "spec": {
            "user": "system:serviceaccount:default:test-user",
            "groups": ["system:serviceaccounts"],
            "resourceAttributes": { "namespace": "default", "verb": "delete", "resource": "pods", "name": "web-0" }
        }
    });
    let (status, out) = post_authorize(app(), review.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(out["apiVersion"], "authorization.k8s.io/v1");
    assert_eq!(out["kind"], "SubjectAccessReview");
    assert_eq!(out["metadata"], review["metadata"]);
    assert_eq!(out["spec"], review["spec"]);
    assert_eq!(out["status"]["reason"], "You are not allowed to delete this resource");
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    for body in ["", "{\"spec\": {", "not json", "{\"spec\": {\"user\": 7}}"] {
        let (status, out) = post_authorize(app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body={body:?}");
        assert_eq!(out["error"], "MALFORMED_REQUEST", "body={body:?}");
    }
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = get(app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn authorize_rejects_get() {
    let (status, _) = get(app(), "/authorize").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn metrics_count_decisions_and_malformed() {
    let state = AppState::new(GatewayConfig::default()).unwrap();
    let app = router::build_router(state.clone());

    let deny = json!({
        "spec": {
            "user": "system:serviceaccount:default:test-user",
            "resourceAttributes": { "verb": "delete", "resource": "pods" }
        }
    });
    post_authorize(app.clone(), deny.to_string()).await;
    post_authorize(app.clone(), "{").await;

    assert_eq!(state.cfg().version, 1);
    let metrics = state.metrics();
    assert_eq!(metrics.decisions.get(&[("outcome", "deny")]), 1);
    assert_eq!(metrics.malformed_requests.get(&[]), 1);
    assert_eq!(metrics.http_requests.get(&[("route", "/authorize"), ("status", "400")]), 1);

    let (status, text) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("authzhook_decisions_total{outcome=\"deny\"} 1"));
    assert!(text.contains("authzhook_malformed_requests_total 1"));
    assert!(text.contains("authzhook_draining 0"));
}
