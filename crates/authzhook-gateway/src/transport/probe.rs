//! Liveness and metrics probes.

use axum::{extract::State, http::StatusCode};

use crate::app_state::AppState;

/// Liveness only: 200 whenever the process is serving.
pub async fn healthz(State(state): State<AppState>) -> StatusCode {
    tracing::debug!("healthz");
    state
        .metrics()
        .http_requests
        .inc(&[("route", "/healthz"), ("status", "200")]);
    StatusCode::OK
}

pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics().render()
}
