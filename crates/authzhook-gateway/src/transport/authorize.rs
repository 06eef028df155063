//! `POST /authorize` handler.
//!
//! Decode-once pipeline: body bytes -> `SubjectAccessReview` ->
//! `AccessRequest` -> engine -> same review echoed with `status` filled in.
//! A body that fails to decode is rejected; it never reaches the engine.

use std::time::Instant;

use axum::{extract::State, Json};
use bytes::Bytes;

use authzhook_core::protocol::review::{self, SubjectAccessReview};
use authzhook_core::AccessRequest;

use crate::app_state::AppState;
use crate::transport::error::ApiError;

pub async fn authorize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubjectAccessReview>, ApiError> {
    let out = review_once(&state, &body);

    let status = if out.is_ok() { "200" } else { "400" };
    state
        .metrics()
        .http_requests
        .inc(&[("route", "/authorize"), ("status", status)]);
    out
}

fn review_once(state: &AppState, body: &[u8]) -> Result<Json<SubjectAccessReview>, ApiError> {
    let sar = review::decode(body).map_err(|e| {
        state.metrics().malformed_requests.inc(&[]);
        tracing::warn!(error = %e, bytes = body.len(), "rejecting malformed access review");
        e
    })?;

    let req = AccessRequest::from(&sar.spec);

    let started = Instant::now();
    let decision = state.engine().evaluate(&req);
    let metrics = state.metrics();
    metrics.evaluate_duration.observe(&[], started.elapsed());
    metrics.decisions.inc(&[("outcome", decision.outcome())]);

    Ok(Json(sar.with_decision(&decision)))
}
