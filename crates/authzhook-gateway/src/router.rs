//! Axum router wiring.
//!
//! Exposes the review endpoint plus liveness and metrics probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/authorize", post(transport::authorize::authorize))
        .route("/healthz", get(transport::probe::healthz))
        .route("/metrics", get(transport::probe::metrics))
        .with_state(state)
}
