//! authzhook gateway binary.
//!
//! - `POST /authorize`: SubjectAccessReview in, same review with status out
//! - `GET /healthz`, `GET /metrics`
//! - TLS termination from a PEM pair loaded at startup
//! - Graceful shutdown on Ctrl+C / SIGTERM

use std::time::Duration;

use axum_server::Handle;
use tracing_subscriber::{fmt, EnvFilter};

use authzhook_core::error::{AuthzError, Result};
use authzhook_gateway::{app_state, config, obs::WebhookMetrics, router, transport};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "authzhook-gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load(std::env::args().nth(1))?;
    let listen = cfg.gateway.listen_addr()?;
    let tls = transport::tls::load(&cfg.gateway.tls).await?;

    let state = app_state::AppState::new(cfg)?;
    let metrics = state.metrics();
    let app = router::build_router(state);

    let handle = Handle::new();
    tokio::spawn(shutdown_on_signal(handle.clone(), metrics));

    tracing::info!(%listen, "authzhook-gateway starting");
    axum_server::bind_rustls(listen, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AuthzError::Internal(format!("server failed: {e}")))
}

async fn shutdown_on_signal(handle: Handle, metrics: std::sync::Arc<WebhookMetrics>) {
    shutdown_signal().await;
    metrics.set_draining();
    tracing::info!(grace_secs = SHUTDOWN_GRACE.as_secs(), "signal received, starting graceful shutdown");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
