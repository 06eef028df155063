//! Shared application state for the webhook.
//!
//! Compiles the policy engine once at startup and shares it, together with
//! the metrics registry, across all request handlers.

use std::sync::Arc;

use authzhook_core::error::{AuthzError, Result};

use crate::config::GatewayConfig;
use crate::obs::WebhookMetrics;
use crate::policy::PolicyEngine;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    engine: Arc<PolicyEngine>,
    metrics: Arc<WebhookMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let engine = PolicyEngine::new(&cfg.policy)
            .map_err(|e| AuthzError::BadRequest(format!("policy compile failed: {e}")))?;

        tracing::info!(
            rules = engine.rule_count(),
            default = engine.default_policy().as_str(),
            "policy engine compiled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            engine: Arc::new(engine),
            metrics: Arc::new(WebhookMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    pub fn metrics(&self) -> Arc<WebhookMetrics> {
        Arc::clone(&self.metrics)
    }
}
