//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use authzhook_core::error::{AuthzError, Result};

pub use schema::{GatewayConfig, GatewaySection, PolicyConfig, RuleConfig, RuleScope, TlsSection};

/// Default config path when neither an argument nor `AUTHZHOOK_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "authzhook.yaml";

/// Env var consulted for the config path.
pub const CONFIG_ENV: &str = "AUTHZHOOK_CONFIG";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        AuthzError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| AuthzError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config source: explicit path, then env var, then the default
/// file. Only a missing *default* file falls back to built-in settings; an
/// explicitly named file that cannot be read is an error.
pub fn load(explicit: Option<String>) -> Result<GatewayConfig> {
    if let Some(path) = explicit.or_else(|| std::env::var(CONFIG_ENV).ok()) {
        return load_from_file(path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from_file(DEFAULT_CONFIG_PATH);
    }
    tracing::warn!(path = DEFAULT_CONFIG_PATH, "config file not found, using built-in defaults");
    let cfg = GatewayConfig::default();
    cfg.validate()?;
    Ok(cfg)
}
