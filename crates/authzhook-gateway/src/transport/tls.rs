//! TLS material loading.
//!
//! The certificate/key pair is read once at startup; a missing or invalid
//! pair is fatal.

use axum_server::tls_rustls::RustlsConfig;

use authzhook_core::error::{AuthzError, Result};

use crate::config::TlsSection;

pub async fn load(tls: &TlsSection) -> Result<RustlsConfig> {
    RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
        .await
        .map_err(|e| {
            AuthzError::Internal(format!(
                "load tls pair failed (cert={}, key={}): {e}",
                tls.cert_path, tls.key_path
            ))
        })
}
