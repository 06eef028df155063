//! Transport layer (HTTPS).
//!
//! Exposes the review handler, probes, TLS loading, and the HTTP mapping of
//! `AuthzError`. Bodies are decoded once before they reach the policy engine.

pub mod authorize;
pub mod error;
pub mod probe;
pub mod tls;
