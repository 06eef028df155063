//! authzhook gateway library entry.
//!
//! This crate wires config, the policy engine, metrics, and the HTTPS
//! transport into the webhook authorizer. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod policy;
pub mod router;
pub mod transport;
