//! Policy layer (rule table, default policy, decision engine).
//!
//! Compiles policy configuration into matchers once at startup; the
//! resulting engine is immutable and evaluated from any number of request
//! tasks concurrently.

pub mod engine;
pub mod rules;

pub use engine::PolicyEngine;
