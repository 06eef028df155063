//! authzhook core: transport-agnostic access review types, decisions, and errors.
//!
//! This crate defines the wire-level `SubjectAccessReview` contract, the
//! structured `AccessRequest` the decision engine consumes, and the
//! `Decision` it produces. It intentionally carries no transport or runtime
//! dependencies so the engine can be exercised without an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input surfaces as `AuthzError::MalformedRequest` instead of a
//! zero-valued request.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod access;
pub mod decision;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{AuthzError, Result};

pub use access::{AccessRequest, NonResourceAction, ResourceAction};
pub use decision::{Decision, DefaultPolicy, Verdict};
