//! Wire protocol modules.
//!
//! Only one wire format exists today: the `authorization.k8s.io/v1`
//! `SubjectAccessReview` object exchanged with the API server.
//!
//! Decoding is panic-free and strict about JSON syntax: malformed bodies are
//! reported as `AuthzError::MalformedRequest` instead of being replaced by an
//! empty review.

pub mod review;
