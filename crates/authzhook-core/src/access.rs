//! Structured access request consumed by the decision engine.
//!
//! Built from the review `spec`; wire-level optionality (empty strings,
//! missing attribute blocks) is normalized here so the engine only ever sees
//! `Option`s.

use crate::protocol::review::{NonResourceAttributes, ResourceAttributes, SubjectAccessReviewSpec};

/// Action against a typed resource (`pods`, `deployments`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceAction {
    pub verb: String,
    pub resource: String,
    pub namespace: Option<String>,
    pub group: Option<String>,
    pub version: Option<String>,
    pub subresource: Option<String>,
    pub name: Option<String>,
}

/// Action against an untyped endpoint (`/healthz`, `/version`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonResourceAction {
    pub verb: String,
    pub path: Option<String>,
}

/// Immutable input to a single evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequest {
    /// Authenticated identity (opaque).
    pub subject: String,
    /// Groups reported by the authenticator. Carried for logging only.
    pub groups: Vec<String>,
    pub uid: Option<String>,
    pub resource: Option<ResourceAction>,
    pub non_resource: Option<NonResourceAction>,
}

impl AccessRequest {
    pub fn new(subject: impl Into<String>) -> Self {
        Self { subject: subject.into(), ..Self::default() }
    }

    /// Attach a resource action.
    pub fn with_resource(mut self, verb: impl Into<String>, resource: impl Into<String>) -> Self {
        self.resource = Some(ResourceAction {
            verb: verb.into(),
            resource: resource.into(),
            ..ResourceAction::default()
        });
        self
    }

    /// Attach a non-resource action.
    pub fn with_non_resource(mut self, verb: impl Into<String>, path: Option<String>) -> Self {
        self.non_resource = Some(NonResourceAction { verb: verb.into(), path });
        self
    }

    /// True when no action shape is present (no-op input).
    pub fn is_empty(&self) -> bool {
        self.resource.is_none() && self.non_resource.is_none()
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

impl From<&ResourceAttributes> for ResourceAction {
    fn from(a: &ResourceAttributes) -> Self {
        Self {
            verb: a.verb.clone(),
            resource: a.resource.clone(),
            namespace: non_empty(&a.namespace),
            group: non_empty(&a.group),
            version: non_empty(&a.version),
            subresource: non_empty(&a.subresource),
            name: non_empty(&a.name),
        }
    }
}

impl From<&NonResourceAttributes> for NonResourceAction {
    fn from(a: &NonResourceAttributes) -> Self {
        Self { verb: a.verb.clone(), path: non_empty(&a.path) }
    }
}

impl From<&SubjectAccessReviewSpec> for AccessRequest {
    fn from(spec: &SubjectAccessReviewSpec) -> Self {
        Self {
            subject: spec.user.clone(),
            groups: spec.groups.clone(),
            uid: non_empty(&spec.uid),
            resource: spec.resource_attributes.as_ref().map(ResourceAction::from),
            non_resource: spec.non_resource_attributes.as_ref().map(NonResourceAction::from),
        }
    }
}
