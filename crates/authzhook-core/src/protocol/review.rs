//! `SubjectAccessReview` wire object (JSON, camelCase).
//!
//! The API server posts a review with `spec` filled in and expects the same
//! object back with `status` populated. Unknown fields are tolerated so newer
//! API server versions keep working; `metadata` is echoed untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decision::Decision;
use crate::error::{AuthzError, Result};

/// API version stamped on responses when the request carried none.
pub const API_VERSION: &str = "authorization.k8s.io/v1";
/// Kind stamped on responses when the request carried none.
pub const KIND: &str = "SubjectAccessReview";

/// Access review object (request and response share the shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAccessReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Object metadata, echoed as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub spec: SubjectAccessReviewSpec,
    #[serde(default)]
    pub status: SubjectAccessReviewStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAccessReviewSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_attributes: Option<ResourceAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_resource_attributes: Option<NonResourceAttributes>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

/// Attributes of a request against a typed resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAttributes {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verb: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subresource: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// Attributes of a request against a non-resource URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonResourceAttributes {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub verb: String,
}

/// Review outcome. `allowed` and `denied` are always serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAccessReviewStatus {
    #[serde(default)]
    pub allowed: bool,
    #[serde(default)]
    pub denied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_error: Option<String>,
}

impl From<&Decision> for SubjectAccessReviewStatus {
    fn from(d: &Decision) -> Self {
        Self {
            allowed: d.allowed,
            denied: d.denied,
            reason: d.reason.clone(),
            evaluation_error: None,
        }
    }
}

impl SubjectAccessReview {
    /// Replace `status` with the decision and fill in `apiVersion`/`kind`
    /// when the caller left them out.
    pub fn with_decision(mut self, decision: &Decision) -> Self {
        self.status = SubjectAccessReviewStatus::from(decision);
        if self.api_version.is_none() {
            self.api_version = Some(API_VERSION.to_string());
        }
        if self.kind.is_none() {
            self.kind = Some(KIND.to_string());
        }
        self
    }
}

/// Decode a request body. An empty or syntactically invalid body is an error,
/// never a default-valued review.
pub fn decode(body: &[u8]) -> Result<SubjectAccessReview> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AuthzError::MalformedRequest("empty body".into()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AuthzError::MalformedRequest(format!("invalid review json: {e}")))
}
