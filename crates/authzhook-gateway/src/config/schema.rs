use std::net::SocketAddr;

use serde::Deserialize;
use authzhook_core::error::{AuthzError, Result};
use authzhook_core::DefaultPolicy;

use crate::policy::rules::compile_rules;

/// Identity the built-in rule set applies to.
pub const PRIVILEGED_SUBJECT: &str = "system:serviceaccount:default:test-user";

/// Reason attached to the built-in resource delete denial.
pub const DELETE_DENIED_REASON: &str = "You are not allowed to delete this resource";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            policy: PolicyConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AuthzError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.policy.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub tls: TlsSection,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            tls: TlsSection::default(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.tls.validate()
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            AuthzError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

/// PEM certificate/key pair presented to the API server.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsSection {
    #[serde(default = "default_cert_path")]
    pub cert_path: String,

    #[serde(default = "default_key_path")]
    pub key_path: String,
}

impl Default for TlsSection {
    fn default() -> Self {
        Self {
            cert_path: default_cert_path(),
            key_path: default_key_path(),
        }
    }
}

impl TlsSection {
    pub fn validate(&self) -> Result<()> {
        if self.cert_path.trim().is_empty() {
            return Err(AuthzError::BadRequest("gateway.tls.cert_path must not be empty".into()));
        }
        if self.key_path.trim().is_empty() {
            return Err(AuthzError::BadRequest("gateway.tls.key_path must not be empty".into()));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:443".into()
}
fn default_cert_path() -> String {
    "webhook.crt".into()
}
fn default_key_path() -> String {
    "webhook.key".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Applied when no rule matches.
    #[serde(default)]
    pub default: DefaultPolicy,

    /// Ordered rule table, first match wins per lane.
    #[serde(default = "builtin_rules")]
    pub rules: Vec<RuleConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            default: DefaultPolicy::default(),
            rules: builtin_rules(),
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        compile_rules(&self.rules).map(|_| ())
    }
}

/// Which action shape a rule applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    #[default]
    Resource,
    NonResource,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleEffect {
    Allow,
    NoOpinion,
    Deny,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Exact identity, or "*".
    pub subject: String,

    #[serde(default)]
    pub scope: RuleScope,

    /// Verbs, "*" matches any.
    pub verbs: Vec<String>,

    /// Resource kinds, "*" or empty matches any. Ignored for non-resource actions.
    #[serde(default)]
    pub resources: Vec<String>,

    pub effect: RuleEffect,

    /// Only valid with `effect: deny`.
    #[serde(default)]
    pub reason: Option<String>,
}

impl RuleConfig {
    fn new(scope: RuleScope, verbs: &[&str], effect: RuleEffect, reason: Option<&str>) -> Self {
        Self {
            subject: PRIVILEGED_SUBJECT.to_string(),
            scope,
            verbs: verbs.iter().map(|v| v.to_string()).collect(),
            resources: Vec::new(),
            effect,
            reason: reason.map(str::to_string),
        }
    }
}

/// Rule set used when the config has no `policy.rules`.
///
/// Resource deletes are denied with a reason; non-resource deletes only
/// withhold approval.
pub fn builtin_rules() -> Vec<RuleConfig> {
    vec![
        RuleConfig::new(RuleScope::Resource, &["get", "list"], RuleEffect::Allow, None),
        RuleConfig::new(
            RuleScope::Resource,
            &["delete"],
            RuleEffect::Deny,
            Some(DELETE_DENIED_REASON),
        ),
        RuleConfig::new(RuleScope::NonResource, &["get", "list"], RuleEffect::Allow, None),
        RuleConfig::new(RuleScope::NonResource, &["delete"], RuleEffect::NoOpinion, None),
    ]
}
