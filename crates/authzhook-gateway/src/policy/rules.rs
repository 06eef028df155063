//! Rule table compilation and matching utilities.
//!
//! Supports exact and wildcard (`*`) matching on subject, verb, and resource
//! kind. Rules are compiled once at startup and then only read.

use authzhook_core::error::{AuthzError, Result};
use authzhook_core::{NonResourceAction, ResourceAction, Verdict};

use crate::config::schema::{RuleConfig, RuleEffect, RuleScope};

/// Exact-or-wildcard string matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Any,
    Exact(String),
}

impl Matcher {
    fn parse(raw: &str) -> Self {
        if raw == "*" { Matcher::Any } else { Matcher::Exact(raw.to_string()) }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Exact(s) => s == value,
        }
    }
}

/// Compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub subject: Matcher,
    pub scope: RuleScope,
    pub verbs: Vec<Matcher>,
    pub resources: Vec<Matcher>, // empty => any
    pub verdict: Verdict,
}

impl Rule {
    fn matches_subject(&self, subject: &str) -> bool {
        self.subject.matches(subject)
    }

    fn matches_verb(&self, verb: &str) -> bool {
        self.verbs.iter().any(|m| m.matches(verb))
    }

    pub fn matches_resource(&self, subject: &str, action: &ResourceAction) -> bool {
        if self.scope == RuleScope::NonResource {
            return false;
        }
        if !self.matches_subject(subject) || !self.matches_verb(&action.verb) {
            return false;
        }
        self.resources.is_empty() || self.resources.iter().any(|m| m.matches(&action.resource))
    }

    pub fn matches_non_resource(&self, subject: &str, action: &NonResourceAction) -> bool {
        // A resource filter never matches an untyped path.
        if self.scope == RuleScope::Resource || !self.resources.is_empty() {
            return false;
        }
        self.matches_subject(subject) && self.matches_verb(&action.verb)
    }
}

pub fn compile_rules(raw: &[RuleConfig]) -> Result<Vec<Rule>> {
    let mut out = Vec::with_capacity(raw.len());
    for (idx, r) in raw.iter().enumerate() {
        out.push(compile_rule(idx, r)?);
    }
    Ok(out)
}

fn compile_rule(idx: usize, r: &RuleConfig) -> Result<Rule> {
    if r.subject.trim().is_empty() {
        return Err(AuthzError::BadRequest(format!(
            "policy.rules[{idx}].subject must not be empty (use \"*\" for any)"
        )));
    }
    if r.verbs.is_empty() {
        return Err(AuthzError::BadRequest(format!("policy.rules[{idx}].verbs must not be empty")));
    }
    if let Some(v) = r.verbs.iter().find(|v| v.trim().is_empty()) {
        return Err(AuthzError::BadRequest(format!("policy.rules[{idx}] has empty verb: {v:?}")));
    }
    if r.scope == RuleScope::NonResource && !r.resources.is_empty() {
        return Err(AuthzError::BadRequest(format!(
            "policy.rules[{idx}].resources is not valid for non_resource scope"
        )));
    }

    let verdict = match (r.effect, &r.reason) {
        (RuleEffect::Allow, None) => Verdict::Allow,
        (RuleEffect::NoOpinion, None) => Verdict::NoOpinion,
        (RuleEffect::Deny, reason) => Verdict::Deny { reason: reason.clone() },
        (_, Some(_)) => {
            return Err(AuthzError::BadRequest(format!(
                "policy.rules[{idx}].reason is only valid with effect: deny"
            )))
        }
    };

    let resources = if r.resources.iter().any(|s| s == "*") {
        Vec::new()
    } else {
        r.resources.iter().map(|s| Matcher::parse(s)).collect()
    };

    Ok(Rule {
        subject: Matcher::parse(&r.subject),
        scope: r.scope,
        verbs: r.verbs.iter().map(|v| Matcher::parse(v)).collect(),
        resources,
        verdict,
    })
}

/// First resource rule matching the action, with its index.
pub fn first_resource_match<'a>(
    rules: &'a [Rule],
    subject: &str,
    action: &ResourceAction,
) -> Option<(usize, &'a Rule)> {
    rules
        .iter()
        .enumerate()
        .find(|(_, r)| r.matches_resource(subject, action))
}

/// First non-resource rule matching the action, with its index.
pub fn first_non_resource_match<'a>(
    rules: &'a [Rule],
    subject: &str,
    action: &NonResourceAction,
) -> Option<(usize, &'a Rule)> {
    rules
        .iter()
        .enumerate()
        .find(|(_, r)| r.matches_non_resource(subject, action))
}
