use authzhook_core::error::Result;
use authzhook_core::{AccessRequest, Decision, DefaultPolicy, NonResourceAction, ResourceAction, Verdict};

use crate::config::schema::PolicyConfig;

use super::rules::{compile_rules, first_non_resource_match, first_resource_match, Rule};

/// Compiled decision engine.
/// Construct once at startup, then share via Arc. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    rules: Vec<Rule>,
    default: DefaultPolicy,
}

impl PolicyEngine {
    pub fn new(policy: &PolicyConfig) -> Result<Self> {
        Ok(Self {
            rules: compile_rules(&policy.rules)?,
            default: policy.default,
        })
    }

    pub fn default_policy(&self) -> DefaultPolicy {
        self.default
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate a request and resolve the result against the default policy.
    pub fn evaluate(&self, req: &AccessRequest) -> Decision {
        let verdict = self.verdict(req);
        let unmatched = verdict.is_unset();
        let decision = verdict.resolve(self.default);

        if unmatched {
            tracing::debug!(
                user = %req.subject,
                default = self.default.as_str(),
                outcome = decision.outcome(),
                "no rule matched, default applied"
            );
        }
        decision
    }

    /// Rule evaluation without the default applied.
    ///
    /// Resource lane runs before the non-resource lane; each lane is
    /// first-match-wins.
    pub fn verdict(&self, req: &AccessRequest) -> Verdict {
        let mut verdict = Verdict::Unset;

        if let Some(action) = &req.resource {
            verdict = verdict.merge(self.resource_verdict(&req.subject, action));
        }
        if let Some(action) = &req.non_resource {
            verdict = verdict.merge(self.non_resource_verdict(&req.subject, action));
        }
        verdict
    }

    fn resource_verdict(&self, subject: &str, action: &ResourceAction) -> Verdict {
        let Some((idx, rule)) = first_resource_match(&self.rules, subject, action) else {
            return Verdict::Unset;
        };
        match &rule.verdict {
            Verdict::Allow => tracing::info!(
                lane = "resource", rule = idx, user = %subject,
                resource = %action.resource, verb = %action.verb,
                "allowed request"
            ),
            Verdict::Deny { .. } => tracing::info!(
                lane = "resource", rule = idx, user = %subject,
                resource = %action.resource, verb = %action.verb,
                "denied request"
            ),
            Verdict::NoOpinion | Verdict::Unset => tracing::info!(
                lane = "resource", rule = idx, user = %subject,
                resource = %action.resource, verb = %action.verb,
                "no opinion on request"
            ),
        }
        rule.verdict.clone()
    }

    fn non_resource_verdict(&self, subject: &str, action: &NonResourceAction) -> Verdict {
        let Some((idx, rule)) = first_non_resource_match(&self.rules, subject, action) else {
            return Verdict::Unset;
        };
        let path = action.path.as_deref().unwrap_or("");
        tracing::info!(
            lane = "non_resource", rule = idx, user = %subject,
            path = %path, verb = %action.verb,
            verdict = ?rule.verdict,
            "non-resource rule matched"
        );
        rule.verdict.clone()
    }
}
