//! Evaluation outcome types.
//!
//! Rule evaluation produces a [`Verdict`]; the engine resolves
//! [`Verdict::Unset`] against an explicit [`DefaultPolicy`] before turning it
//! into the wire-facing [`Decision`].

use serde::Deserialize;

/// Outcome of rule evaluation before the default is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Verdict {
    /// No rule matched.
    #[default]
    Unset,
    Allow,
    /// Not allowed, but not an explicit denial either.
    NoOpinion,
    Deny { reason: Option<String> },
}

impl Verdict {
    pub fn is_unset(&self) -> bool {
        matches!(self, Verdict::Unset)
    }

    /// Combine verdicts from independently evaluated lanes.
    ///
    /// An explicit deny from either side wins; otherwise the later non-unset
    /// verdict replaces the earlier one. A resource deny followed by a
    /// non-resource allow therefore stays a plain deny, rather than the
    /// `allowed` + `denied` pair a field-by-field overwrite would leave.
    pub fn merge(self, later: Verdict) -> Verdict {
        match (self, later) {
            (earlier @ Verdict::Deny { .. }, _) => earlier,
            (_, later @ Verdict::Deny { .. }) => later,
            (earlier, Verdict::Unset) => earlier,
            (_, later) => later,
        }
    }

    /// Resolve `Unset` to the configured default.
    pub fn resolve(self, default: DefaultPolicy) -> Decision {
        match self {
            Verdict::Unset => default.decision(),
            Verdict::Allow => Decision::allow(),
            Verdict::NoOpinion => Decision::no_opinion(),
            Verdict::Deny { reason } => Decision::deny(reason),
        }
    }
}

/// Decision applied when no rule matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPolicy {
    #[default]
    Allow,
    NoOpinion,
    Deny,
}

impl DefaultPolicy {
    pub fn decision(self) -> Decision {
        match self {
            DefaultPolicy::Allow => Decision::allow(),
            DefaultPolicy::NoOpinion => Decision::no_opinion(),
            DefaultPolicy::Deny => Decision::deny(None),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DefaultPolicy::Allow => "allow",
            DefaultPolicy::NoOpinion => "no_opinion",
            DefaultPolicy::Deny => "deny",
        }
    }
}

/// Fully populated authorization outcome.
///
/// Constructed only through the associated functions, which keep `allowed`
/// and `denied` from both being true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub denied: bool,
    pub reason: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self { allowed: true, denied: false, reason: None }
    }

    pub fn no_opinion() -> Self {
        Self { allowed: false, denied: false, reason: None }
    }

    pub fn deny(reason: Option<String>) -> Self {
        Self { allowed: false, denied: true, reason }
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match (self.allowed, self.denied) {
            (true, _) => "allow",
            (false, true) => "deny",
            (false, false) => "no_opinion",
        }
    }
}
