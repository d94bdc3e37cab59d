//! Policy decision types returned by rule sets.

use std::ops::BitOr;

use serde::Serialize;

/// Outcome of a single predicate or of a whole rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Action is permitted.
    Allow,
    /// Action is rejected.
    Deny,
}

impl Verdict {
    /// Maps a predicate result onto a verdict.
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }

    /// Returns true when the verdict allows the action.
    #[must_use]
    pub const fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Disjunction over any number of verdicts. Empty input denies.
    #[must_use]
    pub fn any<I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        verdicts.into_iter().fold(Self::Deny, BitOr::bitor)
    }
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        Self::from_bool(allowed)
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_allow()
    }
}

impl BitOr for Verdict {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bool(self.is_allow() || rhs.is_allow())
    }
}

/// Structured decision emitted by a rule set.
///
/// Allow decisions name the clause that granted access so callers can audit
/// why a check passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyDecision {
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    clause: Option<&'static str>,
}

impl PolicyDecision {
    /// Returns an allow decision granted by the named clause.
    #[must_use]
    pub const fn allow(clause: &'static str) -> Self {
        Self {
            verdict: Verdict::Allow,
            clause: Some(clause),
        }
    }

    /// Returns a deny decision.
    #[must_use]
    pub const fn deny() -> Self {
        Self {
            verdict: Verdict::Deny,
            clause: None,
        }
    }

    /// Returns the verdict.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns true when the decision allows the action to proceed.
    #[must_use]
    pub const fn is_allow(&self) -> bool {
        self.verdict.is_allow()
    }

    /// Returns true when the decision denies the action.
    #[must_use]
    pub const fn is_deny(&self) -> bool {
        !self.verdict.is_allow()
    }

    /// Returns the clause that granted access, if any.
    #[must_use]
    pub const fn clause(&self) -> Option<&'static str> {
        self.clause
    }
}
