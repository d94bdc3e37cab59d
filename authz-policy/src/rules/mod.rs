//! Per-resource rule sets.
//!
//! An action's allow condition is a disjunction of named [`Clause`]s. Clauses
//! are pure predicates over the actor and the resolved facts; any action a
//! rule set does not list is denied.

mod agency;
mod company_person;

use std::fmt::{self, Debug, Formatter};

use authz_primitives::{Action, Actor, ResourceKind};

use crate::decision::{PolicyDecision, Verdict};
use crate::resolver::RelationshipFacts;

pub use agency::AgencyPolicy;
pub use company_person::CompanyPersonPolicy;

/// Predicate signature shared by all clauses.
pub type Predicate = fn(&Actor, &RelationshipFacts) -> bool;

/// One named disjunct of an allow condition.
#[derive(Clone, Copy)]
pub struct Clause {
    name: &'static str,
    test: Predicate,
}

impl Clause {
    /// Creates a clause from a name and a predicate.
    #[must_use]
    pub const fn new(name: &'static str, test: Predicate) -> Self {
        Self { name, test }
    }

    /// Returns the clause name reported in allow decisions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the clause.
    #[must_use]
    pub fn verdict(&self, actor: &Actor, facts: &RelationshipFacts) -> Verdict {
        Verdict::from_bool((self.test)(actor, facts))
    }
}

impl Debug for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clause").field(&self.name).finish()
    }
}

/// Evaluates the disjunction of `clauses`.
///
/// Every clause is evaluated, so the verdict does not depend on their order.
/// When several clauses allow, the first one listed is reported.
#[must_use]
pub fn any_of(clauses: &[Clause], actor: &Actor, facts: &RelationshipFacts) -> PolicyDecision {
    let verdicts: Vec<Verdict> = clauses
        .iter()
        .map(|clause| clause.verdict(actor, facts))
        .collect();
    let granted = clauses
        .iter()
        .zip(&verdicts)
        .find_map(|(clause, verdict)| verdict.is_allow().then_some(clause.name()));
    match (Verdict::any(verdicts), granted) {
        (Verdict::Allow, Some(name)) => PolicyDecision::allow(name),
        _ => PolicyDecision::deny(),
    }
}

/// Collection of per-action predicates for one resource kind.
pub trait RuleSet: Debug + Send + Sync {
    /// Resource kind this rule set is registered under.
    fn kind(&self) -> ResourceKind;

    /// Allow clauses for `action`. An empty slice denies the action.
    fn clauses(&self, action: Action) -> &[Clause];

    /// Decides `action` for `actor` given the resolved facts.
    fn decide(&self, actor: &Actor, action: Action, facts: &RelationshipFacts) -> PolicyDecision {
        any_of(self.clauses(action), actor, facts)
    }
}
