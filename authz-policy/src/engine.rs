//! Policy evaluator and rule set registry.

use std::collections::HashMap;
use std::sync::Arc;

use authz_config::AuthzConfig;
use authz_primitives::{Action, Actor, ResourceKind};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::contracts::{PolicyRequest, Resource};
use crate::decision::PolicyDecision;
use crate::resolver::RelationshipFacts;
use crate::rules::{AgencyPolicy, CompanyPersonPolicy, RuleSet};

/// Errors surfaced by the evaluator.
///
/// A denied check is not an error; it is an `Ok(false)` verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No rule set is registered, or available, for the target's resource
    /// kind. This is a wiring fault, not an authorization outcome.
    #[error("no policy registered for resource type `{kind}`")]
    UnregisteredResourceType {
        /// Resource kind that had no rule set.
        kind: ResourceKind,
    },
}

/// Result alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Stateless evaluator dispatching checks to per-resource rule sets.
///
/// Register rule sets during startup, then share the evaluator (for example
/// behind an [`Arc`]). Evaluation takes `&self`, holds no locks, and performs
/// no I/O, so any number of threads may evaluate concurrently.
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    policies: HashMap<ResourceKind, Arc<dyn RuleSet>>,
}

impl PolicyEvaluator {
    /// Creates an evaluator with no rule sets registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the built-in company person and agency rules.
    #[must_use]
    pub fn with_default_policies() -> Self {
        let mut evaluator = Self::new();
        evaluator.register_policy(CompanyPersonPolicy);
        evaluator.register_policy(AgencyPolicy);
        evaluator
    }

    /// Creates an evaluator with the built-in rule sets named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnregisteredResourceType`] when the
    /// configuration names a resource kind with no built-in rule set.
    pub fn from_config(config: &AuthzConfig) -> PolicyResult<Self> {
        let mut evaluator = Self::new();
        for &kind in config.policies() {
            let rule_set =
                builtin_rule_set(kind).ok_or(PolicyError::UnregisteredResourceType { kind })?;
            evaluator.register_shared(rule_set);
        }
        Ok(evaluator)
    }

    /// Registers `rule_set` under its resource kind.
    ///
    /// Returns the rule set it replaced, if any.
    pub fn register_policy<R>(&mut self, rule_set: R) -> Option<Arc<dyn RuleSet>>
    where
        R: RuleSet + 'static,
    {
        self.register_shared(Arc::new(rule_set))
    }

    /// Registers an already shared rule set under its resource kind.
    ///
    /// Returns the rule set it replaced, if any.
    pub fn register_shared(&mut self, rule_set: Arc<dyn RuleSet>) -> Option<Arc<dyn RuleSet>> {
        let kind = rule_set.kind();
        let previous = self.policies.insert(kind, rule_set);
        if previous.is_some() {
            warn!(resource = %kind, "replaced previously registered policy");
        } else {
            debug!(resource = %kind, "registered policy");
        }
        previous
    }

    /// Returns `true` when a rule set is registered for `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: ResourceKind) -> bool {
        self.policies.contains_key(&kind)
    }

    /// Returns the registered resource kinds in a stable order.
    #[must_use]
    pub fn registered_kinds(&self) -> Vec<ResourceKind> {
        let mut kinds: Vec<_> = self.policies.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Evaluates a check and returns the full decision.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnregisteredResourceType`] if no rule set is
    /// registered for the target's resource kind.
    pub fn evaluate<'a>(
        &self,
        actor: &Actor,
        action: Action,
        target: impl Into<Resource<'a>>,
    ) -> PolicyResult<PolicyDecision> {
        let target = target.into();
        let kind = target.kind();
        let Some(rule_set) = self.policies.get(&kind) else {
            error!(resource = %kind, %action, "authorization requested for unregistered resource type");
            return Err(PolicyError::UnregisteredResourceType { kind });
        };

        let facts = RelationshipFacts::resolve(actor, target.scope());
        let decision = rule_set.decide(actor, action, &facts);
        debug!(
            resource = %kind,
            %action,
            role = %actor.role(),
            verdict = ?decision.verdict(),
            clause = decision.clause().unwrap_or("none"),
            "policy evaluated"
        );
        Ok(decision)
    }

    /// Returns whether `actor` may perform `action` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnregisteredResourceType`] if no rule set is
    /// registered for the target's resource kind.
    pub fn authorize<'a>(
        &self,
        actor: &Actor,
        action: Action,
        target: impl Into<Resource<'a>>,
    ) -> PolicyResult<bool> {
        self.evaluate(actor, action, target)
            .map(|decision| decision.is_allow())
    }

    /// Same as [`PolicyEvaluator::authorize`] for a prepared request.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::UnregisteredResourceType`] if no rule set is
    /// registered for the target's resource kind.
    pub fn authorize_request(&self, request: &PolicyRequest<'_>) -> PolicyResult<bool> {
        self.authorize(request.actor(), request.action(), request.target())
    }
}

fn builtin_rule_set(kind: ResourceKind) -> Option<Arc<dyn RuleSet>> {
    match kind {
        ResourceKind::CompanyPerson => Some(Arc::new(CompanyPersonPolicy)),
        ResourceKind::Agency => Some(Arc::new(AgencyPolicy)),
        ResourceKind::Job => None,
    }
}
