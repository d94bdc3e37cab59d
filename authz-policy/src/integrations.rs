//! Glue for callers that load records before checking access.
//!
//! The evaluator never fetches anything. Request handlers usually do, so
//! [`AccessGate`] pairs an evaluator with a [`RecordSource`], performs the
//! fetches first, and folds every outcome into one [`AccessError`] that maps
//! cleanly onto response statuses.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use authz_primitives::{Action, Actor, Agency, AgencyId, CompanyPerson, PersonId, ResourceKind};
use thiserror::Error;
use tracing::info;

use crate::contracts::Resource;
use crate::engine::{PolicyError, PolicyEvaluator};

/// Errors produced while gating a request.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The policy denied the action.
    #[error("`{action}` on {resource} is forbidden")]
    Forbidden {
        /// Denied action.
        action: Action,
        /// Kind of the target resource.
        resource: ResourceKind,
    },
    /// The actor or target record does not exist.
    #[error("{record} `{id}` not found")]
    NotFound {
        /// Which record was missing.
        record: &'static str,
        /// Identifier that was looked up.
        id: String,
    },
    /// The evaluator is missing a rule set.
    #[error(transparent)]
    Policy(#[from] PolicyError),
    /// The record source failed.
    #[error("record source failure: {reason}")]
    Source {
        /// Human-readable explanation for logging and operators.
        reason: String,
    },
}

impl AccessError {
    /// Helper to construct source errors from string-like values.
    #[must_use]
    pub fn source_failure(reason: impl Into<String>) -> Self {
        Self::Source {
            reason: reason.into(),
        }
    }

    /// HTTP status an outer web layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::Policy(_) | Self::Source { .. } => 500,
        }
    }

    fn not_found(record: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            record,
            id: id.to_string(),
        }
    }
}

/// Result alias for gated operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Read access to hydrated records, implemented by the caller's persistence.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Loads the actor backed by person `id`.
    async fn actor(&self, id: PersonId) -> AccessResult<Option<Actor>>;

    /// Loads a company person together with its company.
    async fn company_person(&self, id: PersonId) -> AccessResult<Option<CompanyPerson>>;

    /// Loads an agency.
    async fn agency(&self, id: AgencyId) -> AccessResult<Option<Agency>>;
}

/// Fetches records from a [`RecordSource`], then consults the evaluator.
pub struct AccessGate<S>
where
    S: RecordSource + 'static,
{
    evaluator: Arc<PolicyEvaluator>,
    source: Arc<S>,
}

impl<S> Clone for AccessGate<S>
where
    S: RecordSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            evaluator: Arc::clone(&self.evaluator),
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> AccessGate<S>
where
    S: RecordSource + 'static,
{
    /// Creates a gate over the given evaluator and record source.
    #[must_use]
    pub fn new(evaluator: Arc<PolicyEvaluator>, source: Arc<S>) -> Self {
        Self { evaluator, source }
    }

    /// Returns the wrapped evaluator.
    #[must_use]
    pub fn evaluator(&self) -> &PolicyEvaluator {
        &self.evaluator
    }

    /// Checks already loaded records.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Forbidden`] when the policy denies the action and
    /// [`AccessError::Policy`] when no rule set covers the target.
    pub fn check<'a>(
        &self,
        actor: &Actor,
        action: Action,
        target: impl Into<Resource<'a>>,
    ) -> AccessResult<()> {
        let target = target.into();
        if self.evaluator.authorize(actor, action, target)? {
            Ok(())
        } else {
            info!(actor = %actor.id(), role = %actor.role(), %action, resource = %target.kind(), "access forbidden");
            Err(AccessError::Forbidden {
                action,
                resource: target.kind(),
            })
        }
    }

    /// Loads the actor and company person, then checks `action`.
    ///
    /// Returns the loaded target so the caller can go on to act on it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFound`] for missing records, otherwise the
    /// same errors as [`AccessGate::check`].
    pub async fn company_person(
        &self,
        actor_id: PersonId,
        action: Action,
        target_id: PersonId,
    ) -> AccessResult<CompanyPerson> {
        let actor = self.load_actor(actor_id).await?;
        let target = self
            .source
            .company_person(target_id)
            .await?
            .ok_or_else(|| AccessError::not_found("company person", target_id))?;
        self.check(&actor, action, &target)?;
        Ok(target)
    }

    /// Loads the actor and agency, then checks `action`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFound`] for missing records, otherwise the
    /// same errors as [`AccessGate::check`].
    pub async fn agency(
        &self,
        actor_id: PersonId,
        action: Action,
        agency_id: AgencyId,
    ) -> AccessResult<Agency> {
        let actor = self.load_actor(actor_id).await?;
        let agency = self
            .source
            .agency(agency_id)
            .await?
            .ok_or_else(|| AccessError::not_found("agency", agency_id))?;
        self.check(&actor, action, &agency)?;
        Ok(agency)
    }

    async fn load_actor(&self, id: PersonId) -> AccessResult<Actor> {
        self.source
            .actor(id)
            .await?
            .ok_or_else(|| AccessError::not_found("actor", id))
    }
}

/// Record source backed by in-process maps. Intended for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecords {
    actors: HashMap<PersonId, Actor>,
    company_people: HashMap<PersonId, CompanyPerson>,
    agencies: HashMap<AgencyId, Agency>,
}

impl InMemoryRecords {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an actor.
    pub fn insert_actor(&mut self, actor: Actor) {
        self.actors.insert(actor.id(), actor);
    }

    /// Stores a company person and its actor identity.
    pub fn insert_company_person(&mut self, person: CompanyPerson) {
        self.insert_actor(person.as_actor().clone());
        self.company_people.insert(person.id(), person);
    }

    /// Stores an agency.
    pub fn insert_agency(&mut self, agency: Agency) {
        self.agencies.insert(agency.id(), agency);
    }
}

#[async_trait]
impl RecordSource for InMemoryRecords {
    async fn actor(&self, id: PersonId) -> AccessResult<Option<Actor>> {
        Ok(self.actors.get(&id).cloned())
    }

    async fn company_person(&self, id: PersonId) -> AccessResult<Option<CompanyPerson>> {
        Ok(self.company_people.get(&id).cloned())
    }

    async fn agency(&self, id: AgencyId) -> AccessResult<Option<Agency>> {
        Ok(self.agencies.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use authz_primitives::{Company, CompanyId, Role};

    use super::*;

    struct Setup {
        gate: AccessGate<InMemoryRecords>,
        admin: PersonId,
        member: PersonId,
        seeker: PersonId,
        agency: AgencyId,
    }

    fn setup() -> Setup {
        let agency = Agency::new(AgencyId::random(), "Metplus");
        let company = Company::new(CompanyId::random(), "Widgets", [agency.id()]);
        let admin = Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, agency.id()).unwrap();
        let member = CompanyPerson::new(
            Actor::company_staff(PersonId::random(), Role::CompanyPerson, company.id()).unwrap(),
            company,
        )
        .unwrap();
        let seeker = Actor::job_seeker(PersonId::random());

        let ids = (admin.id(), member.id(), seeker.id(), agency.id());
        let mut records = InMemoryRecords::new();
        records.insert_actor(admin);
        records.insert_actor(seeker);
        records.insert_company_person(member);
        records.insert_agency(agency);

        Setup {
            gate: AccessGate::new(
                Arc::new(PolicyEvaluator::with_default_policies()),
                Arc::new(records),
            ),
            admin: ids.0,
            member: ids.1,
            seeker: ids.2,
            agency: ids.3,
        }
    }

    #[tokio::test]
    async fn allowed_checks_return_the_target() {
        let s = setup();
        let target = s
            .gate
            .company_person(s.admin, Action::Edit, s.member)
            .await
            .unwrap();
        assert_eq!(target.id(), s.member);

        let agency = s.gate.agency(s.admin, Action::Update, s.agency).await.unwrap();
        assert_eq!(agency.name(), "Metplus");
    }

    #[tokio::test]
    async fn denied_checks_are_forbidden() {
        let s = setup();
        let err = s
            .gate
            .company_person(s.seeker, Action::Show, s.member)
            .await
            .expect_err("seeker denied");
        assert!(matches!(
            err,
            AccessError::Forbidden {
                action: Action::Show,
                resource: ResourceKind::CompanyPerson
            }
        ));
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn missing_records_are_not_found() {
        let s = setup();
        let err = s
            .gate
            .company_person(PersonId::random(), Action::Show, s.member)
            .await
            .expect_err("unknown actor");
        assert!(matches!(err, AccessError::NotFound { record: "actor", .. }));

        let err = s
            .gate
            .agency(s.admin, Action::Show, AgencyId::random())
            .await
            .expect_err("unknown agency");
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn unregistered_policies_surface_as_server_errors() {
        let s = setup();
        let gate = AccessGate::new(Arc::new(PolicyEvaluator::new()), Arc::clone(&s.gate.source));
        let err = gate
            .agency(s.admin, Action::Show, s.agency)
            .await
            .expect_err("no policies");
        assert!(matches!(err, AccessError::Policy(_)));
        assert_eq!(err.status_code(), 500);
        assert!(gate.evaluator().registered_kinds().is_empty());
        assert!(s.gate.evaluator().is_registered(ResourceKind::Agency));
    }

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn actor(&self, _id: PersonId) -> AccessResult<Option<Actor>> {
            Err(AccessError::source_failure("connection refused"))
        }

        async fn company_person(&self, _id: PersonId) -> AccessResult<Option<CompanyPerson>> {
            Ok(None)
        }

        async fn agency(&self, _id: AgencyId) -> AccessResult<Option<Agency>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn source_failures_propagate() {
        let gate = AccessGate::new(
            Arc::new(PolicyEvaluator::with_default_policies()),
            Arc::new(FailingSource),
        );
        let err = gate
            .agency(PersonId::random(), Action::Show, AgencyId::random())
            .await
            .expect_err("source down");
        assert!(matches!(err, AccessError::Source { .. }));
    }
}
