//! Target and request contracts for policy evaluation.

use authz_primitives::{Action, Actor, Agency, CompanyPerson, Job, OrgScope, ResourceKind};

/// Borrowed target of an authorization check, tagged by resource type.
#[derive(Debug, Clone, Copy)]
pub enum Resource<'a> {
    /// A person employed by a company.
    CompanyPerson(&'a CompanyPerson),
    /// A staffing agency.
    Agency(&'a Agency),
    /// A job posted by a company.
    Job(&'a Job),
}

impl Resource<'_> {
    /// Returns the registry tag for this target.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::CompanyPerson(_) => ResourceKind::CompanyPerson,
            Self::Agency(_) => ResourceKind::Agency,
            Self::Job(_) => ResourceKind::Job,
        }
    }

    /// Returns the organizational scope consulted by the resolver.
    #[must_use]
    pub fn scope(&self) -> &dyn OrgScope {
        match self {
            Self::CompanyPerson(person) => *person,
            Self::Agency(agency) => *agency,
            Self::Job(job) => *job,
        }
    }
}

impl<'a> From<&'a CompanyPerson> for Resource<'a> {
    fn from(value: &'a CompanyPerson) -> Self {
        Self::CompanyPerson(value)
    }
}

impl<'a> From<&'a Agency> for Resource<'a> {
    fn from(value: &'a Agency) -> Self {
        Self::Agency(value)
    }
}

impl<'a> From<&'a Job> for Resource<'a> {
    fn from(value: &'a Job) -> Self {
        Self::Job(value)
    }
}

/// Full request sent to the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct PolicyRequest<'a> {
    actor: &'a Actor,
    action: Action,
    target: Resource<'a>,
}

impl<'a> PolicyRequest<'a> {
    /// Creates a request for `actor` to perform `action` on `target`.
    #[must_use]
    pub fn new(actor: &'a Actor, action: Action, target: impl Into<Resource<'a>>) -> Self {
        Self {
            actor,
            action,
            target: target.into(),
        }
    }

    /// Returns the requesting actor.
    #[must_use]
    pub const fn actor(&self) -> &'a Actor {
        self.actor
    }

    /// Returns the requested action.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Returns the target resource.
    #[must_use]
    pub const fn target(&self) -> Resource<'a> {
        self.target
    }
}
