//! Agencies, companies, and the records they own.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{Actor, AgencyId, CompanyId, JobId, OrgScope, PersonId, RoleSide};

/// A staffing agency.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    id: AgencyId,
    name: String,
}

impl Agency {
    /// Creates an agency record.
    #[must_use]
    pub fn new(id: AgencyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the agency identifier.
    #[must_use]
    pub const fn id(&self) -> AgencyId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl OrgScope for Agency {
    fn company(&self) -> Option<&Company> {
        None
    }

    fn agency(&self) -> Option<AgencyId> {
        Some(self.id)
    }
}

/// An employer served by one or more agencies.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    #[serde(default)]
    agencies: BTreeSet<AgencyId>,
}

impl Company {
    /// Creates a company served by the given agencies.
    pub fn new<I>(id: CompanyId, name: impl Into<String>, agencies: I) -> Self
    where
        I: IntoIterator<Item = AgencyId>,
    {
        Self {
            id,
            name: name.into(),
            agencies: agencies.into_iter().collect(),
        }
    }

    /// Returns the company identifier.
    #[must_use]
    pub const fn id(&self) -> CompanyId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agencies serving this company.
    #[must_use]
    pub fn agencies(&self) -> &BTreeSet<AgencyId> {
        &self.agencies
    }

    /// Returns `true` when `agency` is listed among the company's agencies.
    #[must_use]
    pub fn is_served_by(&self, agency: AgencyId) -> bool {
        self.agencies.contains(&agency)
    }
}

/// A person employed by a company.
///
/// The embedded actor is the person's own identity, so the same record can be
/// the subject and the object of a check.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CompanyPerson {
    person: Actor,
    company: Company,
}

impl CompanyPerson {
    /// Pairs a company-side actor with its hydrated company.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAffiliation`] when the actor does not hold a
    /// company role or works for a different company.
    pub fn new(person: Actor, company: Company) -> Result<Self> {
        if person.role().side() != RoleSide::Company {
            return Err(Error::affiliation(
                person.role(),
                "company people must hold a company role",
            ));
        }
        if person.company() != Some(company.id()) {
            return Err(Error::affiliation(
                person.role(),
                format!("person does not belong to company `{}`", company.name()),
            ));
        }
        Ok(Self { person, company })
    }

    /// Returns the person's identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.person.id()
    }

    /// Returns the person's own actor identity.
    #[must_use]
    pub const fn as_actor(&self) -> &Actor {
        &self.person
    }

    /// Returns the owning company.
    #[must_use]
    pub const fn company(&self) -> &Company {
        &self.company
    }
}

impl OrgScope for CompanyPerson {
    fn company(&self) -> Option<&Company> {
        Some(&self.company)
    }

    fn person(&self) -> Option<PersonId> {
        Some(self.person.id())
    }
}

/// A job posted by a company.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    title: String,
    company: Company,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poster: Option<PersonId>,
}

impl Job {
    /// Creates a job owned by `company`.
    #[must_use]
    pub fn new(id: JobId, title: impl Into<String>, company: Company) -> Self {
        Self {
            id,
            title: title.into(),
            company,
            poster: None,
        }
    }

    /// Records the company person who posted the job.
    #[must_use]
    pub fn with_poster(mut self, poster: PersonId) -> Self {
        self.poster = Some(poster);
        self
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the person who posted the job, if recorded.
    #[must_use]
    pub const fn poster(&self) -> Option<PersonId> {
        self.poster
    }
}

impl OrgScope for Job {
    fn company(&self) -> Option<&Company> {
        Some(&self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn company_tracks_serving_agencies() {
        let metplus = AgencyId::random();
        let other = AgencyId::random();
        let company = Company::new(CompanyId::random(), "Widgets", [metplus]);

        assert!(company.is_served_by(metplus));
        assert!(!company.is_served_by(other));
    }

    #[test]
    fn company_person_requires_matching_company() {
        let company = Company::new(CompanyId::random(), "Widgets", []);
        let stranger =
            Actor::company_staff(PersonId::random(), Role::CompanyAdmin, CompanyId::random())
                .unwrap();

        let err = CompanyPerson::new(stranger, company.clone()).expect_err("wrong company");
        assert!(matches!(err, Error::InvalidAffiliation { .. }));

        let member =
            Actor::company_staff(PersonId::random(), Role::CompanyPerson, company.id()).unwrap();
        let record = CompanyPerson::new(member.clone(), company).unwrap();
        assert_eq!(record.id(), member.id());
        assert_eq!(OrgScope::person(&record), Some(member.id()));
    }

    #[test]
    fn company_person_rejects_agency_staff() {
        let company = Company::new(CompanyId::random(), "Widgets", []);
        let admin =
            Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, AgencyId::random()).unwrap();

        assert!(CompanyPerson::new(admin, company).is_err());
    }

    #[test]
    fn job_scope_is_its_company() {
        let company = Company::new(CompanyId::random(), "Widgets", []);
        let poster = PersonId::random();
        let job = Job::new(JobId::random(), "Welder", company.clone());
        assert_eq!(job.poster(), None);

        let job = job.with_poster(poster);
        assert_eq!(job.poster(), Some(poster));
        assert_eq!(job.title(), "Welder");
        assert_eq!(OrgScope::company(&job), Some(&company));
        assert!(OrgScope::person(&job).is_none());
    }

    #[test]
    fn agency_scope_exposes_only_agency() {
        let agency = Agency::new(AgencyId::random(), "Metplus");
        assert_eq!(OrgScope::agency(&agency), Some(agency.id()));
        assert!(OrgScope::company(&agency).is_none());
        assert!(OrgScope::person(&agency).is_none());
    }
}
