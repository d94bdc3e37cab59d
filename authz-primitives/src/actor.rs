//! Authenticated actors.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::{AgencyId, CompanyId, PersonId, Role, RoleSide};

/// A verified person acting on the system.
///
/// Affiliation fields are populated only for the roles that require them:
/// agency-side roles carry an agency, company-side roles carry a company, and
/// job seekers carry neither. Deserialized values are validated the same way
/// as constructed ones.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawActor")]
pub struct Actor {
    id: PersonId,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agency: Option<AgencyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<CompanyId>,
}

impl Actor {
    /// Creates an actor after checking that the affiliations match the role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAffiliation`] when a required affiliation is
    /// missing or an affiliation the role cannot hold is present.
    pub fn new(
        id: PersonId,
        role: Role,
        agency: Option<AgencyId>,
        company: Option<CompanyId>,
    ) -> Result<Self> {
        match role.side() {
            RoleSide::Agency => {
                if agency.is_none() {
                    return Err(Error::affiliation(role, "agency roles require an agency"));
                }
                if company.is_some() {
                    return Err(Error::affiliation(role, "agency roles cannot belong to a company"));
                }
            }
            RoleSide::Company => {
                if company.is_none() {
                    return Err(Error::affiliation(role, "company roles require a company"));
                }
                if agency.is_some() {
                    return Err(Error::affiliation(role, "company roles cannot belong to an agency"));
                }
            }
            RoleSide::Unaffiliated => {
                if agency.is_some() || company.is_some() {
                    return Err(Error::affiliation(role, "role carries no affiliation"));
                }
            }
        }

        Ok(Self {
            id,
            role,
            agency,
            company,
        })
    }

    /// Creates an agency-side actor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAffiliation`] if `role` is not an agency role.
    pub fn agency_staff(id: PersonId, role: Role, agency: AgencyId) -> Result<Self> {
        Self::new(id, role, Some(agency), None)
    }

    /// Creates a company-side actor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAffiliation`] if `role` is not a company role.
    pub fn company_staff(id: PersonId, role: Role, company: CompanyId) -> Result<Self> {
        Self::new(id, role, None, Some(company))
    }

    /// Creates an unaffiliated job seeker.
    #[must_use]
    pub const fn job_seeker(id: PersonId) -> Self {
        Self {
            id,
            role: Role::JobSeeker,
            agency: None,
            company: None,
        }
    }

    /// Returns the identifier of the backing person record.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the agency the actor works for, if any.
    #[must_use]
    pub const fn agency(&self) -> Option<AgencyId> {
        self.agency
    }

    /// Returns the company the actor works for, if any.
    #[must_use]
    pub const fn company(&self) -> Option<CompanyId> {
        self.company
    }
}

#[derive(Deserialize)]
struct RawActor {
    id: PersonId,
    role: Role,
    #[serde(default)]
    agency: Option<AgencyId>,
    #[serde(default)]
    company: Option<CompanyId>,
}

impl TryFrom<RawActor> for Actor {
    type Error = Error;

    fn try_from(raw: RawActor) -> Result<Self> {
        Self::new(raw.id, raw.role, raw.agency, raw.company)
    }
}
