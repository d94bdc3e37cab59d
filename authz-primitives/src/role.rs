//! Role variants held by actors.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The single role carried by an actor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administers an agency and the companies it serves.
    AgencyAdmin,
    /// Agency staff member who sources jobs from companies.
    JobDeveloper,
    /// Agency staff member who works with job seekers.
    CaseManager,
    /// Agency staff member without a specialised role.
    AgencyPerson,
    /// Administers a single company.
    CompanyAdmin,
    /// Company staff member without administrative rights.
    CompanyPerson,
    /// Company point of contact for agencies.
    CompanyContact,
    /// Individual looking for placement; has no organization.
    JobSeeker,
}

/// Which kind of organization, if any, a role belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoleSide {
    /// Role requires an agency affiliation.
    Agency,
    /// Role requires a company affiliation.
    Company,
    /// Role carries no affiliation.
    Unaffiliated,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::AgencyAdmin,
        Self::JobDeveloper,
        Self::CaseManager,
        Self::AgencyPerson,
        Self::CompanyAdmin,
        Self::CompanyPerson,
        Self::CompanyContact,
        Self::JobSeeker,
    ];

    /// Returns the organization side this role belongs to.
    #[must_use]
    pub const fn side(self) -> RoleSide {
        match self {
            Self::AgencyAdmin | Self::JobDeveloper | Self::CaseManager | Self::AgencyPerson => {
                RoleSide::Agency
            }
            Self::CompanyAdmin | Self::CompanyPerson | Self::CompanyContact => RoleSide::Company,
            Self::JobSeeker => RoleSide::Unaffiliated,
        }
    }

    /// Returns the snake_case name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AgencyAdmin => "agency_admin",
            Self::JobDeveloper => "job_developer",
            Self::CaseManager => "case_manager",
            Self::AgencyPerson => "agency_person",
            Self::CompanyAdmin => "company_admin",
            Self::CompanyPerson => "company_person",
            Self::CompanyContact => "company_contact",
            Self::JobSeeker => "job_seeker",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_owned()))
    }
}
