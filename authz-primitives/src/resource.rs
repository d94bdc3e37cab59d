//! Resource type tags and the organizational scope of a target.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AgencyId, Company, Error, PersonId};

/// Discriminates the resource types a policy can be registered for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A person employed by a company.
    CompanyPerson,
    /// A staffing agency.
    Agency,
    /// A job posted by a company.
    Job,
}

impl ResourceKind {
    /// Every resource kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::CompanyPerson, Self::Agency, Self::Job];

    /// Returns the snake_case name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyPerson => "company_person",
            Self::Agency => "agency",
            Self::Job => "job",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownResourceKind(s.to_owned()))
    }
}

/// Organizational facts a target exposes to the relationship resolver.
///
/// Each accessor returns `None` when the notion does not apply to the target.
pub trait OrgScope {
    /// Company that owns the target, with its served-by agency set.
    fn company(&self) -> Option<&Company>;

    /// Agency the target is, or belongs to.
    fn agency(&self) -> Option<AgencyId> {
        None
    }

    /// Person record the target is, when the target can itself act.
    fn person(&self) -> Option<PersonId> {
        None
    }
}
