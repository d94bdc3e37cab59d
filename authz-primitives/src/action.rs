//! Actions an actor can request on a resource.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A controller-level operation checked by the policy engine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read a single record.
    Show,
    /// Open the edit form for a record.
    Edit,
    /// Persist changes to a record.
    Update,
    /// Delete a record.
    Destroy,
    /// Land on the record owner's home page.
    Home,
    /// Open the form for editing one's own profile.
    EditProfile,
    /// Persist changes to one's own profile.
    UpdateProfile,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Show,
        Self::Edit,
        Self::Update,
        Self::Destroy,
        Self::Home,
        Self::EditProfile,
        Self::UpdateProfile,
    ];

    /// Returns the snake_case name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Edit => "edit",
            Self::Update => "update",
            Self::Destroy => "destroy",
            Self::Home => "home",
            Self::EditProfile => "edit_profile",
            Self::UpdateProfile => "update_profile",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Accepts the snake_case name, optionally in predicate form (`edit?`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix('?').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| Error::UnknownAction(s.to_owned()))
    }
}
