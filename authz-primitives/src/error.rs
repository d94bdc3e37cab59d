//! Shared error definitions for identity primitives.

use thiserror::Error;
use uuid::Error as UuidError;

use crate::Role;

/// Result alias used throughout the authorization workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing identity records.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided identifier could not be parsed.
    #[error("invalid identifier: {source}")]
    InvalidId {
        /// Source parsing error from the UUID library.
        #[from]
        source: UuidError,
    },

    /// Role and affiliation fields disagree.
    #[error("invalid affiliation for role `{role}`: {reason}")]
    InvalidAffiliation {
        /// Role the record was constructed with.
        role: Role,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Role name did not match any known role.
    #[error("unknown role `{0}`")]
    UnknownRole(String),

    /// Action name did not match any known action.
    #[error("unknown action `{0}`")]
    UnknownAction(String),

    /// Resource type name did not match any known resource kind.
    #[error("unknown resource kind `{0}`")]
    UnknownResourceKind(String),
}

impl Error {
    pub(crate) fn affiliation(role: Role, reason: impl Into<String>) -> Self {
        Self::InvalidAffiliation {
            role,
            reason: reason.into(),
        }
    }
}
