//! Identity model shared by the staffing authorization engine.
//!
//! Actors, the organizations they belong to, and the resources they act on are
//! hydrated by the caller's persistence layer and handed to the policy engine
//! as plain values.

#![warn(missing_docs, clippy::pedantic)]

mod action;
mod actor;
mod error;
mod ids;
mod org;
mod resource;
mod role;

/// Operations checked by the policy engine.
pub use action::Action;
/// Authenticated actors and their organizational affiliation.
pub use actor::Actor;
/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Unique identifiers for persisted records.
pub use ids::{AgencyId, CompanyId, JobId, PersonId};
/// Organizations and the records they own.
pub use org::{Agency, Company, CompanyPerson, Job};
/// Resource type tags and organizational scope.
pub use resource::{OrgScope, ResourceKind};
/// Role variants an actor can hold.
pub use role::{Role, RoleSide};
