//! Relationship-aware authorization for staffing and placement platforms.
//!
//! Depend on this crate rather than the individual `authz-*` crates. Components
//! sit behind feature flags so services can leave out what they do not use.
//!
//! ```
//! use staffing_authz::policy::PolicyEvaluator;
//! use staffing_authz::primitives::{
//!     Action, Actor, AgencyId, Company, CompanyId, CompanyPerson, PersonId, Role,
//! };
//!
//! let metplus = AgencyId::random();
//! let company = Company::new(CompanyId::random(), "Widgets", [metplus]);
//! let employee = Actor::company_staff(PersonId::random(), Role::CompanyPerson, company.id())?;
//! let target = CompanyPerson::new(employee, company)?;
//! let admin = Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, metplus)?;
//!
//! let evaluator = PolicyEvaluator::with_default_policies();
//! assert!(evaluator.authorize(&admin, Action::Edit, &target)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

/// Re-export identity primitives for convenience.
pub use authz_primitives as primitives;

/// Policy evaluation (enabled by `policy` feature).
#[cfg(feature = "policy")]
pub use authz_policy as policy;

/// Configuration loading (enabled by `config` feature).
#[cfg(feature = "config")]
pub use authz_config as config;

/// Logging bootstrap (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use authz_telemetry as telemetry;
