//! Relationship-aware authorization for the staffing platform.
//!
//! A check flows one way: the [`PolicyEvaluator`] resolves
//! [`RelationshipFacts`] between the actor and the target, looks up the
//! [`RuleSet`] registered for the target's resource kind, and returns its
//! verdict. Denial is an ordinary `false`, never an error.

#![warn(missing_docs, clippy::pedantic)]

pub mod contracts;
pub mod decision;
pub mod engine;
pub mod integrations;
pub mod resolver;
pub mod rules;

pub use contracts::{PolicyRequest, Resource};
pub use decision::{PolicyDecision, Verdict};
pub use engine::{PolicyError, PolicyEvaluator, PolicyResult};
pub use integrations::{AccessError, AccessGate, AccessResult, InMemoryRecords, RecordSource};
pub use resolver::RelationshipFacts;
pub use rules::{AgencyPolicy, Clause, CompanyPersonPolicy, RuleSet};
