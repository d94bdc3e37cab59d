//! Prints who may do what to a sample record.
//!
//! Metplus serves Widgets; another agency serves Bayer-Raynor. Every role is
//! played by someone affiliated with Metplus or Widgets, so the matrix shows
//! how relationships, not just roles, drive each verdict.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use staffing_authz::config::AuthzConfig;
use staffing_authz::policy::{PolicyError, PolicyEvaluator, Resource};
use staffing_authz::primitives::{
    Action, Actor, Agency, AgencyId, Company, CompanyId, CompanyPerson, Job, JobId, PersonId,
    Role, RoleSide,
};
use staffing_authz::telemetry::init_tracing;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(about = "Print the role by action verdict matrix for a sample target")]
struct Args {
    /// JSON configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configured one.
    #[arg(long)]
    log: Option<String>,

    /// Record the actions are checked against.
    #[arg(long, value_enum, default_value_t = Target::Widgets)]
    target: Target,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    /// A company person at Widgets, served by Metplus.
    Widgets,
    /// A company person at Bayer-Raynor, served by another agency.
    BayerRaynor,
    /// The Metplus agency itself.
    Metplus,
    /// A job posted by Widgets.
    Job,
}

struct Fixture {
    metplus: Agency,
    widgets: Company,
    widgets_person: CompanyPerson,
    bayer_person: CompanyPerson,
    job: Job,
}

impl Fixture {
    fn build() -> Result<Self> {
        let metplus = Agency::new(AgencyId::random(), "Metplus");
        let elsewhere = Agency::new(AgencyId::random(), "Elsewhere");
        let widgets = Company::new(CompanyId::random(), "Widgets", [metplus.id()]);
        let bayer = Company::new(CompanyId::random(), "Bayer-Raynor", [elsewhere.id()]);

        let widgets_person = company_person(&widgets)?;
        let bayer_person = company_person(&bayer)?;
        let job = Job::new(JobId::random(), "Welder", widgets.clone())
            .with_poster(widgets_person.id());

        Ok(Self {
            metplus,
            widgets,
            widgets_person,
            bayer_person,
            job,
        })
    }

    fn target(&self, target: Target) -> Resource<'_> {
        match target {
            Target::Widgets => Resource::from(&self.widgets_person),
            Target::BayerRaynor => Resource::from(&self.bayer_person),
            Target::Metplus => Resource::from(&self.metplus),
            Target::Job => Resource::from(&self.job),
        }
    }

    /// One actor per role, affiliated with Metplus or Widgets.
    fn actors(&self) -> Result<Vec<Actor>> {
        Role::ALL
            .into_iter()
            .map(|role| -> Result<Actor> {
                let actor = match role.side() {
                    RoleSide::Agency => {
                        Actor::agency_staff(PersonId::random(), role, self.metplus.id())?
                    }
                    RoleSide::Company => {
                        Actor::company_staff(PersonId::random(), role, self.widgets.id())?
                    }
                    RoleSide::Unaffiliated => Actor::job_seeker(PersonId::random()),
                };
                Ok(actor)
            })
            .collect()
    }
}

fn company_person(company: &Company) -> Result<CompanyPerson> {
    let person = Actor::company_staff(PersonId::random(), Role::CompanyPerson, company.id())?;
    Ok(CompanyPerson::new(person, company.clone())?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AuthzConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AuthzConfig::from_env()?,
    };
    let config = config.with_log_override(args.log.clone())?;
    init_tracing(config.telemetry())?;

    let evaluator = PolicyEvaluator::from_config(&config)?;
    info!(policies = ?evaluator.registered_kinds(), "evaluator ready");

    let fixture = Fixture::build()?;
    let target = fixture.target(args.target);
    info!(sample = ?args.target, resource = %target.kind(), "checking every role");

    print!("{:<16}", "role");
    for action in Action::ALL {
        print!("{:<16}", action.as_str());
    }
    println!();

    for actor in fixture.actors()? {
        print!("{:<16}", actor.role().as_str());
        for action in Action::ALL {
            let cell = match evaluator.evaluate(&actor, action, target) {
                Ok(decision) if decision.is_allow() => "allow",
                Ok(_) => "deny",
                Err(PolicyError::UnregisteredResourceType { kind }) => {
                    warn!(resource = %kind, "no policy for this target");
                    "unregistered"
                }
            };
            print!("{cell:<16}");
        }
        println!();
    }

    Ok(())
}
