//! Relationship facts between an actor and a target.
//!
//! Facts are derived from the hydrated records alone. Missing affiliations
//! resolve to `false`; nothing here can fail.

use authz_primitives::{Actor, OrgScope};

/// Boolean organizational facts consumed by rule clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RelationshipFacts {
    /// Actor works for the company that owns the target.
    pub same_company: bool,
    /// Actor's agency serves the company that owns the target.
    pub agency_related: bool,
    /// Actor works for the agency the target is.
    pub same_agency: bool,
    /// Actor and target are the same person record.
    pub is_self: bool,
}

impl RelationshipFacts {
    /// Resolves every fact for `actor` against `target`.
    #[must_use]
    pub fn resolve<T>(actor: &Actor, target: &T) -> Self
    where
        T: OrgScope + ?Sized,
    {
        Self {
            same_company: same_company(actor, target),
            agency_related: agency_related(actor, target),
            same_agency: same_agency(actor, target),
            is_self: is_self(actor, target),
        }
    }
}

/// True iff the actor has a company and it owns the target.
#[must_use]
pub fn same_company<T: OrgScope + ?Sized>(actor: &Actor, target: &T) -> bool {
    match (actor.company(), target.company()) {
        (Some(mine), Some(theirs)) => mine == theirs.id(),
        _ => false,
    }
}

/// True iff the actor has an agency listed among the target company's agencies.
#[must_use]
pub fn agency_related<T: OrgScope + ?Sized>(actor: &Actor, target: &T) -> bool {
    match (actor.agency(), target.company()) {
        (Some(agency), Some(company)) => company.is_served_by(agency),
        _ => false,
    }
}

/// True iff the actor has an agency and the target is, or belongs to, it.
#[must_use]
pub fn same_agency<T: OrgScope + ?Sized>(actor: &Actor, target: &T) -> bool {
    match (actor.agency(), target.agency()) {
        (Some(mine), Some(theirs)) => mine == theirs,
        _ => false,
    }
}

/// True iff the actor is the target's own person record.
#[must_use]
pub fn is_self<T: OrgScope + ?Sized>(actor: &Actor, target: &T) -> bool {
    target.person() == Some(actor.id())
}

#[cfg(test)]
mod tests {
    use authz_primitives::{Agency, AgencyId, Company, CompanyId, CompanyPerson, PersonId, Role};

    use super::*;

    struct Fixture {
        agency: AgencyId,
        company: Company,
        target: CompanyPerson,
    }

    fn fixture() -> Fixture {
        let agency = AgencyId::random();
        let company = Company::new(CompanyId::random(), "Widgets", [agency]);
        let person =
            Actor::company_staff(PersonId::random(), Role::CompanyPerson, company.id()).unwrap();
        let target = CompanyPerson::new(person, company.clone()).unwrap();
        Fixture {
            agency,
            company,
            target,
        }
    }

    #[test]
    fn company_admin_of_owner_is_same_company() {
        let f = fixture();
        let admin =
            Actor::company_staff(PersonId::random(), Role::CompanyAdmin, f.company.id()).unwrap();
        let facts = RelationshipFacts::resolve(&admin, &f.target);

        assert!(facts.same_company);
        assert!(!facts.agency_related);
        assert!(!facts.is_self);
    }

    #[test]
    fn serving_agency_is_related() {
        let f = fixture();
        let staff = Actor::agency_staff(PersonId::random(), Role::JobDeveloper, f.agency).unwrap();
        let outsider =
            Actor::agency_staff(PersonId::random(), Role::JobDeveloper, AgencyId::random())
                .unwrap();

        assert!(RelationshipFacts::resolve(&staff, &f.target).agency_related);
        assert_eq!(
            RelationshipFacts::resolve(&outsider, &f.target),
            RelationshipFacts::default()
        );
    }

    #[test]
    fn person_is_self_only_against_own_record() {
        let f = fixture();
        let own = f.target.as_actor().clone();
        let facts = RelationshipFacts::resolve(&own, &f.target);
        assert!(facts.is_self && facts.same_company);

        let colleague =
            Actor::company_staff(PersonId::random(), Role::CompanyPerson, f.company.id()).unwrap();
        assert!(!RelationshipFacts::resolve(&colleague, &f.target).is_self);
    }

    #[test]
    fn job_seekers_resolve_nothing() {
        let f = fixture();
        let seeker = Actor::job_seeker(PersonId::random());
        assert_eq!(
            RelationshipFacts::resolve(&seeker, &f.target),
            RelationshipFacts::default()
        );
    }

    #[test]
    fn agency_staff_match_their_own_agency() {
        let agency = Agency::new(AgencyId::random(), "Metplus");
        let admin = Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, agency.id()).unwrap();
        let facts = RelationshipFacts::resolve(&admin, &agency);

        assert!(facts.same_agency);
        assert!(!facts.agency_related);
    }
}
