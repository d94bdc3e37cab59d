//! Rules guarding company person records.

use authz_primitives::{Action, Actor, ResourceKind, Role};

use super::{Clause, RuleSet};
use crate::resolver::RelationshipFacts;

const COMPANY_ADMIN_OF_COMPANY: Clause =
    Clause::new("company_admin_of_same_company", company_admin_of_company);
const AGENCY_ADMIN_OF_RELATED_AGENCY: Clause =
    Clause::new("agency_admin_of_related_agency", agency_admin_of_related_agency);
const CASE_MANAGER_OF_RELATED_AGENCY: Clause =
    Clause::new("case_manager_of_related_agency", case_manager_of_related_agency);
const MEMBER_OF_COMPANY: Clause = Clause::new("member_of_same_company", member_of_company);
const OWN_PROFILE: Clause = Clause::new("own_profile", own_profile);

static MANAGE: [Clause; 2] = [COMPANY_ADMIN_OF_COMPANY, AGENCY_ADMIN_OF_RELATED_AGENCY];
static SHOW: [Clause; 3] = [
    COMPANY_ADMIN_OF_COMPANY,
    AGENCY_ADMIN_OF_RELATED_AGENCY,
    CASE_MANAGER_OF_RELATED_AGENCY,
];
static HOME: [Clause; 2] = [AGENCY_ADMIN_OF_RELATED_AGENCY, MEMBER_OF_COMPANY];
static PROFILE: [Clause; 1] = [OWN_PROFILE];

/// Access rules for [`CompanyPerson`](authz_primitives::CompanyPerson) targets.
///
/// | action | allowed when |
/// |---|---|
/// | `edit`, `update`, `destroy` | company admin of the same company, or agency admin of a serving agency |
/// | `show` | any of the above, or case manager of a serving agency |
/// | `home` | agency admin of a serving agency, or company admin/person of the same company |
/// | `edit_profile`, `update_profile` | company admin/person acting on their own record |
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyPersonPolicy;

impl RuleSet for CompanyPersonPolicy {
    fn kind(&self) -> ResourceKind {
        ResourceKind::CompanyPerson
    }

    fn clauses(&self, action: Action) -> &[Clause] {
        match action {
            Action::Edit | Action::Update | Action::Destroy => &MANAGE,
            Action::Show => &SHOW,
            Action::Home => &HOME,
            Action::EditProfile | Action::UpdateProfile => &PROFILE,
        }
    }
}

fn is_company_member(role: Role) -> bool {
    matches!(role, Role::CompanyAdmin | Role::CompanyPerson)
}

fn company_admin_of_company(actor: &Actor, facts: &RelationshipFacts) -> bool {
    actor.role() == Role::CompanyAdmin && facts.same_company
}

fn agency_admin_of_related_agency(actor: &Actor, facts: &RelationshipFacts) -> bool {
    actor.role() == Role::AgencyAdmin && facts.agency_related
}

fn case_manager_of_related_agency(actor: &Actor, facts: &RelationshipFacts) -> bool {
    actor.role() == Role::CaseManager && facts.agency_related
}

fn member_of_company(actor: &Actor, facts: &RelationshipFacts) -> bool {
    is_company_member(actor.role()) && facts.same_company
}

fn own_profile(actor: &Actor, facts: &RelationshipFacts) -> bool {
    is_company_member(actor.role()) && facts.is_self
}
