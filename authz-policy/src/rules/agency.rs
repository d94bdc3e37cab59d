//! Rules guarding agency records.

use authz_primitives::{Action, Actor, ResourceKind, Role};

use super::{Clause, RuleSet};
use crate::resolver::RelationshipFacts;

const ADMIN_OF_AGENCY: Clause = Clause::new("agency_admin_of_same_agency", admin_of_agency);

static ADMIN_ONLY: [Clause; 1] = [ADMIN_OF_AGENCY];

/// Access rules for [`Agency`](authz_primitives::Agency) targets.
///
/// Only an admin of the agency itself may view, edit, or land on its home
/// page. Agencies are never destroyed through the application, and profile
/// actions do not apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgencyPolicy;

impl RuleSet for AgencyPolicy {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Agency
    }

    fn clauses(&self, action: Action) -> &[Clause] {
        match action {
            Action::Show | Action::Edit | Action::Update | Action::Home => &ADMIN_ONLY,
            Action::Destroy | Action::EditProfile | Action::UpdateProfile => &[],
        }
    }
}

fn admin_of_agency(actor: &Actor, facts: &RelationshipFacts) -> bool {
    actor.role() == Role::AgencyAdmin && facts.same_agency
}

#[cfg(test)]
mod tests {
    use authz_primitives::{Agency, AgencyId, PersonId};

    use super::*;

    #[test]
    fn only_own_admin_may_edit() {
        let agency = Agency::new(AgencyId::random(), "Metplus");
        let admin = Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, agency.id()).unwrap();
        let foreign =
            Actor::agency_staff(PersonId::random(), Role::AgencyAdmin, AgencyId::random()).unwrap();
        let manager =
            Actor::agency_staff(PersonId::random(), Role::CaseManager, agency.id()).unwrap();

        let decide = |actor: &Actor, action| {
            let facts = RelationshipFacts::resolve(actor, &agency);
            AgencyPolicy.decide(actor, action, &facts).is_allow()
        };

        assert!(decide(&admin, Action::Show));
        assert!(decide(&admin, Action::Edit));
        assert!(decide(&admin, Action::Update));
        assert!(decide(&admin, Action::Home));
        assert!(!decide(&admin, Action::Destroy));
        assert!(!decide(&admin, Action::EditProfile));
        assert!(!decide(&admin, Action::UpdateProfile));
        assert!(!decide(&foreign, Action::Show));
        assert!(!decide(&foreign, Action::Home));
        assert!(!decide(&foreign, Action::Edit));
        assert!(!decide(&manager, Action::Show));
    }
}
