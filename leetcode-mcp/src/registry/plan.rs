use leetcode_provider::SiteVariant;

/// One of the six registration hooks, in the order they may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationPhase {
    Common,
    Global,
    China,
    AuthenticatedCommon,
    AuthenticatedGlobal,
    AuthenticatedChina,
}

impl RegistrationPhase {
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::AuthenticatedCommon | Self::AuthenticatedGlobal | Self::AuthenticatedChina
        )
    }
}

/// Hooks to run for a site and authentication snapshot.
///
/// Common hooks always precede the site hook, and unauthenticated hooks
/// always precede authenticated ones. Exactly one site-specific hook runs
/// per authentication tier.
pub fn registration_plan(variant: SiteVariant, authenticated: bool) -> Vec<RegistrationPhase> {
    let mut plan = vec![RegistrationPhase::Common];
    plan.push(match variant {
        SiteVariant::Global => RegistrationPhase::Global,
        SiteVariant::China => RegistrationPhase::China,
    });
    if authenticated {
        plan.push(RegistrationPhase::AuthenticatedCommon);
        plan.push(match variant {
            SiteVariant::Global => RegistrationPhase::AuthenticatedGlobal,
            SiteVariant::China => RegistrationPhase::AuthenticatedChina,
        });
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use RegistrationPhase::*;

    #[test]
    fn anonymous_global() {
        assert_eq!(registration_plan(SiteVariant::Global, false), vec![Common, Global]);
    }

    #[test]
    fn anonymous_china() {
        assert_eq!(registration_plan(SiteVariant::China, false), vec![Common, China]);
    }

    #[test]
    fn authenticated_global() {
        assert_eq!(
            registration_plan(SiteVariant::Global, true),
            vec![Common, Global, AuthenticatedCommon, AuthenticatedGlobal]
        );
    }

    #[test]
    fn authenticated_china() {
        assert_eq!(
            registration_plan(SiteVariant::China, true),
            vec![Common, China, AuthenticatedCommon, AuthenticatedChina]
        );
    }

    #[test]
    fn authenticated_plan_extends_anonymous_plan() {
        for variant in [SiteVariant::Global, SiteVariant::China] {
            let anonymous = registration_plan(variant, false);
            let authenticated = registration_plan(variant, true);
            assert_eq!(&authenticated[..anonymous.len()], anonymous.as_slice());
            assert!(authenticated[anonymous.len()..]
                .iter()
                .all(|phase| phase.requires_auth()));
        }
    }
}
