//! Access guard integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_allowed, assert_denied};
    use crate::common::fixtures::guard_for;
    use crate::common::{SessionFactory, StaticSessionProvider};
    use tenant_authz::{AccessRequirement, DenialReason, Permission, Role};

    #[tokio::test]
    async fn test_signed_out_user_is_denied() {
        let guard = guard_for(StaticSessionProvider::signed_out());
        let decision = guard.check(&AccessRequirement::new()).await;
        assert_denied(&decision, DenialReason::Unauthenticated);
    }

    #[tokio::test]
    async fn test_super_admin_dashboard() {
        let guard = guard_for(StaticSessionProvider::signed_in(SessionFactory::super_admin()));
        let requirement = AccessRequirement::new()
            .system_admin()
            .require(Permission::TenantCreate);

        assert_allowed(&guard.check(&requirement).await);
    }

    #[tokio::test]
    async fn test_tenant_admin_cannot_open_dashboard() {
        let guard = guard_for(StaticSessionProvider::signed_in(SessionFactory::tenant_admin("t1")));
        let decision = guard.check(&AccessRequirement::new().system_admin()).await;
        assert_denied(&decision, DenialReason::InsufficientRole);
    }

    #[tokio::test]
    async fn test_lead_management_by_role() {
        let requirement = AccessRequirement::new()
            .in_tenant("t1")
            .require_all(&[Permission::LeadRead, Permission::LeadUpdate]);

        let dealer = guard_for(StaticSessionProvider::signed_in(SessionFactory::dealer("t1")));
        assert_allowed(&dealer.check(&requirement).await);

        let farmer = guard_for(StaticSessionProvider::signed_in(SessionFactory::farmer("t1")));
        assert_denied(
            &farmer.check(&requirement).await,
            DenialReason::MissingPermissions(vec![Permission::LeadUpdate]),
        );
    }

    #[tokio::test]
    async fn test_cross_tenant_access() {
        let requirement = AccessRequirement::new()
            .in_tenant("t2")
            .require(Permission::TenantRead);

        let member = guard_for(StaticSessionProvider::signed_in(SessionFactory::tenant_user("t1")));
        assert_denied(
            &member.check(&requirement).await,
            DenialReason::TenantMismatch("t2".to_string()),
        );

        let platform =
            guard_for(StaticSessionProvider::signed_in(SessionFactory::platform_admin()));
        assert_allowed(&platform.check(&requirement).await);
    }

    #[tokio::test]
    async fn test_decision_follows_session_changes() {
        let provider = StaticSessionProvider::signed_in(SessionFactory::tenant_user("t1"));
        let guard = guard_for(provider.clone());
        let requirement = AccessRequirement::new().tenant_admin();

        assert_denied(&guard.check(&requirement).await, DenialReason::InsufficientRole);

        provider.set(Some(SessionFactory::tenant_admin("t1")));
        let decision = guard.check(&requirement).await;
        assert_allowed(&decision);
        assert_eq!(decision.context().unwrap().tenant_role(), Some(Role::TenantAdmin));

        provider.set(None);
        assert_denied(&guard.check(&requirement).await, DenialReason::Unauthenticated);
    }

    #[tokio::test]
    async fn test_half_tenant_session_is_invalid() {
        let mut identity = SessionFactory::tenant_user("t1");
        identity.tenant_role = None;
        let guard = guard_for(StaticSessionProvider::signed_in(identity));

        let decision = guard.check(&AccessRequirement::new()).await;
        assert!(matches!(
            decision.denial_reason(),
            Some(DenialReason::InvalidSession(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_checks_share_one_guard() {
        let guard = guard_for(StaticSessionProvider::signed_in(SessionFactory::dealer("t1")));
        let requirement = AccessRequirement::new().require(Permission::LeadCreate);

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let guard = guard.clone();
                let requirement = requirement.clone();
                tokio::spawn(async move { guard.check(&requirement).await.is_allowed() })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap());
        }
    }
}
