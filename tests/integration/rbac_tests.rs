//! RBAC integration tests
//!
//! Concrete authorization scenarios through the crate's public API.

#[cfg(test)]
mod tests {
    use std::thread;
    use tenant_authz::auth::rbac::{check_permission, role_definitions};
    use tenant_authz::{
        Permission, PermissionSet, Role, TenantId, TenantScope, UserId, build_context,
        build_context_from_codes, can_access_tenant, has_all_permissions, has_any_permission,
        has_permission, has_role, is_system_admin, is_tenant_admin, permissions_for,
    };

    #[test]
    fn test_tenant_admin_operating_in_tenant() {
        let ctx = build_context_from_codes("u1", "tenant_admin", Some("t1"), Some("tenant_user"))
            .unwrap();

        assert_eq!(
            ctx.permissions(),
            &permissions_for(Role::TenantAdmin).union(&permissions_for(Role::TenantUser))
        );
        assert!(is_tenant_admin(&ctx));
        assert!(!can_access_tenant(&ctx, "t2"));
        assert!(can_access_tenant(&ctx, "t1"));
    }

    #[test]
    fn test_super_admin_without_tenant() {
        let ctx = build_context_from_codes("u2", "super_admin", None, None).unwrap();

        assert!(can_access_tenant(&ctx, "anything"));
        assert!(is_system_admin(&ctx));
        assert!(has_all_permissions(
            &ctx,
            &[Permission::TenantCreate, Permission::BillingAdmin]
        ));
        assert_eq!(ctx.permissions().len(), Permission::ALL.len());
    }

    #[test]
    fn test_farmer_fixture() {
        let ctx = build_context_from_codes("u3", "farmer", None, None).unwrap();

        assert!(!has_permission(&ctx, Permission::BillingAdmin));
        assert_eq!(
            has_any_permission(&ctx, &[Permission::BillingAdmin, Permission::UserRead]),
            permissions_for(Role::Farmer).contains(Permission::UserRead)
        );
        assert!(!has_any_permission(
            &ctx,
            &[Permission::BillingAdmin, Permission::UserRead]
        ));
    }

    #[test]
    fn test_platform_admin_reaches_tenants_but_not_settings() {
        let ctx = build_context_from_codes("u4", "platform_admin", None, None).unwrap();

        assert!(can_access_tenant(&ctx, "t1"));
        assert!(is_tenant_admin(&ctx));
        assert!(has_permission(&ctx, Permission::TenantCreate));
        assert!(!has_permission(&ctx, Permission::SettingsManage));
    }

    #[test]
    fn test_role_slots_are_independent() {
        let ctx = build_context(
            UserId::new("u5").unwrap(),
            Role::Dealer,
            Some(TenantScope::new(TenantId::new("t1").unwrap(), Role::Farmer)),
        );

        assert!(has_role(&ctx, &[Role::Dealer]));
        assert!(has_role(&ctx, &[Role::Farmer]));
        assert!(!has_role(&ctx, &[Role::TenantAdmin]));
        assert!(!is_tenant_admin(&ctx));

        let check = check_permission(&ctx, Permission::OnboardingRead);
        assert_eq!(check.granted_by, vec![Role::Farmer]);
    }

    #[test]
    fn test_unknown_roles_fail_open_to_nothing() {
        let ctx =
            build_context_from_codes("u6", "regional_manager", Some("t1"), Some("intern")).unwrap();

        assert_eq!(ctx.system_role(), Role::Unknown);
        assert_eq!(ctx.permissions(), &PermissionSet::new());
        assert!(!has_any_permission(&ctx, Permission::ALL));
        assert!(has_all_permissions(&ctx, &[]));
        assert!(!is_tenant_admin(&ctx));
        assert!(!is_system_admin(&ctx));
    }

    #[test]
    fn test_contexts_built_concurrently_agree() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    build_context_from_codes(
                        &format!("u{}", i),
                        "dealer",
                        Some("t1"),
                        Some("tenant_admin"),
                    )
                    .unwrap()
                    .permissions()
                    .clone()
                })
            })
            .collect();

        let sets: Vec<PermissionSet> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(sets.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_role_definitions_serialize_with_codes() {
        let definitions = role_definitions();
        let json = serde_json::to_value(&definitions).unwrap();

        let farmer = json
            .as_array()
            .unwrap()
            .iter()
            .find(|d| d["role"] == "farmer")
            .unwrap();
        assert_eq!(farmer["scope"], "tenant");
        assert_eq!(
            farmer["permissions"],
            serde_json::json!(["lead:read", "onboarding:read"])
        );
    }
}
