//! Domain routing integration tests
//!
//! Resolve a host to a tenant, then decide whether the signed-in user may
//! operate there.

#[cfg(test)]
mod tests {
    use crate::common::SessionFactory;
    use std::sync::Arc;
    use std::time::Duration;
    use tenant_authz::config::DomainRouterConfig;
    use tenant_authz::tenancy::RouteKind;
    use tenant_authz::{Config, DomainRouter, InMemoryTenantDirectory, RbacService};

    fn router() -> (DomainRouter, Arc<InMemoryTenantDirectory>) {
        let directory = Arc::new(InMemoryTenantDirectory::new());
        directory.add_tenant("t1", "acme");
        directory.add_tenant("t2", "globex");
        directory.add_custom_domain("t1", "acme", "leads.acme.io");

        let config = DomainRouterConfig {
            base_domain: "saas.example.com".to_string(),
            cache_ttl_secs: 30,
            ..DomainRouterConfig::default()
        };
        (DomainRouter::new(&config, directory.clone()), directory)
    }

    #[tokio::test]
    async fn test_member_is_scoped_to_resolved_tenant() {
        let (router, _) = router();
        let rbac = RbacService::new(&Config::default().rbac);
        let ctx = rbac
            .context_for_session(&SessionFactory::tenant_user("t1"))
            .unwrap();

        let own = router.resolve("ACME.saas.example.com:443").await.unwrap().unwrap();
        assert_eq!(own.kind, RouteKind::Subdomain);
        assert!(ctx.can_access_tenant(&own.tenant_id));

        let custom = router.resolve("leads.acme.io").await.unwrap().unwrap();
        assert_eq!(custom.kind, RouteKind::CustomDomain);
        assert!(ctx.can_access_tenant(&custom.tenant_id));

        let other = router.resolve("globex.saas.example.com").await.unwrap().unwrap();
        assert!(!ctx.can_access_tenant(&other.tenant_id));
    }

    #[tokio::test]
    async fn test_platform_hosts_have_no_tenant() {
        let (router, _) = router();

        assert!(router.resolve("saas.example.com").await.unwrap().is_none());
        assert!(router.resolve("www.saas.example.com").await.unwrap().is_none());
        assert!(router.resolve("unknown.saas.example.com").await.unwrap().is_none());
        assert!(router.resolve("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_domain_removal_needs_invalidation() {
        let (router, directory) = router();

        assert!(router.resolve("leads.acme.io").await.unwrap().is_some());
        directory.remove_custom_domain("leads.acme.io");

        // Still served from cache until invalidated
        assert!(router.resolve("leads.acme.io").await.unwrap().is_some());
        assert!(router.invalidate("leads.acme.io"));
        assert!(router.resolve("leads.acme.io").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cached_routes_expire() {
        let (router, directory) = router();

        router.resolve("globex.saas.example.com").await.unwrap();
        directory.remove_tenant("globex");

        tokio::time::advance(Duration::from_secs(31)).await;
        assert!(router.resolve("globex.saas.example.com").await.unwrap().is_none());

        let stats = router.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 0);
    }
}
