//! Tenant directory: where the router looks hosts up

use async_trait::async_trait;
use dashmap::DashMap;

use super::types::TenantRoute;
use crate::utils::error::Result;

/// Lookup of tenants by subdomain slug or custom domain
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<TenantRoute>>;

    async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<TenantRoute>>;
}

/// In-memory directory
#[derive(Debug, Default)]
pub struct InMemoryTenantDirectory {
    by_slug: DashMap<String, TenantRoute>,
    by_domain: DashMap<String, TenantRoute>,
}

impl InMemoryTenantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant reachable at `<slug>.<base domain>`
    pub fn add_tenant(&self, tenant_id: &str, slug: &str) {
        self.by_slug
            .insert(slug.to_lowercase(), TenantRoute::subdomain(tenant_id, slug.to_lowercase()));
    }

    /// Point a custom domain at a tenant
    pub fn add_custom_domain(&self, tenant_id: &str, slug: &str, domain: &str) {
        let domain = domain.to_lowercase();
        self.by_domain.insert(
            domain.clone(),
            TenantRoute::custom_domain(tenant_id, slug.to_lowercase(), domain),
        );
    }

    pub fn remove_custom_domain(&self, domain: &str) -> Option<TenantRoute> {
        self.by_domain
            .remove(&domain.to_lowercase())
            .map(|(_, route)| route)
    }

    pub fn remove_tenant(&self, slug: &str) -> Option<TenantRoute> {
        self.by_slug.remove(&slug.to_lowercase()).map(|(_, route)| route)
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<TenantRoute>> {
        Ok(self.by_slug.get(slug).map(|entry| entry.value().clone()))
    }

    async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<TenantRoute>> {
        Ok(self.by_domain.get(domain).map(|entry| entry.value().clone()))
    }
}
