//! Domain to tenant router with a TTL cache

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::{debug, info};

use super::directory::TenantDirectory;
use super::types::{AtomicRouterStats, CacheEntry, HostTarget, RouterCacheStats, TenantRoute};
use crate::config::DomainRouterConfig;
use crate::utils::error::Result;

/// Lowercase, drop a trailing dot and any `:port`; `None` for an empty host
pub fn normalize_host(host: &str) -> Option<String> {
    let mut host = host.trim().to_ascii_lowercase();

    if let Some((name, port)) = host.rsplit_once(':') {
        if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
            host = name.to_string();
        }
    }

    let host = host.trim_end_matches('.');
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Resolves request hosts to tenants
pub struct DomainRouter {
    directory: Arc<dyn TenantDirectory>,
    base_domain: String,
    reserved_subdomains: Vec<String>,
    ttl: Duration,
    max_entries: usize,
    cache: DashMap<String, CacheEntry<TenantRoute>>,
    stats: AtomicRouterStats,
}

impl DomainRouter {
    pub fn new(config: &DomainRouterConfig, directory: Arc<dyn TenantDirectory>) -> Self {
        info!(
            base_domain = %config.base_domain,
            cache_ttl_secs = config.cache_ttl_secs,
            "Initializing domain router"
        );

        Self {
            directory,
            base_domain: config.base_domain.to_ascii_lowercase(),
            reserved_subdomains: config
                .reserved_subdomains
                .iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
            ttl: config.cache_ttl(),
            max_entries: config.max_cache_entries,
            cache: DashMap::new(),
            stats: AtomicRouterStats::default(),
        }
    }

    pub(crate) fn classify(&self, host: &str) -> HostTarget {
        if host == self.base_domain {
            return HostTarget::Platform;
        }

        match host
            .strip_suffix(self.base_domain.as_str())
            .and_then(|prefix| prefix.strip_suffix('.'))
        {
            Some(label) if self.reserved_subdomains.iter().any(|r| r == label) => {
                HostTarget::Platform
            }
            Some(label) if !label.is_empty() && !label.contains('.') => {
                HostTarget::Subdomain(label.to_string())
            }
            _ => HostTarget::CustomDomain(host.to_string()),
        }
    }

    /// Tenant for `host`, or `None` for platform hosts and unknown domains
    pub async fn resolve(&self, host: &str) -> Result<Option<TenantRoute>> {
        let Some(host) = normalize_host(host) else {
            return Ok(None);
        };

        let target = self.classify(&host);
        if target == HostTarget::Platform {
            debug!(host = %host, "Platform host, no tenant");
            return Ok(None);
        }

        if let Some(route) = self.cached(&host) {
            return Ok(Some(route));
        }

        let route = match &target {
            HostTarget::Subdomain(slug) => self.directory.find_by_slug(slug).await?,
            HostTarget::CustomDomain(domain) => self.directory.find_by_custom_domain(domain).await?,
            HostTarget::Platform => None,
        };

        match &route {
            Some(route) => {
                debug!(host = %host, tenant_id = %route.tenant_id, "Resolved tenant");
                self.store(host, route.clone());
            }
            None => debug!(host = %host, "No tenant for host"),
        }

        Ok(route)
    }

    fn cached(&self, host: &str) -> Option<TenantRoute> {
        if let Some(entry) = self.cache.get(host) {
            if !entry.is_expired() {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
        }

        // Expired entries are dropped outside of the shard guard above
        if self
            .cache
            .remove_if(host, |_, entry| entry.is_expired())
            .is_some()
        {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn store(&self, host: String, route: TenantRoute) {
        if self.max_entries == 0 {
            return;
        }

        if self.cache.len() >= self.max_entries && !self.cache.contains_key(&host) {
            self.purge_expired();
            if self.cache.len() >= self.max_entries {
                self.evict_oldest();
            }
        }

        self.cache.insert(host, CacheEntry::new(route, self.ttl));
    }

    fn evict_oldest(&self) {
        let oldest = self
            .cache
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());

        if let Some(host) = oldest {
            self.cache.remove(&host);
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Drop expired entries; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let before = self.cache.len();
        self.cache.retain(|_, entry| !entry.is_expired());
        let removed = before.saturating_sub(self.cache.len());

        if removed > 0 {
            self.stats
                .evictions
                .fetch_add(removed as u64, Ordering::Relaxed);
            debug!("Purged {} expired domain routes", removed);
        }
        removed
    }

    /// Forget the cached route for a host, e.g. after a domain change
    pub fn invalidate(&self, host: &str) -> bool {
        normalize_host(host)
            .and_then(|host| self.cache.remove(&host))
            .is_some()
    }

    /// Forget every cached route belonging to a tenant
    pub fn invalidate_tenant(&self, tenant_id: &str) -> usize {
        let before = self.cache.len();
        self.cache
            .retain(|_, entry| entry.value.tenant_id != tenant_id);
        before.saturating_sub(self.cache.len())
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> RouterCacheStats {
        self.stats.snapshot(self.cache.len())
    }
}
