//! Domain routing type definitions

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// How a host was matched to its tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// `<slug>.<base domain>`
    Subdomain,
    /// Tenant-owned domain pointed at the platform
    CustomDomain,
}

/// Tenant a host routes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRoute {
    pub tenant_id: String,
    pub slug: String,
    pub kind: RouteKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
}

impl TenantRoute {
    pub fn subdomain(tenant_id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            slug: slug.into(),
            kind: RouteKind::Subdomain,
            custom_domain: None,
        }
    }

    pub fn custom_domain(
        tenant_id: impl Into<String>,
        slug: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            slug: slug.into(),
            kind: RouteKind::CustomDomain,
            custom_domain: Some(domain.into()),
        }
    }
}

/// What a normalized host points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostTarget {
    /// The platform itself (base domain or reserved subdomain)
    Platform,
    Subdomain(String),
    CustomDomain(String),
}

/// Cache entry with metadata
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<T> {
    pub value: T,
    pub created_at: Instant,
    /// `None` when the TTL reaches past any representable instant
    pub expires_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now.checked_add(ttl),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// Atomic cache statistics for lock-free updates
#[derive(Debug, Default)]
pub(crate) struct AtomicRouterStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub evictions: AtomicU64,
}

impl AtomicRouterStats {
    pub fn snapshot(&self, entries: usize) -> RouterCacheStats {
        RouterCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries,
        }
    }
}

/// Router cache statistics snapshot
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RouterCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped for expiry or capacity
    pub evictions: u64,
    pub entries: usize,
}

impl RouterCacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
