//! Domain router configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Domain router configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRouterConfig {
    /// Platform domain; tenants live at `<slug>.<base_domain>`
    #[serde(default = "default_base_domain")]
    pub base_domain: String,
    /// Subdomains that belong to the platform rather than a tenant
    #[serde(default = "default_reserved_subdomains")]
    pub reserved_subdomains: Vec<String>,
    /// How long a resolved route is cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Cache capacity; 0 disables caching
    #[serde(default = "default_max_cache_entries")]
    pub max_cache_entries: usize,
}

impl Default for DomainRouterConfig {
    fn default() -> Self {
        Self {
            base_domain: default_base_domain(),
            reserved_subdomains: default_reserved_subdomains(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_cache_entries: default_max_cache_entries(),
        }
    }
}

impl DomainRouterConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_base_domain() -> String {
    "localhost".to_string()
}

fn default_reserved_subdomains() -> Vec<String> {
    ["www", "app", "admin", "api"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_max_cache_entries() -> usize {
    10_000
}
