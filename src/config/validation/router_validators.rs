//! Domain router configuration validators

use super::Validate;
use crate::config::models::DomainRouterConfig;
use tracing::debug;

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl Validate for DomainRouterConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating domain router configuration");

        if self.base_domain.is_empty() {
            return Err("Base domain cannot be empty".to_string());
        }

        if !self.base_domain.split('.').all(is_valid_label) {
            return Err(format!(
                "Base domain {} must be a bare host name without scheme or port",
                self.base_domain
            ));
        }

        for subdomain in &self.reserved_subdomains {
            if !is_valid_label(subdomain) {
                return Err(format!(
                    "Reserved subdomain {} must be a single DNS label",
                    subdomain
                ));
            }
        }

        if self.max_cache_entries > 0 && self.cache_ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0 when caching is enabled".to_string());
        }

        if self.cache_ttl_secs > 86400 {
            return Err("Cache TTL should not exceed 24 hours".to_string());
        }

        Ok(())
    }
}
