//! Configuration management
//!
//! Configuration is read from YAML and can be overlaid with `TENANT_AUTHZ_*`
//! environment variables. Every section is validated before use.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rbac: RbacConfig,
    #[serde(default)]
    pub domain_router: DomainRouterConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AuthzError::config(format!("Invalid {}: {}", key, e)))
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthzError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AuthzError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with environment variables (a `.env` file is honoured)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TENANT_AUTHZ_*` overrides from an arbitrary source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TENANT_AUTHZ_RBAC_ENABLED") {
            self.rbac.enabled = parse_var("TENANT_AUTHZ_RBAC_ENABLED", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_DEFAULT_ROLE") {
            self.rbac.default_role = parse_var("TENANT_AUTHZ_DEFAULT_ROLE", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_BASE_DOMAIN") {
            self.domain_router.base_domain = v.trim().to_string();
        }
        if let Some(v) = lookup("TENANT_AUTHZ_RESERVED_SUBDOMAINS") {
            self.domain_router.reserved_subdomains = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = lookup("TENANT_AUTHZ_DOMAIN_CACHE_TTL") {
            self.domain_router.cache_ttl_secs = parse_var("TENANT_AUTHZ_DOMAIN_CACHE_TTL", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_DOMAIN_CACHE_SIZE") {
            self.domain_router.max_cache_entries = parse_var("TENANT_AUTHZ_DOMAIN_CACHE_SIZE", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_SESSION_TIMEOUT") {
            self.session.inactivity_timeout_secs = parse_var("TENANT_AUTHZ_SESSION_TIMEOUT", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_SESSION_WARNING") {
            self.session.warning_before_secs = parse_var("TENANT_AUTHZ_SESSION_WARNING", &v)?;
        }
        if let Some(v) = lookup("TENANT_AUTHZ_SESSION_MAX_LIFETIME") {
            self.session.max_lifetime_secs = parse_var("TENANT_AUTHZ_SESSION_MAX_LIFETIME", &v)?;
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .validate()
            .map_err(|e| AuthzError::config(format!("RBAC config error: {}", e)))?;

        self.domain_router
            .validate()
            .map_err(|e| AuthzError::config(format!("Domain router config error: {}", e)))?;

        self.session
            .validate()
            .map_err(|e| AuthzError::config(format!("Session config error: {}", e)))?;

        models::auth::warn_insecure_config(&self.rbac);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AuthzError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
