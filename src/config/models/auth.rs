//! Authorization configuration

use crate::auth::rbac::{Role, RoleScope};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Enforce access requirements; when off, any authenticated session passes
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// System role for sessions that carry none
    #[serde(default = "default_role")]
    pub default_role: Role,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_role: default_role(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_role() -> Role {
    Role::TenantUser
}

/// Warn about configurations that are valid but unsafe
pub fn warn_insecure_config(config: &RbacConfig) {
    if !config.enabled {
        warn!("RBAC is disabled: every authenticated session passes every access check");
    }
    if config.default_role.scope() == RoleScope::System {
        warn!(
            "Default role {} is system-level: sessions without a role get cross-tenant access",
            config.default_role
        );
    }
}
