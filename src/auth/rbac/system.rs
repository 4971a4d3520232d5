//! RBAC service
//!
//! Holds configuration only; every lookup is delegated to the pure registry,
//! builder and evaluator, so one instance can be shared freely.

use tracing::{debug, info};

use super::context::{AuthorizationContext, build_context_from_codes};
use super::registry::role_definitions;
use super::roles::Role;
use super::types::RoleDefinition;
use crate::auth::types::SessionIdentity;
use crate::config::RbacConfig;
use crate::utils::error::Result;

/// Injectable RBAC service
#[derive(Debug, Clone)]
pub struct RbacService {
    /// RBAC configuration
    config: RbacConfig,
}

impl RbacService {
    /// Create a new RBAC service
    pub fn new(config: &RbacConfig) -> Self {
        info!(
            enabled = config.enabled,
            default_role = %config.default_role,
            "Initializing RBAC service"
        );

        Self {
            config: config.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Role used for sessions that carry no system role code
    pub fn default_role(&self) -> Role {
        self.config.default_role
    }

    /// Build the context for an authenticated session
    pub fn context_for_session(&self, identity: &SessionIdentity) -> Result<AuthorizationContext> {
        let system_role = identity
            .system_role
            .as_deref()
            .unwrap_or(self.config.default_role.as_str());

        if Role::from_code(system_role) == Role::Unknown {
            debug!(
                user_id = %identity.user_id,
                role = system_role,
                "Unrecognized system role, resolving to no permissions"
            );
        }

        build_context_from_codes(
            &identity.user_id,
            system_role,
            identity.tenant_id.as_deref(),
            identity.tenant_role.as_deref(),
        )
    }

    /// List all role definitions
    pub fn role_definitions(&self) -> Vec<RoleDefinition> {
        role_definitions()
    }
}
