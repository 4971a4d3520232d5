//! Authorization context construction

use serde::Serialize;
use tracing::debug;

use super::permissions::PermissionSet;
use super::registry::permissions_for;
use super::roles::Role;
use crate::utils::error::{AuthzError, Result};

/// Non-empty user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Rejects empty and whitespace-only identifiers
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AuthzError::invalid_identity("user id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty tenant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AuthzError::invalid_identity("tenant id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant the user is operating in, together with their role there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantScope {
    pub tenant_id: TenantId,
    pub role: Role,
}

impl TenantScope {
    pub fn new(tenant_id: TenantId, role: Role) -> Self {
        Self { tenant_id, role }
    }
}

/// Resolved authority of one user for one request or session
///
/// Fields are private: once built, nothing can change the roles or the
/// permission set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationContext {
    user_id: UserId,
    system_role: Role,
    tenant: Option<TenantScope>,
    permissions: PermissionSet,
}

impl AuthorizationContext {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn system_role(&self) -> Role {
        self.system_role
    }

    pub fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant.as_ref().map(|scope| &scope.tenant_id)
    }

    pub fn tenant_role(&self) -> Option<Role> {
        self.tenant.as_ref().map(|scope| scope.role)
    }

    pub fn tenant(&self) -> Option<&TenantScope> {
        self.tenant.as_ref()
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}

/// Build a context: permissions are the union of the system role's and, if
/// present, the tenant role's grants
pub fn build_context(
    user_id: UserId,
    system_role: Role,
    tenant: Option<TenantScope>,
) -> AuthorizationContext {
    let mut permissions = permissions_for(system_role);
    if let Some(scope) = &tenant {
        permissions.extend(permissions_for(scope.role));
    }

    debug!(
        user_id = %user_id,
        system_role = %system_role,
        tenant_id = tenant.as_ref().map(|s| s.tenant_id.as_str()),
        permissions = permissions.len(),
        "Built authorization context"
    );

    AuthorizationContext {
        user_id,
        system_role,
        tenant,
        permissions,
    }
}

/// Build a context from raw session values
///
/// Unknown role codes are accepted and grant nothing. The identifiers are
/// validated, and tenant id and tenant role must be given together.
pub fn build_context_from_codes(
    user_id: &str,
    system_role: &str,
    tenant_id: Option<&str>,
    tenant_role: Option<&str>,
) -> Result<AuthorizationContext> {
    let user_id = UserId::new(user_id)?;
    let tenant = match (tenant_id, tenant_role) {
        (Some(id), Some(role)) => Some(TenantScope::new(TenantId::new(id)?, Role::from_code(role))),
        (None, None) => None,
        (Some(id), None) => {
            return Err(AuthzError::invalid_identity(format!(
                "tenant {} given without a tenant role",
                id
            )));
        }
        (None, Some(role)) => {
            return Err(AuthzError::invalid_identity(format!(
                "tenant role {} given without a tenant id",
                role
            )));
        }
    };

    Ok(build_context(user_id, Role::from_code(system_role), tenant))
}
