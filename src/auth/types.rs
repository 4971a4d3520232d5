//! Authentication and authorization types

use serde::{Deserialize, Serialize};

use super::rbac::{AuthorizationContext, Permission, Role};

/// Identity of the current session, exactly as the auth provider supplies it
///
/// Role codes stay raw strings here; they are resolved (and unknown codes
/// defused) when the context is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// User ID
    pub user_id: String,
    /// System role code, if the provider knows one
    #[serde(default)]
    pub system_role: Option<String>,
    /// Tenant the session operates in
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Role code within that tenant
    #[serde(default)]
    pub tenant_role: Option<String>,
}

impl SessionIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            system_role: None,
            tenant_id: None,
            tenant_role: None,
        }
    }

    pub fn with_system_role(mut self, role: impl Into<String>) -> Self {
        self.system_role = Some(role.into());
        self
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>, role: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self.tenant_role = Some(role.into());
        self
    }
}

/// What a guarded resource demands of the caller
///
/// All configured conditions must hold. An empty requirement only demands an
/// authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    /// Every one of these permissions
    pub all_of: Vec<Permission>,
    /// At least one of these permissions (ignored when empty)
    pub any_of: Vec<Permission>,
    /// At least one of these roles in either role slot (ignored when empty)
    pub roles: Vec<Role>,
    /// Tenant the caller must be able to access
    pub tenant_id: Option<String>,
    pub system_admin_only: bool,
    pub tenant_admin_only: bool,
}

impl AccessRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, permission: Permission) -> Self {
        self.all_of.push(permission);
        self
    }

    pub fn require_all(mut self, permissions: &[Permission]) -> Self {
        self.all_of.extend_from_slice(permissions);
        self
    }

    pub fn require_any(mut self, permissions: &[Permission]) -> Self {
        self.any_of.extend_from_slice(permissions);
        self
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles.extend_from_slice(roles);
        self
    }

    pub fn in_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn system_admin(mut self) -> Self {
        self.system_admin_only = true;
        self
    }

    pub fn tenant_admin(mut self) -> Self {
        self.tenant_admin_only = true;
        self
    }
}

/// Why access was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum DenialReason {
    /// No session
    Unauthenticated,
    /// Session values could not be turned into a context
    InvalidSession(String),
    /// The session provider failed
    SessionUnavailable(String),
    /// Required permissions the caller lacks
    MissingPermissions(Vec<Permission>),
    /// None of the accepted roles, or not an admin where one is required
    InsufficientRole,
    /// Caller cannot reach the requested tenant
    TenantMismatch(String),
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenialReason::Unauthenticated => write!(f, "Not signed in"),
            DenialReason::InvalidSession(msg) => write!(f, "Invalid session: {}", msg),
            DenialReason::SessionUnavailable(msg) => write!(f, "Session unavailable: {}", msg),
            DenialReason::MissingPermissions(missing) => {
                let codes: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
                write!(f, "Missing permissions: {}", codes.join(", "))
            }
            DenialReason::InsufficientRole => write!(f, "Insufficient role"),
            DenialReason::TenantMismatch(tenant) => write!(f, "No access to tenant {}", tenant),
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Access granted; carries the context that was evaluated
    Allowed(AuthorizationContext),
    /// Access refused
    Denied(DenialReason),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allowed(_))
    }

    pub fn context(&self) -> Option<&AuthorizationContext> {
        match self {
            GuardDecision::Allowed(ctx) => Some(ctx),
            GuardDecision::Denied(_) => None,
        }
    }

    pub fn denial_reason(&self) -> Option<&DenialReason> {
        match self {
            GuardDecision::Allowed(_) => None,
            GuardDecision::Denied(reason) => Some(reason),
        }
    }
}
