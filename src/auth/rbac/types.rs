//! RBAC type definitions

use serde::Serialize;

use super::permissions::PermissionSet;
use super::roles::{Role, RoleScope};

/// Role definition as exposed to admin tooling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleDefinition {
    /// Role
    pub role: Role,
    /// Whether the role is system- or tenant-level
    pub scope: RoleScope,
    /// Role description
    pub description: &'static str,
    /// Permissions granted by this role
    pub permissions: PermissionSet,
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role slots that granted the permission
    pub granted_by: Vec<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
