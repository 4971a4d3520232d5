//! Role enumeration
//!
//! Role codes are shared with the rest of the platform (database role codes,
//! session claims), so `as_str` must stay byte-for-byte stable.

use serde::{Deserialize, Serialize};

/// Where a role's authority applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleScope {
    /// Global authority, not bound to a tenant
    System,
    /// Authority within a single tenant
    Tenant,
}

/// User role
///
/// `Unknown` stands in for any role code the session provider hands over that
/// is not part of the enumeration. It is accepted everywhere and grants nothing.
/// The original code is not kept: an unrecognized code such as `auditor`
/// serializes back as `unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Highest privilege, receives every permission
    SuperAdmin,
    /// Platform operator with cross-tenant access
    PlatformAdmin,
    /// Administrator of a single tenant
    TenantAdmin,
    /// Regular member of a tenant
    TenantUser,
    /// Farmer account within a tenant
    Farmer,
    /// Dealer account within a tenant
    Dealer,
    /// Unrecognized role code; serializes as `unknown`, not the code it came from
    Unknown,
}

impl Role {
    /// Every known role, `Unknown` excluded
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::PlatformAdmin,
        Role::TenantAdmin,
        Role::TenantUser,
        Role::Farmer,
        Role::Dealer,
    ];

    /// Roles with cross-tenant authority
    pub const SYSTEM_ADMINS: &'static [Role] = &[Role::SuperAdmin, Role::PlatformAdmin];

    /// Map a role code to a role; unrecognized codes become `Role::Unknown`
    pub fn from_code(code: &str) -> Self {
        match code {
            "super_admin" => Role::SuperAdmin,
            "platform_admin" => Role::PlatformAdmin,
            "tenant_admin" => Role::TenantAdmin,
            "tenant_user" => Role::TenantUser,
            "farmer" => Role::Farmer,
            "dealer" => Role::Dealer,
            _ => Role::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::PlatformAdmin => "platform_admin",
            Role::TenantAdmin => "tenant_admin",
            Role::TenantUser => "tenant_user",
            Role::Farmer => "farmer",
            Role::Dealer => "dealer",
            Role::Unknown => "unknown",
        }
    }

    pub const fn scope(&self) -> RoleScope {
        match self {
            Role::SuperAdmin | Role::PlatformAdmin => RoleScope::System,
            _ => RoleScope::Tenant,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super administrator with full platform access",
            Role::PlatformAdmin => "Platform administrator with cross-tenant access",
            Role::TenantAdmin => "Administrator of a single tenant",
            Role::TenantUser => "Regular tenant member",
            Role::Farmer => "Farmer account with read access to its leads",
            Role::Dealer => "Dealer account managing its own leads",
            Role::Unknown => "Unrecognized role, grants no permissions",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Role::Unknown)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Role::from_code(s) {
            Role::Unknown => Err(format!("Invalid role: {}", s)),
            role => Ok(role),
        }
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        Role::from_code(&code)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}
