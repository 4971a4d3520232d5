//! Role to permission registry
//!
//! A static table: no I/O, no interior state, safe to call from any thread.

use super::permissions::{Permission, PermissionSet};
use super::roles::Role;
use super::types::RoleDefinition;

use Permission::*;

const PLATFORM_ADMIN: &[Permission] = &[
    TenantCreate,
    TenantRead,
    TenantUpdate,
    TenantDelete,
    UserCreate,
    UserRead,
    UserUpdate,
    UserDelete,
    LeadRead,
    OnboardingRead,
    OnboardingManage,
    BillingRead,
    BillingAdmin,
    DomainManage,
    AnalyticsRead,
    AuditRead,
];

const TENANT_ADMIN: &[Permission] = &[
    TenantRead,
    TenantUpdate,
    UserCreate,
    UserRead,
    UserUpdate,
    UserDelete,
    LeadCreate,
    LeadRead,
    LeadUpdate,
    LeadDelete,
    LeadAssign,
    OnboardingRead,
    OnboardingManage,
    BillingRead,
    DomainManage,
    AnalyticsRead,
    SettingsManage,
];

const TENANT_USER: &[Permission] = &[
    TenantRead,
    UserRead,
    LeadCreate,
    LeadRead,
    LeadUpdate,
    OnboardingRead,
];

const FARMER: &[Permission] = &[LeadRead, OnboardingRead];

const DEALER: &[Permission] = &[UserRead, LeadCreate, LeadRead, LeadUpdate];

/// Permissions granted by a role, as a static slice
///
/// `SuperAdmin` maps to `Permission::ALL` so new permissions reach it without
/// touching this table.
pub fn grants(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => Permission::ALL,
        Role::PlatformAdmin => PLATFORM_ADMIN,
        Role::TenantAdmin => TENANT_ADMIN,
        Role::TenantUser => TENANT_USER,
        Role::Farmer => FARMER,
        Role::Dealer => DEALER,
        Role::Unknown => &[],
    }
}

/// Permission set for a role; never fails, unknown roles yield the empty set
pub fn permissions_for(role: Role) -> PermissionSet {
    grants(role).iter().collect()
}

/// Definitions of every known role
pub fn role_definitions() -> Vec<RoleDefinition> {
    Role::ALL
        .iter()
        .map(|&role| RoleDefinition {
            role,
            scope: role.scope(),
            description: role.description(),
            permissions: permissions_for(role),
        })
        .collect()
}
