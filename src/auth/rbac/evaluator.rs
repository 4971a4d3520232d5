//! Permission and role evaluation
//!
//! Every check is a pure predicate over an already built context. A caller
//! without a context must treat that as "no access" instead of calling in here.

use super::context::AuthorizationContext;
use super::permissions::Permission;
use super::registry::grants;
use super::roles::Role;
use super::types::PermissionCheck;

/// `permission` is in the context's permission set
pub fn has_permission(ctx: &AuthorizationContext, permission: Permission) -> bool {
    ctx.permissions().contains(permission)
}

/// At least one of `permissions` is held; an empty list is never satisfied
pub fn has_any_permission(ctx: &AuthorizationContext, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| has_permission(ctx, p))
}

/// Every one of `permissions` is held; an empty list is always satisfied
pub fn has_all_permissions(ctx: &AuthorizationContext, permissions: &[Permission]) -> bool {
    permissions.iter().all(|&p| has_permission(ctx, p))
}

/// Either the system role or the tenant role is in `roles`
pub fn has_role(ctx: &AuthorizationContext, roles: &[Role]) -> bool {
    roles.contains(&ctx.system_role())
        || ctx.tenant_role().is_some_and(|role| roles.contains(&role))
}

/// System admins reach every tenant; everyone else only the exact tenant in scope
pub fn can_access_tenant(ctx: &AuthorizationContext, tenant_id: &str) -> bool {
    if is_system_admin(ctx) {
        return true;
    }

    ctx.tenant_id().is_some_and(|id| id.as_str() == tenant_id)
}

pub fn is_system_admin(ctx: &AuthorizationContext) -> bool {
    has_role(ctx, Role::SYSTEM_ADMINS)
}

/// Tenant admins, plus system admins who are tenant admins everywhere
pub fn is_tenant_admin(ctx: &AuthorizationContext) -> bool {
    has_role(ctx, &[Role::TenantAdmin]) || is_system_admin(ctx)
}

/// Permissions from `required` that the context lacks, in input order
pub fn missing_permissions(ctx: &AuthorizationContext, required: &[Permission]) -> Vec<Permission> {
    required
        .iter()
        .copied()
        .filter(|&p| !has_permission(ctx, p))
        .collect()
}

/// Detailed permission check naming the role slot(s) that grant it
pub fn check_permission(ctx: &AuthorizationContext, permission: Permission) -> PermissionCheck {
    let mut granted_by = Vec::new();
    if grants(ctx.system_role()).contains(&permission) {
        granted_by.push(ctx.system_role());
    }
    if let Some(role) = ctx.tenant_role() {
        if grants(role).contains(&permission) && !granted_by.contains(&role) {
            granted_by.push(role);
        }
    }

    if granted_by.is_empty() {
        PermissionCheck {
            granted: false,
            granted_by,
            denial_reason: Some(format!("Missing permission: {}", permission)),
        }
    } else {
        PermissionCheck {
            granted: true,
            granted_by,
            denial_reason: None,
        }
    }
}

impl AuthorizationContext {
    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(self, permission)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        has_any_permission(self, permissions)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        has_all_permissions(self, permissions)
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        has_role(self, roles)
    }

    pub fn can_access_tenant(&self, tenant_id: &str) -> bool {
        can_access_tenant(self, tenant_id)
    }

    pub fn is_system_admin(&self) -> bool {
        is_system_admin(self)
    }

    pub fn is_tenant_admin(&self) -> bool {
        is_tenant_admin(self)
    }

    pub fn check_permission(&self, permission: Permission) -> PermissionCheck {
        check_permission(self, permission)
    }
}
