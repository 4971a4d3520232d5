//! Role-Based Access Control (RBAC)
//!
//! Tenant-scoped authorization: a static role registry, a pure context builder
//! and stateless evaluation predicates over the resulting context.

mod context;
mod evaluator;
mod permissions;
mod registry;
mod roles;
mod system;
mod types;

pub use context::{
    AuthorizationContext, TenantId, TenantScope, UserId, build_context, build_context_from_codes,
};
pub use evaluator::{
    can_access_tenant, check_permission, has_all_permissions, has_any_permission, has_permission,
    has_role, is_system_admin, is_tenant_admin, missing_permissions,
};
pub use permissions::{Permission, PermissionSet};
pub use registry::{grants, permissions_for, role_definitions};
pub use roles::{Role, RoleScope};
pub use system::RbacService;
pub use types::{PermissionCheck, RoleDefinition};
