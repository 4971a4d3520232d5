//! # tenant-authz
//!
//! Tenant-scoped authorization for a multi-tenant SaaS administration platform.
//!
//! ## Features
//!
//! - **Typed RBAC**: closed `Role` and `Permission` enumerations with a static,
//!   exhaustively matched role registry
//! - **Immutable contexts**: a user's authority is resolved once per request into
//!   an [`AuthorizationContext`] and evaluated with pure predicates
//! - **Fail open to nothing**: unknown role codes are accepted and grant no
//!   permissions
//! - **Access guard**: async gate that turns the current session into an
//!   allow/deny decision
//! - **Domain routing**: host to tenant resolution with a TTL cache
//! - **Session monitoring**: inactivity and lifetime expiry with a warning window
//!
//! ## Quick Start
//!
//! ```rust
//! use tenant_authz::{Permission, build_context_from_codes};
//!
//! # fn main() -> tenant_authz::Result<()> {
//! let ctx = build_context_from_codes("u1", "tenant_admin", Some("t1"), Some("tenant_user"))?;
//!
//! assert!(ctx.is_tenant_admin());
//! assert!(ctx.can_access_tenant("t1"));
//! assert!(!ctx.can_access_tenant("t2"));
//! assert!(ctx.has_permission(Permission::UserCreate));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod tenancy;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AuthzError, Result};

pub use auth::guard::{AccessGuard, SessionProvider};
pub use auth::rbac::{
    AuthorizationContext, Permission, PermissionCheck, PermissionSet, RbacService, Role,
    RoleScope, TenantId, TenantScope, UserId, build_context, build_context_from_codes,
    can_access_tenant, has_all_permissions, has_any_permission, has_permission, has_role,
    is_system_admin, is_tenant_admin, permissions_for,
};
pub use auth::session::{SessionMonitor, SessionState};
pub use auth::types::{AccessRequirement, DenialReason, GuardDecision, SessionIdentity};
pub use tenancy::{DomainRouter, InMemoryTenantDirectory, TenantDirectory, TenantRoute};
