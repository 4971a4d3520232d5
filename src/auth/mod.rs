//! Authentication-facing authorization
//!
//! RBAC core, the access guard that consumes it, and session expiry monitoring.

pub mod guard;
pub mod rbac;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use guard::{AccessGuard, SessionProvider, evaluate};
pub use rbac::{AuthorizationContext, Permission, PermissionSet, RbacService, Role};
pub use session::{ExpiryReason, SessionMonitor, SessionSnapshot, SessionState};
pub use types::{AccessRequirement, DenialReason, GuardDecision, SessionIdentity};
