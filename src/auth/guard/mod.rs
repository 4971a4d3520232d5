//! Access guard
//!
//! Fetches the current session asynchronously, builds an authorization context
//! from it and evaluates an [`AccessRequirement`]. All asynchrony lives here;
//! the RBAC core stays synchronous.


use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::rbac::{AuthorizationContext, RbacService, missing_permissions};
use super::types::{AccessRequirement, DenialReason, GuardDecision, SessionIdentity};
use crate::utils::error::Result;

/// Source of the current session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in identity, or `None` when nobody is signed in
    async fn current_session(&self) -> Result<Option<SessionIdentity>>;
}

/// Evaluate a requirement against a context, returning the first failed condition
pub fn evaluate(ctx: &AuthorizationContext, requirement: &AccessRequirement) -> Option<DenialReason> {
    if let Some(tenant_id) = &requirement.tenant_id {
        if !ctx.can_access_tenant(tenant_id) {
            return Some(DenialReason::TenantMismatch(tenant_id.clone()));
        }
    }

    if requirement.system_admin_only && !ctx.is_system_admin() {
        return Some(DenialReason::InsufficientRole);
    }

    if requirement.tenant_admin_only && !ctx.is_tenant_admin() {
        return Some(DenialReason::InsufficientRole);
    }

    if !requirement.roles.is_empty() && !ctx.has_role(&requirement.roles) {
        return Some(DenialReason::InsufficientRole);
    }

    let missing = missing_permissions(ctx, &requirement.all_of);
    if !missing.is_empty() {
        return Some(DenialReason::MissingPermissions(missing));
    }

    if !requirement.any_of.is_empty() && !ctx.has_any_permission(&requirement.any_of) {
        return Some(DenialReason::MissingPermissions(requirement.any_of.clone()));
    }

    None
}

/// Gate that turns the current session into an allow/deny decision
#[derive(Clone)]
pub struct AccessGuard {
    sessions: Arc<dyn SessionProvider>,
    rbac: Arc<RbacService>,
}

impl AccessGuard {
    pub fn new(sessions: Arc<dyn SessionProvider>, rbac: Arc<RbacService>) -> Self {
        Self { sessions, rbac }
    }

    /// Build the context for the current session, if there is a usable one
    pub async fn current_context(&self) -> std::result::Result<AuthorizationContext, DenialReason> {
        let identity = match self.sessions.current_session().await {
            Ok(Some(identity)) => identity,
            Ok(None) => return Err(DenialReason::Unauthenticated),
            Err(e) => {
                warn!("Session lookup failed: {}", e);
                return Err(DenialReason::SessionUnavailable(e.to_string()));
            }
        };

        self.rbac.context_for_session(&identity).map_err(|e| {
            warn!(user_id = %identity.user_id, "Rejecting malformed session: {}", e);
            DenialReason::InvalidSession(e.to_string())
        })
    }

    /// Check the current session against a requirement
    pub async fn check(&self, requirement: &AccessRequirement) -> GuardDecision {
        let ctx = match self.current_context().await {
            Ok(ctx) => ctx,
            Err(reason) => {
                debug!("Access denied before evaluation: {}", reason);
                return GuardDecision::Denied(reason);
            }
        };

        if !self.rbac.is_enabled() {
            debug!(user_id = %ctx.user_id(), "RBAC disabled, allowing authenticated session");
            return GuardDecision::Allowed(ctx);
        }

        match evaluate(&ctx, requirement) {
            None => {
                debug!(user_id = %ctx.user_id(), "Access granted");
                GuardDecision::Allowed(ctx)
            }
            Some(reason) => {
                debug!(user_id = %ctx.user_id(), "Access denied: {}", reason);
                GuardDecision::Denied(reason)
            }
        }
    }

    /// Render `allowed` or `fallback` depending on the decision
    pub async fn gate<T>(
        &self,
        requirement: &AccessRequirement,
        allowed: impl FnOnce(&AuthorizationContext) -> T,
        fallback: impl FnOnce(&DenialReason) -> T,
    ) -> T {
        match self.check(requirement).await {
            GuardDecision::Allowed(ctx) => allowed(&ctx),
            GuardDecision::Denied(reason) => fallback(&reason),
        }
    }
}
