//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tenant_authz::{AccessGuard, Config, RbacService, SessionIdentity, SessionProvider};

/// Factory for session identities as the auth provider would hand them over
pub struct SessionFactory;

impl SessionFactory {
    pub fn super_admin() -> SessionIdentity {
        SessionIdentity::new("u-super").with_system_role("super_admin")
    }

    pub fn platform_admin() -> SessionIdentity {
        SessionIdentity::new("u-platform").with_system_role("platform_admin")
    }

    pub fn tenant_admin(tenant_id: &str) -> SessionIdentity {
        SessionIdentity::new("u-admin")
            .with_system_role("tenant_user")
            .with_tenant(tenant_id, "tenant_admin")
    }

    pub fn tenant_user(tenant_id: &str) -> SessionIdentity {
        SessionIdentity::new("u-member")
            .with_system_role("tenant_user")
            .with_tenant(tenant_id, "tenant_user")
    }

    pub fn farmer(tenant_id: &str) -> SessionIdentity {
        SessionIdentity::new("u-farmer")
            .with_system_role("farmer")
            .with_tenant(tenant_id, "farmer")
    }

    pub fn dealer(tenant_id: &str) -> SessionIdentity {
        SessionIdentity::new("u-dealer")
            .with_system_role("dealer")
            .with_tenant(tenant_id, "dealer")
    }
}

/// Session provider whose session can be swapped between checks
#[derive(Default)]
pub struct StaticSessionProvider {
    session: RwLock<Option<SessionIdentity>>,
}

impl StaticSessionProvider {
    pub fn signed_in(identity: SessionIdentity) -> Arc<Self> {
        Arc::new(Self {
            session: RwLock::new(Some(identity)),
        })
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set(&self, identity: Option<SessionIdentity>) {
        *self.session.write() = identity;
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> tenant_authz::Result<Option<SessionIdentity>> {
        Ok(self.session.read().clone())
    }
}

/// Guard over `provider` using the default configuration
pub fn guard_for(provider: Arc<StaticSessionProvider>) -> AccessGuard {
    let config = Config::default();
    AccessGuard::new(provider, Arc::new(RbacService::new(&config.rbac)))
}
