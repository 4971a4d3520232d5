//! Tenant routing
//!
//! Maps request hosts (`acme.example.com`, `crm.acme.io`) to the tenant that
//! owns them, caching directory lookups for a configurable TTL.

mod directory;
mod router;
mod types;

pub use directory::{InMemoryTenantDirectory, TenantDirectory};
pub use router::{DomainRouter, normalize_host};
pub use types::{RouteKind, RouterCacheStats, TenantRoute};
