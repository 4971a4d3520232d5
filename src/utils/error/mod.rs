//! Error handling for the authorization layer
//!
//! The RBAC core itself never fails for well-typed input; errors only arise at the
//! boundaries (identity parsing, configuration, tenant directory lookups).

mod helpers;
mod types;

pub use types::{AuthzError, Result};
