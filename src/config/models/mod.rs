//! Configuration data models

pub mod auth;
pub mod router;
pub mod session;

pub use auth::*;
pub use router::*;
pub use session::*;
