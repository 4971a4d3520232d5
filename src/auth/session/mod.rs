//! Session expiry and inactivity monitoring

mod monitor;
mod types;

pub use monitor::SessionMonitor;
pub use types::{ExpiryReason, SessionSnapshot, SessionState};
