//! Session monitor configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session expiry configuration, all values in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle time after which the session expires
    #[serde(default = "default_inactivity_timeout_secs")]
    pub inactivity_timeout_secs: u64,
    /// How long before expiry the warning state starts
    #[serde(default = "default_warning_before_secs")]
    pub warning_before_secs: u64,
    /// Absolute session lifetime regardless of activity
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
    /// Background check period
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: default_inactivity_timeout_secs(),
            warning_before_secs: default_warning_before_secs(),
            max_lifetime_secs: default_max_lifetime_secs(),
            check_interval_secs: default_check_interval_secs(),
        }
    }
}

impl SessionConfig {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }

    pub fn warning_before(&self) -> Duration {
        Duration::from_secs(self.warning_before_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

fn default_inactivity_timeout_secs() -> u64 {
    30 * 60
}

fn default_warning_before_secs() -> u64 {
    5 * 60
}

fn default_max_lifetime_secs() -> u64 {
    12 * 60 * 60
}

fn default_check_interval_secs() -> u64 {
    30
}
