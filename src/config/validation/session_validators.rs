//! Session configuration validators

use super::Validate;
use crate::config::models::SessionConfig;

/// Longest session lifetime accepted, 30 days
const MAX_LIFETIME_SECS: u64 = 30 * 24 * 60 * 60;

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.inactivity_timeout_secs == 0 {
            return Err("Inactivity timeout must be greater than 0".to_string());
        }

        if self.warning_before_secs >= self.inactivity_timeout_secs {
            return Err("Warning period must be shorter than the inactivity timeout".to_string());
        }

        if self.max_lifetime_secs > MAX_LIFETIME_SECS {
            return Err(format!(
                "Maximum session lifetime should not exceed {} seconds",
                MAX_LIFETIME_SECS
            ));
        }

        if self.max_lifetime_secs < self.inactivity_timeout_secs {
            return Err(
                "Maximum session lifetime cannot be shorter than the inactivity timeout"
                    .to_string(),
            );
        }

        if self.check_interval_secs == 0 {
            return Err("Check interval must be greater than 0".to_string());
        }

        if self.check_interval_secs > self.warning_before_secs.max(1) {
            return Err("Check interval should not exceed the warning period".to_string());
        }

        Ok(())
    }
}
