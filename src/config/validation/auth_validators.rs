//! Authorization configuration validators

use super::Validate;
use crate::config::models::RbacConfig;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.default_role.is_known() {
            return Err("Default role must be a known role".to_string());
        }

        Ok(())
    }
}
