//! Configuration validation

mod auth_validators;
mod router_validators;
mod session_validators;

/// Implemented by every configuration section; the error is a human-readable
/// description of the first problem found
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
