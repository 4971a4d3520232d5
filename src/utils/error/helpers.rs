//! Helper functions for creating specific error types

use super::types::AuthzError;

impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_identity<S: Into<String>>(message: S) -> Self {
        Self::InvalidIdentity(message.into())
    }

    pub fn directory<S: Into<String>>(message: S) -> Self {
        Self::Directory(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
