//! Common test utilities for tenant-authz

pub mod assertions;
pub mod fixtures;

pub use fixtures::{SessionFactory, StaticSessionProvider};
