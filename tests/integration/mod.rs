//! Integration tests for tenant-authz
//!
//! These tests exercise the public API without mocking.

pub mod config_tests;
pub mod guard_tests;
pub mod rbac_tests;
pub mod routing_tests;
