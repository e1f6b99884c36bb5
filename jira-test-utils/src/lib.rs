//! Test utilities shared across the jira workspace
//!
//! This crate provides common testing infrastructure including:
//! - Environment variable overrides ([`EnvVarGuard`])
//! - Temporary home directories holding a `.netrc` ([`NetrcGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use env::{EnvVarGuard, env_lock};
pub use netrc::NetrcGuard;
