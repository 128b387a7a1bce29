//! Integration test utilities for the social server
//!
//! The REST API is served on a local port over in-memory repositories and
//! a recording publisher, so the suite needs neither PostgreSQL nor Redis.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
