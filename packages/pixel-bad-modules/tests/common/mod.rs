//! Common test utilities for pixel-bad-modules
//!
//! Shared fixtures and builders for the integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
