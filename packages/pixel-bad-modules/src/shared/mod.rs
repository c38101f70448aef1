//! Shared module - Common types and utilities
//!
//! Types shared across all features. Nothing here depends on the catalog.

pub mod angles;
pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
