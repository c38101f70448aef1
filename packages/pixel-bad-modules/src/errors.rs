//! Error types for pixel-bad-modules
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::geometry::CatalogError;
use crate::shared::models::UnitId;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A cluster member has no entry in the geometry catalog
    #[error("Unit {0} is not present in the geometry catalog")]
    UnknownUnit(UnitId),

    #[error("Cannot compute the span of an empty cluster")]
    EmptyCluster,

    /// Two corner points at the same radius were handed to the axial projection.
    /// Callers are required to rule this out before projecting.
    #[error("Degenerate axial projection: both points at r = {r} (z = {z_a}, z = {z_b})")]
    DegenerateProjection { z_a: f32, z_b: f32, r: f32 },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid flagged-unit list: {0}")]
    FlaggedList(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn flagged_list<E: std::fmt::Display>(e: E) -> Self {
        Self::FlaggedList(e.to_string())
    }

    /// Internal-consistency failures abort the analysis; everything else is
    /// an input problem the caller can fix.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DegenerateProjection { .. } | Self::EmptyCluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_projection_is_internal() {
        let err = AnalysisError::DegenerateProjection {
            z_a: 1.0,
            z_b: 2.0,
            r: 3.0,
        };
        assert!(err.is_internal());
        assert!(err.to_string().contains("r = 3"));
    }

    #[test]
    fn test_input_errors_are_not_internal() {
        assert!(!AnalysisError::UnknownUnit(UnitId(42)).is_internal());
        assert!(!AnalysisError::flagged_list("bad token 'x'").is_internal());
    }
}
