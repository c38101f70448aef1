/*
 * Pixel Bad Modules - dead-region analysis for a pixel tracker
 *
 * Groups non-functional detector units into connected clusters, computes the
 * (phi, z, r) envelope of each cluster, and finds cluster pairs that line up
 * with the beam axis, i.e. regions a straight track could cross twice
 * without a hit.
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (UnitId, Cluster, ClusterSpan, OverlapGroup), angle math
 * - features/    : geometry → region → clustering → span → overlap → report
 * - pipeline/    : End-to-end analysis use case
 * - config/      : YAML configuration
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

// Re-exports
pub use config::{AnalysisConfig, ConfigError, OverlapPasses, ReportOptions, Validatable};
pub use errors::{AnalysisError, Result};
pub use features::clustering::{ClusterBuilder, RegionPartition};
pub use features::geometry::{
    CatalogError, CatalogFormat, DetectorCatalog, EndcapSide, GeometryCatalog, SyntheticGeometry,
};
pub use features::overlap::{z_axis_intersection, OverlapAnalyzer, ZrPoint};
pub use features::region::{RegionRules, RegionStrategy};
pub use features::span::SpanComputer;
pub use pipeline::{AnalysisReport, AnalysisStats, BadModuleAnalysis};
pub use shared::models::{
    AxialRange, Cluster, ClusterSpan, FlaggedSet, Interval, OverlapGroup, OverlapPartner,
    PairClass, PhiSpan, Region, Surface, Topology, UnitId, UnitRecord,
};
