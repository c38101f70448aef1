//! Pipeline
//!
//! Wires the features into the end-to-end analysis.

pub mod analysis;

pub use analysis::{AnalysisReport, AnalysisStats, BadModuleAnalysis};
