//! Overlap analysis between cluster spans
//!
//! ```text
//! overlap/
//! ├── projection.rs  # z-axis intersection of a (z, r) line
//! ├── ranges.rs      # axial range per pair class
//! └── analyzer.rs    # threshold filter and grouping
//! ```

pub mod analyzer;
pub mod projection;
pub mod ranges;

pub use analyzer::OverlapAnalyzer;
pub use projection::{z_axis_intersection, ZrPoint};
pub use ranges::{barrel_endcap_overlap_range, barrel_overlap_range, endcap_overlap_range};
