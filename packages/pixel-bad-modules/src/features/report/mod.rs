//! Text rendering of units, clusters, spans and overlap groups

pub mod format;
pub mod render;

pub use format::{significant, ClusterSpanInfo, UnitInfo};
pub use render::{render_clusters, render_overlap_groups, render_spans, render_units};
