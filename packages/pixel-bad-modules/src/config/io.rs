//! Configuration I/O
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! axial_threshold: 15.0     # omit for unbounded
//! passes:
//!   barrel_barrel: true
//!   endcap_endcap: true
//!   barrel_endcap: false
//! report:
//!   show_spans: true
//! ```

use serde::{Deserialize, Serialize};

use super::analysis_config::{OverlapPasses, ReportOptions};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axial_threshold: Option<f32>,

    #[serde(default)]
    pub passes: OverlapPasses,

    #[serde(default)]
    pub report: ReportOptions,
}
