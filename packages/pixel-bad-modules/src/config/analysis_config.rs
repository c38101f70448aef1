//! Analysis configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;

/// Which pair classes the overlap analysis compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlapPasses {
    pub barrel_barrel: bool,
    pub endcap_endcap: bool,
    pub barrel_endcap: bool,
}

impl Default for OverlapPasses {
    fn default() -> Self {
        Self {
            barrel_barrel: true,
            endcap_endcap: true,
            barrel_endcap: true,
        }
    }
}

/// Sections of the text report beyond the overlap groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    pub show_units: bool,
    pub show_clusters: bool,
    pub show_spans: bool,
}

/// Top-level analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Half width of the beam-axis window an overlap range must meet.
    /// `None` accepts every range.
    pub axial_threshold: Option<f32>,
    pub passes: OverlapPasses,
    pub report: ReportOptions,
}

impl AnalysisConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.axial_threshold = Some(threshold);
        self
    }

    pub fn with_passes(mut self, passes: OverlapPasses) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_report(mut self, report: ReportOptions) -> Self {
        self.report = report;
        self
    }

    /// Load and validate a v1 YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(yaml)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            axial_threshold: file.axial_threshold,
            passes: file.passes,
            report: file.report,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            axial_threshold: self.axial_threshold,
            passes: self.passes,
            report: self.report,
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(threshold) = self.axial_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::range_with_hint(
                    "axial_threshold",
                    threshold,
                    "Use a finite value >= 0, or omit the field for no limit",
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}
