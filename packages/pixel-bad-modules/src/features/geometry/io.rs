//! Catalog files (JSON / YAML)
//!
//! ```yaml
//! version: 1
//! units:
//!   - id: 303042564
//!     topology: { region: barrel, layer: 1, ladder: 3, module: 4 }
//!     surface:
//!       phi: { start: -2.12, end: -1.54 }
//!       z: { start: -6.65, end: 0.0 }
//!       r: { start: 2.7, end: 3.3 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::catalog::{CatalogError, CatalogResult, DetectorCatalog};
use crate::shared::models::UnitRecord;

pub const CATALOG_VERSION: u32 = 1;

/// On-disk catalog schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFileV1 {
    pub version: u32,
    pub units: Vec<UnitRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl DetectorCatalog {
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let file: CatalogFileV1 = serde_json::from_str(json)?;
        Self::from_file_v1(file)
    }

    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let file: CatalogFileV1 = serde_yaml::from_str(yaml)?;
        Self::from_file_v1(file)
    }

    /// Load a catalog, format chosen by extension
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let catalog = match format {
            CatalogFormat::Json => Self::from_json_str(&content)?,
            CatalogFormat::Yaml => Self::from_yaml_str(&content)?,
        };
        tracing::info!("Loaded {} units from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn to_file_v1(&self) -> CatalogFileV1 {
        CatalogFileV1 {
            version: CATALOG_VERSION,
            units: self.records().into_iter().copied().collect(),
        }
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_file_v1())?)
    }

    pub fn to_yaml(&self) -> CatalogResult<String> {
        Ok(serde_yaml::to_string(&self.to_file_v1())?)
    }

    pub fn save(&self, path: impl AsRef<Path>, format: CatalogFormat) -> CatalogResult<()> {
        let content = match format {
            CatalogFormat::Json => self.to_json()?,
            CatalogFormat::Yaml => self.to_yaml()?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    fn from_file_v1(file: CatalogFileV1) -> CatalogResult<Self> {
        if file.version != CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: file.version,
            });
        }
        Self::from_records(file.units)
    }
}
