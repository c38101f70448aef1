//! In-memory geometry catalog

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::ports::GeometryCatalog;
use crate::shared::models::{Region, Surface, Topology, UnitId, UnitRecord};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate unit id {0}")]
    DuplicateUnit(UnitId),

    #[error("Barrel position layer {layer} ladder {ladder} module {module} is used by both {first} and {second}")]
    DuplicateBarrelPosition {
        layer: u32,
        ladder: u32,
        module: u32,
        first: UnitId,
        second: UnitId,
    },

    /// z or r reversed, or a bound that is not finite
    #[error("Unit {id} has an invalid {coordinate} interval [{start}, {end}]")]
    InvalidSurface {
        id: UnitId,
        coordinate: &'static str,
        start: f32,
        end: f32,
    },

    #[error("Unsupported catalog version {found}. Supported versions: 1")]
    UnsupportedVersion { found: u32 },

    #[error("Unsupported catalog file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Detector geometry held in memory
///
/// Maps unit id → record, plus a reverse index from barrel coordinates to
/// unit id for ring-neighbor lookups.
#[derive(Debug, Clone, Default)]
pub struct DetectorCatalog {
    units: FxHashMap<UnitId, UnitRecord>,
    barrel_index: FxHashMap<(u32, u32, u32), UnitId>,
}

impl DetectorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = UnitRecord>,
    {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Add a unit. Ids and barrel coordinates must be unique, and the
    /// surface must pass [`check_surface`].
    pub fn insert(&mut self, record: UnitRecord) -> CatalogResult<()> {
        if self.units.contains_key(&record.id) {
            return Err(CatalogError::DuplicateUnit(record.id));
        }
        check_surface(&record)?;

        if let Topology::Barrel {
            layer,
            ladder,
            module,
        } = record.topology
        {
            if let Some(&first) = self.barrel_index.get(&(layer, ladder, module)) {
                return Err(CatalogError::DuplicateBarrelPosition {
                    layer,
                    ladder,
                    module,
                    first,
                    second: record.id,
                });
            }
            self.barrel_index.insert((layer, ladder, module), record.id);
        }

        self.units.insert(record.id, record);
        Ok(())
    }

    pub fn get(&self, id: UnitId) -> Option<&UnitRecord> {
        self.units.get(&id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All records in ascending id order
    pub fn records(&self) -> Vec<&UnitRecord> {
        let mut records: Vec<&UnitRecord> = self.units.values().collect();
        records.sort_unstable_by_key(|record| record.id);
        records
    }

    /// Records of one region in ascending id order
    pub fn records_in(&self, region: Region) -> Vec<&UnitRecord> {
        let mut records: Vec<&UnitRecord> = self
            .units
            .values()
            .filter(|record| record.region() == region)
            .collect();
        records.sort_unstable_by_key(|record| record.id);
        records
    }
}

/// All bounds finite; z and r ordered `start <= end`. Phi may wrap.
pub fn check_surface(record: &UnitRecord) -> CatalogResult<()> {
    let surface = &record.surface;
    for (coordinate, interval, ordered) in [
        ("phi", surface.phi, false),
        ("z", surface.z, true),
        ("r", surface.r, true),
    ] {
        let finite = interval.start.is_finite() && interval.end.is_finite();
        if !finite || (ordered && interval.start > interval.end) {
            return Err(CatalogError::InvalidSurface {
                id: record.id,
                coordinate,
                start: interval.start,
                end: interval.end,
            });
        }
    }
    Ok(())
}

impl GeometryCatalog for DetectorCatalog {
    fn topology(&self, id: UnitId) -> Option<Topology> {
        self.units.get(&id).map(|record| record.topology)
    }

    fn surface(&self, id: UnitId) -> Option<Surface> {
        self.units.get(&id).map(|record| record.surface)
    }

    fn barrel_unit(&self, layer: u32, ladder: u32, module: u32) -> Option<UnitId> {
        self.barrel_index.get(&(layer, ladder, module)).copied()
    }
}
