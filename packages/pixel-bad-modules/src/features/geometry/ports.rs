//! Geometry catalog port
//!
//! The analysis never owns detector geometry. It reads unit topology and
//! surfaces through this trait, so a host can back it with whatever geometry
//! service it has.

use crate::shared::models::{Region, Surface, Topology, UnitId, UnitRecord};

/// Read-only lookup of detector units.
///
/// Every method returns `None` for ids the catalog does not know; callers
/// treat such ids as working (not flagged) units.
pub trait GeometryCatalog {
    /// Topology coordinates of a unit
    fn topology(&self, id: UnitId) -> Option<Topology>;

    /// Geometric surface of a unit
    fn surface(&self, id: UnitId) -> Option<Surface>;

    /// Reverse lookup of a barrel unit by its coordinates
    fn barrel_unit(&self, layer: u32, ladder: u32, module: u32) -> Option<UnitId>;

    fn region(&self, id: UnitId) -> Option<Region> {
        self.topology(id).map(|topology| topology.region())
    }

    fn record(&self, id: UnitId) -> Option<UnitRecord> {
        Some(UnitRecord::new(id, self.topology(id)?, self.surface(id)?))
    }
}

impl<C: GeometryCatalog + ?Sized> GeometryCatalog for &C {
    fn topology(&self, id: UnitId) -> Option<Topology> {
        (**self).topology(id)
    }

    fn surface(&self, id: UnitId) -> Option<Surface> {
        (**self).surface(id)
    }

    fn barrel_unit(&self, layer: u32, ladder: u32, module: u32) -> Option<UnitId> {
        (**self).barrel_unit(layer, ladder, module)
    }
}
