//! Test data builders

use pixel_bad_modules::{DetectorCatalog, Interval, Surface, Topology, UnitId, UnitRecord};

/// Builder for small hand-made catalogs
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    records: Vec<UnitRecord>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a barrel unit with the given surface
    pub fn with_barrel(
        mut self,
        id: u32,
        (layer, ladder, module): (u32, u32, u32),
        phi: (f32, f32),
        z: (f32, f32),
        r: (f32, f32),
    ) -> Self {
        self.records.push(UnitRecord::new(
            UnitId(id),
            Topology::Barrel {
                layer,
                ladder,
                module,
            },
            Surface::new(Interval::from(phi), Interval::from(z), Interval::from(r)),
        ));
        self
    }

    /// Add an endcap unit with the given surface
    pub fn with_endcap(
        mut self,
        id: u32,
        (disk, blade, panel): (u32, u32, u32),
        phi: (f32, f32),
        z: (f32, f32),
        r: (f32, f32),
    ) -> Self {
        self.records.push(UnitRecord::new(
            UnitId(id),
            Topology::Endcap { disk, blade, panel },
            Surface::new(Interval::from(phi), Interval::from(z), Interval::from(r)),
        ));
        self
    }

    pub fn build(self) -> DetectorCatalog {
        DetectorCatalog::from_records(self.records).expect("builder catalog is consistent")
    }
}
