//! Synthetic Phase-1-like pixel geometry
//!
//! Builds a complete catalog with the real topology (4 barrel layers of
//! 12/28/44/64 ladders with 8 modules each, 3 endcap disks per side with an
//! inner and an outer ring of blades, 2 panels per blade) and plausible
//! surfaces. Neighboring ladders and blades overlap slightly in phi, and the
//! first ladder / blade of every ring wraps through the ±π seam.
//!
//! Used for tests, benchmarks and the `synthetic` CLI command.

use std::f64::consts::PI;

use super::catalog::{CatalogResult, DetectorCatalog};
use crate::shared::angles::normalize_phi;
use crate::shared::constants::barrel::{LADDERS_PER_LAYER, MODULES_PER_LADDER};
use crate::shared::models::{Interval, Surface, Topology, UnitId, UnitRecord};

/// Side of the interaction point an endcap disk sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndcapSide {
    Minus,
    Plus,
}

impl EndcapSide {
    fn code(self) -> u32 {
        match self {
            EndcapSide::Minus => 1,
            EndcapSide::Plus => 2,
        }
    }

    fn sign(self) -> f64 {
        match self {
            EndcapSide::Minus => -1.0,
            EndcapSide::Plus => 1.0,
        }
    }
}

/// Parameters of the synthetic detector (lengths in cm)
#[derive(Debug, Clone)]
pub struct SyntheticGeometry {
    /// Mean radius of each barrel layer
    pub layer_radii: [f64; 4],
    /// Radial extent of a barrel module below / above the layer radius
    pub module_r_extent: (f64, f64),
    /// Length of one barrel module along z
    pub module_length: f64,
    /// Fractional phi overlap between neighboring ladders
    pub ladder_overlap: f64,
    /// |z| of each endcap disk
    pub disk_z: [f64; 3],
    /// Offset of each panel from the disk plane, and panel half thickness
    pub panel_offset: f64,
    pub panel_half_thickness: f64,
    pub inner_blades: u32,
    pub outer_blades: u32,
    pub inner_ring_r: (f64, f64),
    pub outer_ring_r: (f64, f64),
    /// Fractional phi overlap between neighboring blades
    pub blade_overlap: f64,
}

impl Default for SyntheticGeometry {
    fn default() -> Self {
        Self::phase1()
    }
}

impl SyntheticGeometry {
    pub fn phase1() -> Self {
        Self {
            layer_radii: [2.9, 6.8, 10.9, 16.0],
            module_r_extent: (0.2, 0.4),
            module_length: 6.65,
            ladder_overlap: 0.1,
            disk_z: [32.0, 39.5, 48.5],
            panel_offset: 0.6,
            panel_half_thickness: 0.3,
            inner_blades: 22,
            outer_blades: 34,
            inner_ring_r: (4.5, 10.8),
            outer_ring_r: (9.6, 16.1),
            blade_overlap: 0.2,
        }
    }

    pub fn barrel_id(layer: u32, ladder: u32, module: u32) -> UnitId {
        UnitId((1 << 25) | (layer << 20) | (ladder << 12) | (module << 2))
    }

    pub fn endcap_id(side: EndcapSide, disk: u32, blade: u32, panel: u32) -> UnitId {
        UnitId((2 << 25) | (side.code() << 23) | (disk << 18) | (blade << 10) | (panel << 8))
    }

    pub fn blades_per_disk(&self) -> u32 {
        self.inner_blades + self.outer_blades
    }

    /// Number of units the catalog will contain
    pub fn unit_count(&self) -> usize {
        let barrel: u32 = LADDERS_PER_LAYER.iter().sum::<u32>() * MODULES_PER_LADDER;
        let endcap = 2 * self.disk_z.len() as u32 * self.blades_per_disk() * 2;
        (barrel + endcap) as usize
    }

    pub fn records(&self) -> Vec<UnitRecord> {
        let mut records = Vec::with_capacity(self.unit_count());
        self.push_barrel(&mut records);
        self.push_endcap(&mut records);
        records
    }

    pub fn build(&self) -> CatalogResult<DetectorCatalog> {
        DetectorCatalog::from_records(self.records())
    }

    fn push_barrel(&self, records: &mut Vec<UnitRecord>) {
        let half_length = self.module_length * f64::from(MODULES_PER_LADDER) / 2.0;

        for (index, (&ladders, &radius)) in LADDERS_PER_LAYER
            .iter()
            .zip(self.layer_radii.iter())
            .enumerate()
        {
            let layer = index as u32 + 1;
            let r = Interval::new(
                (radius - self.module_r_extent.0) as f32,
                (radius + self.module_r_extent.1) as f32,
            );

            for ladder in 1..=ladders {
                let phi = ring_phi(ladder, ladders, self.ladder_overlap);

                for module in 1..=MODULES_PER_LADDER {
                    let z_start = -half_length + f64::from(module - 1) * self.module_length;
                    let z = Interval::new(z_start as f32, (z_start + self.module_length) as f32);

                    records.push(UnitRecord::new(
                        Self::barrel_id(layer, ladder, module),
                        Topology::Barrel {
                            layer,
                            ladder,
                            module,
                        },
                        Surface::new(phi, z, r),
                    ));
                }
            }
        }
    }

    fn push_endcap(&self, records: &mut Vec<UnitRecord>) {
        for side in [EndcapSide::Minus, EndcapSide::Plus] {
            for (index, &disk_z) in self.disk_z.iter().enumerate() {
                let disk = index as u32 + 1;

                for blade in 1..=self.blades_per_disk() {
                    let (phi, r) = if blade <= self.inner_blades {
                        (
                            ring_phi(blade, self.inner_blades, self.blade_overlap),
                            self.inner_ring_r,
                        )
                    } else {
                        (
                            ring_phi(blade - self.inner_blades, self.outer_blades, self.blade_overlap),
                            self.outer_ring_r,
                        )
                    };
                    let r = Interval::new(r.0 as f32, r.1 as f32);

                    for panel in 1..=2u32 {
                        let offset = if panel == 1 {
                            -self.panel_offset
                        } else {
                            self.panel_offset
                        };
                        let center = side.sign() * (disk_z + offset);
                        let z = Interval::new(
                            (center - self.panel_half_thickness) as f32,
                            (center + self.panel_half_thickness) as f32,
                        );

                        records.push(UnitRecord::new(
                            Self::endcap_id(side, disk, blade, panel),
                            Topology::Endcap { disk, blade, panel },
                            Surface::new(phi, z, r),
                        ));
                    }
                }
            }
        }
    }
}

/// Phi interval of the `position`-th (1-based) of `count` elements evenly
/// spaced around a ring starting at -π, widened by `overlap`.
fn ring_phi(position: u32, count: u32, overlap: f64) -> Interval {
    let pitch = 2.0 * PI / f64::from(count);
    let center = -PI + (f64::from(position) - 0.5) * pitch;
    let half_width = pitch / 2.0 * (1.0 + overlap);
    Interval::new(
        normalize_phi((center - half_width) as f32),
        normalize_phi((center + half_width) as f32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geometry::GeometryCatalog;
    use crate::shared::angles::phi_ranges_overlap;

    #[test]
    fn test_unit_count() {
        let geometry = SyntheticGeometry::phase1();
        assert_eq!(geometry.unit_count(), 1184 + 672);
        assert_eq!(geometry.build().unwrap().len(), geometry.unit_count());
    }

    #[test]
    fn test_first_ladder_wraps_seam() {
        let phi = ring_phi(1, 12, 0.1);
        assert!(phi.start > phi.end);
        let phi = ring_phi(6, 12, 0.1);
        assert!(phi.start < phi.end);
    }

    #[test]
    fn test_neighboring_ladders_overlap_in_phi() {
        for ladder in 1..=12 {
            let next = ladder % 12 + 1;
            let a = ring_phi(ladder, 12, 0.1);
            let b = ring_phi(next, 12, 0.1);
            assert!(phi_ranges_overlap(a.as_pair(), b.as_pair()));
        }
        let a = ring_phi(3, 12, 0.1);
        let c = ring_phi(5, 12, 0.1);
        assert!(!phi_ranges_overlap(a.as_pair(), c.as_pair()));
    }

    #[test]
    fn test_barrel_lookup_matches_ids() {
        let catalog = SyntheticGeometry::phase1().build().unwrap();
        assert_eq!(
            catalog.barrel_unit(3, 44, 8),
            Some(SyntheticGeometry::barrel_id(3, 44, 8))
        );
        assert_eq!(catalog.barrel_unit(1, 13, 1), None);
    }

    #[test]
    fn test_endcap_sides_are_mirrored() {
        let catalog = SyntheticGeometry::phase1().build().unwrap();
        let plus = catalog
            .surface(SyntheticGeometry::endcap_id(EndcapSide::Plus, 2, 5, 1))
            .unwrap();
        let minus = catalog
            .surface(SyntheticGeometry::endcap_id(EndcapSide::Minus, 2, 5, 1))
            .unwrap();
        assert!(plus.z.start > 0.0);
        assert!(minus.z.start < 0.0);
        assert!(minus.z.start < minus.z.end);
        assert!((plus.z.start + minus.z.end).abs() < 1e-4);
    }
}
