//! Barrel rules
//!
//! Ladders form a closed ring per layer, modules a straight line per ladder.
//! A cluster's phi envelope runs from the first ladder of its contiguous run
//! to the last, read from the ladders' module-1 surfaces.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::RegionStrategy;
use crate::features::geometry::GeometryCatalog;
use crate::shared::constants::barrel::{ladders_in_layer, MODULES_PER_LADDER};
use crate::shared::models::{Cluster, FlaggedSet, Interval, PhiSpan, Region, Topology, UnitId};

pub struct BarrelStrategy<'a, C> {
    catalog: &'a C,
}

impl<'a, C: GeometryCatalog> BarrelStrategy<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    fn ladder_phi(&self, layer: u32, ladder: u32) -> Option<Interval> {
        let unit = self.catalog.barrel_unit(layer, ladder, 1)?;
        self.catalog.surface(unit).map(|surface| surface.phi)
    }
}

impl<C: GeometryCatalog> RegionStrategy for BarrelStrategy<'_, C> {
    fn region(&self) -> Region {
        Region::Barrel
    }

    fn neighbors(&self, unit: UnitId, flagged: &FlaggedSet) -> Vec<UnitId> {
        let Some(Topology::Barrel {
            layer,
            ladder,
            module,
        }) = self.catalog.topology(unit)
        else {
            return Vec::new();
        };

        let mut positions = Vec::with_capacity(4);
        match ladders_in_layer(layer) {
            Some(count) => {
                positions.push((ladder_after(ladder, count), module));
                positions.push((ladder_before(ladder, count), module));
            }
            None => debug!("Layer {} has no ladder ring, skipping phi neighbors of {}", layer, unit),
        }
        if module < MODULES_PER_LADDER {
            positions.push((ladder, module + 1));
        }
        if module > 1 {
            positions.push((ladder, module - 1));
        }

        let mut neighbors: Vec<UnitId> = positions
            .into_iter()
            .filter_map(|(ladder, module)| self.catalog.barrel_unit(layer, ladder, module))
            .filter(|&id| id != unit && flagged.contains(id))
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    fn phi_span(&self, cluster: &Cluster) -> PhiSpan {
        let mut layer = None;
        let mut ladders = BTreeSet::new();
        for &unit in &cluster.units {
            if let Some(Topology::Barrel { layer: l, ladder, .. }) = self.catalog.topology(unit) {
                layer.get_or_insert(l);
                ladders.insert(ladder);
            }
        }

        let Some((layer, count)) = layer.and_then(|l| ladders_in_layer(l).map(|n| (l, n))) else {
            return PhiSpan::Degenerate;
        };
        let ladders: Vec<u32> = ladders.into_iter().collect();

        let Some((first, last)) = ring_run_bounds(&ladders, count) else {
            return PhiSpan::Degenerate;
        };

        match (self.ladder_phi(layer, first), self.ladder_phi(layer, last)) {
            (Some(start), Some(end)) => PhiSpan::Valid(Interval::new(start.start, end.end)),
            _ => {
                warn!(
                    "No module-1 unit for ladder {} or {} in layer {}, phi span left degenerate",
                    first, last, layer
                );
                PhiSpan::Degenerate
            }
        }
    }
}

/// Next ladder around a ring of `count` (1-based)
#[inline]
pub fn ladder_after(ladder: u32, count: u32) -> u32 {
    ladder % count + 1
}

/// Previous ladder around a ring of `count` (1-based)
#[inline]
pub fn ladder_before(ladder: u32, count: u32) -> u32 {
    (ladder + count - 2) % count + 1
}

/// First and last ladder of a contiguous run around the ring.
///
/// `ladders` must be sorted ascending. The first ladder is the one whose ring
/// predecessor is missing from the set, the last is the ladder preceding it
/// in sorted order. Returns `None` if every ladder's predecessor is present,
/// i.e. the run closes on itself.
pub fn ring_run_bounds(ladders: &[u32], count: u32) -> Option<(u32, u32)> {
    let len = ladders.len();
    (0..len).find_map(|i| {
        let current = ladders[i];
        let previous = ladders[(i + len - 1) % len];
        (ladder_before(current, count) != previous).then_some((current, previous))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geometry::{DetectorCatalog, SyntheticGeometry};
    use once_cell::sync::Lazy;

    static CATALOG: Lazy<DetectorCatalog> = Lazy::new(|| SyntheticGeometry::phase1().build().unwrap());

    fn id(layer: u32, ladder: u32, module: u32) -> UnitId {
        SyntheticGeometry::barrel_id(layer, ladder, module)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_ring_wraps_both_ways() {
        assert_eq!(ladder_after(12, 12), 1);
        assert_eq!(ladder_before(1, 12), 12);
        assert_eq!(ladder_before(2, 12), 1);
        assert_eq!(ladder_after(5, 12), 6);
    }

    #[test]
    fn test_neighbors_on_ring_and_ladder() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([
            id(1, 1, 1),
            id(1, 12, 1),
            id(1, 2, 1),
            id(1, 1, 2),
            id(1, 3, 1),
            id(2, 1, 1),
        ]);

        let mut expected = vec![id(1, 12, 1), id(1, 2, 1), id(1, 1, 2)];
        expected.sort_unstable();
        assert_eq!(strategy.neighbors(id(1, 1, 1), &flagged), expected);
    }

    #[test]
    fn test_module_line_does_not_wrap() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([id(2, 5, 1), id(2, 5, 8)]);
        assert!(strategy.neighbors(id(2, 5, 8), &flagged).is_empty());
    }

    #[test]
    fn test_unknown_unit_has_no_neighbors() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([UnitId(7)]);
        assert!(strategy.neighbors(UnitId(7), &flagged).is_empty());
    }

    #[test]
    fn test_run_bounds() {
        assert_eq!(ring_run_bounds(&[3, 4], 12), Some((3, 4)));
        assert_eq!(ring_run_bounds(&[1, 12], 12), Some((12, 1)));
        assert_eq!(ring_run_bounds(&[1, 2, 11, 12], 12), Some((11, 2)));
        assert_eq!(ring_run_bounds(&[7], 12), Some((7, 7)));
        let full: Vec<u32> = (1..=12).collect();
        assert_eq!(ring_run_bounds(&full, 12), None);
    }

    #[test]
    fn test_phi_span_of_two_ladders() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let cluster = Cluster::new(Region::Barrel, vec![id(1, 3, 4), id(1, 4, 4), id(1, 4, 5)]);
        let interval = strategy.phi_span(&cluster).interval().unwrap();
        assert!(approx(interval.start, -2.120575));
        assert!(approx(interval.end, -1.021018));
    }

    #[test]
    fn test_phi_span_across_seam() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let cluster = Cluster::new(Region::Barrel, vec![id(1, 1, 1), id(1, 12, 1)]);
        let interval = strategy.phi_span(&cluster).interval().unwrap();

        let ladder_12 = CATALOG.surface(id(1, 12, 1)).unwrap().phi;
        let ladder_1 = CATALOG.surface(id(1, 1, 1)).unwrap().phi;
        assert_eq!(interval.start, ladder_12.start);
        assert_eq!(interval.end, ladder_1.end);
    }

    #[test]
    fn test_full_ring_is_degenerate() {
        let strategy = BarrelStrategy::new(&*CATALOG);
        let units = (1..=12).map(|ladder| id(1, ladder, 2)).collect();
        let cluster = Cluster::new(Region::Barrel, units);
        assert_eq!(strategy.phi_span(&cluster), PhiSpan::Degenerate);
    }

    #[test]
    fn test_missing_module_one_is_degenerate() {
        let records = SyntheticGeometry::phase1()
            .records()
            .into_iter()
            .filter(|record| record.id != id(1, 3, 1));
        let catalog = DetectorCatalog::from_records(records).unwrap();
        let strategy = BarrelStrategy::new(&catalog);

        let cluster = Cluster::new(Region::Barrel, vec![id(1, 3, 4), id(1, 4, 4)]);
        assert!(strategy.phi_span(&cluster).is_degenerate());
    }
}
