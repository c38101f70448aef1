//! Endcap rules
//!
//! Two endcap units are adjacent when they sit on the same disk, on the same
//! side of the interaction point, and their phi intervals overlap. The phi
//! envelope is found by walking from member to overlapping member, once
//! clockwise and once counter-clockwise, until no member extends further.

use tracing::{debug, warn};

use super::RegionStrategy;
use crate::features::geometry::GeometryCatalog;
use crate::shared::angles::{phi_more_clockwise, phi_more_counterclockwise, phi_ranges_overlap};
use crate::shared::models::{Cluster, FlaggedSet, Interval, PhiSpan, Region, Topology, UnitId};

pub struct EndcapStrategy<'a, C> {
    catalog: &'a C,
}

impl<'a, C: GeometryCatalog> EndcapStrategy<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }
}

impl<C: GeometryCatalog> RegionStrategy for EndcapStrategy<'_, C> {
    fn region(&self) -> Region {
        Region::Endcap
    }

    fn neighbors(&self, unit: UnitId, flagged: &FlaggedSet) -> Vec<UnitId> {
        let Some(record) = self.catalog.record(unit) else {
            return Vec::new();
        };
        let Topology::Endcap { disk, .. } = record.topology else {
            return Vec::new();
        };
        let phi = record.surface.phi.as_pair();
        let z_start = record.surface.z.start;

        flagged
            .iter()
            .filter(|&other| other != unit)
            .filter_map(|other| self.catalog.record(other))
            .filter(|other| {
                matches!(other.topology, Topology::Endcap { disk: d, .. } if d == disk)
                    && other.surface.z.start * z_start > 0.0
                    && phi_ranges_overlap(phi, other.surface.phi.as_pair())
            })
            .map(|other| other.id)
            .collect()
    }

    fn phi_span(&self, cluster: &Cluster) -> PhiSpan {
        let phis: Vec<Interval> = cluster
            .units
            .iter()
            .filter_map(|&unit| self.catalog.surface(unit).map(|surface| surface.phi))
            .collect();
        if phis.is_empty() {
            return PhiSpan::Degenerate;
        }

        let clockwise = walk_to_boundary(&phis, |candidate, current| {
            phi_more_clockwise(candidate.start, current.start)
        });
        let counterclockwise = walk_to_boundary(&phis, |candidate, current| {
            phi_more_counterclockwise(candidate.end, current.end)
        });

        match (clockwise, counterclockwise) {
            (Some(first), Some(last)) => PhiSpan::Valid(Interval::new(phis[first].start, phis[last].end)),
            _ => {
                warn!(
                    "Endcap cluster seeded at {:?} has no phi boundary, span left degenerate",
                    cluster.seed()
                );
                PhiSpan::Degenerate
            }
        }
    }
}

/// Walk from the first interval to overlapping intervals for as long as
/// `advances(candidate, current)` holds, and return the index reached.
///
/// Returns `None` once the walk exceeds `phis.len() + 1` steps, which
/// happens when the members close a ring.
pub fn walk_to_boundary<F>(phis: &[Interval], advances: F) -> Option<usize>
where
    F: Fn(&Interval, &Interval) -> bool,
{
    let mut current = 0;
    let mut steps = 0;

    while let Some(next) = phis.iter().enumerate().position(|(index, candidate)| {
        index != current
            && phi_ranges_overlap(phis[current].as_pair(), candidate.as_pair())
            && advances(candidate, &phis[current])
    }) {
        steps += 1;
        if steps > phis.len() + 1 {
            debug!("Boundary walk exceeded {} steps", phis.len() + 1);
            return None;
        }
        current = next;
    }

    Some(current)
}
