//! Clusters of flagged units and their geometric envelopes.

use serde::{Deserialize, Serialize};

use super::{Interval, Region, UnitId};
use crate::shared::angles::phi_ranges_overlap;
use crate::shared::constants::sentinel;

/// Connected group of flagged units from one region.
///
/// Units are stored in discovery order; the first unit is the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub region: Region,
    pub units: Vec<UnitId>,
}

impl Cluster {
    pub fn new(region: Region, units: Vec<UnitId>) -> Self {
        Self { region, units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn seed(&self) -> Option<UnitId> {
        self.units.first().copied()
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains(&id)
    }

    /// Member ids in ascending order
    pub fn sorted_units(&self) -> Vec<UnitId> {
        let mut units = self.units.clone();
        units.sort_unstable();
        units
    }
}

/// Angular extent of a cluster.
///
/// `Degenerate` is produced when no unique envelope exists, e.g. a barrel
/// cluster covering a whole ring or an endcap boundary walk that never
/// settles. A degenerate span never overlaps anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PhiSpan {
    Valid(Interval),
    Degenerate,
}

impl PhiSpan {
    pub fn interval(&self) -> Option<Interval> {
        match self {
            PhiSpan::Valid(interval) => Some(*interval),
            PhiSpan::Degenerate => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, PhiSpan::Degenerate)
    }

    pub fn overlaps(&self, other: &PhiSpan) -> bool {
        match (self, other) {
            (PhiSpan::Valid(a), PhiSpan::Valid(b)) => phi_ranges_overlap(a.as_pair(), b.as_pair()),
            _ => false,
        }
    }

    /// Bounds for display; degenerate spans render as `(+ε, -ε)`
    pub fn bounds(&self) -> (f32, f32) {
        match self {
            PhiSpan::Valid(interval) => interval.as_pair(),
            PhiSpan::Degenerate => (sentinel::PHI_BOUND, -sentinel::PHI_BOUND),
        }
    }
}

/// Bounding envelope of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpan {
    pub region: Region,
    /// Barrel layer, 0 for endcap spans
    pub layer: u32,
    /// Endcap disk, 0 for barrel spans
    pub disk: u32,
    pub phi: PhiSpan,
    pub z: Interval,
    pub r: Interval,
}

impl ClusterSpan {
    pub fn locant(&self) -> u32 {
        match self.region {
            Region::Barrel => self.layer,
            Region::Endcap => self.disk,
        }
    }

    pub fn phi_overlaps(&self, other: &ClusterSpan) -> bool {
        self.phi.overlaps(&other.phi)
    }
}
