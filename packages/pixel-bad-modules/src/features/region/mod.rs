//! Region rules
//!
//! Barrel and endcap units disagree on what "adjacent" means and on how the
//! angular extent of a cluster is found. Each region gets a strategy object;
//! [`RegionRules`] is the closed dispatch over both.
//!
//! ```text
//! region/
//! ├── barrel.rs  # ring / module adjacency, ladder walk
//! └── endcap.rs  # phi-overlap adjacency, boundary walks
//! ```

pub mod barrel;
pub mod endcap;

pub use barrel::BarrelStrategy;
pub use endcap::EndcapStrategy;

use crate::features::geometry::GeometryCatalog;
use crate::shared::models::{Cluster, FlaggedSet, PhiSpan, Region, UnitId};

/// Per-region adjacency and phi envelope rules
pub trait RegionStrategy {
    fn region(&self) -> Region;

    /// Flagged units adjacent to `unit`. Never contains `unit` itself.
    fn neighbors(&self, unit: UnitId, flagged: &FlaggedSet) -> Vec<UnitId>;

    /// Angular extent of a cluster of this region
    fn phi_span(&self, cluster: &Cluster) -> PhiSpan;
}

/// Strategy selected by region
pub enum RegionRules<'a, C> {
    Barrel(BarrelStrategy<'a, C>),
    Endcap(EndcapStrategy<'a, C>),
}

impl<'a, C: GeometryCatalog> RegionRules<'a, C> {
    pub fn for_region(region: Region, catalog: &'a C) -> Self {
        match region {
            Region::Barrel => RegionRules::Barrel(BarrelStrategy::new(catalog)),
            Region::Endcap => RegionRules::Endcap(EndcapStrategy::new(catalog)),
        }
    }
}

impl<C: GeometryCatalog> RegionStrategy for RegionRules<'_, C> {
    fn region(&self) -> Region {
        match self {
            RegionRules::Barrel(strategy) => strategy.region(),
            RegionRules::Endcap(strategy) => strategy.region(),
        }
    }

    fn neighbors(&self, unit: UnitId, flagged: &FlaggedSet) -> Vec<UnitId> {
        match self {
            RegionRules::Barrel(strategy) => strategy.neighbors(unit, flagged),
            RegionRules::Endcap(strategy) => strategy.neighbors(unit, flagged),
        }
    }

    fn phi_span(&self, cluster: &Cluster) -> PhiSpan {
        match self {
            RegionRules::Barrel(strategy) => strategy.phi_span(cluster),
            RegionRules::Endcap(strategy) => strategy.phi_span(cluster),
        }
    }
}
