//! Splitting the flagged set by region

use serde::Serialize;
use tracing::warn;

use crate::features::geometry::GeometryCatalog;
use crate::shared::models::{FlaggedSet, Region, UnitId};

/// Flagged ids sorted into barrel and endcap, plus the ids the catalog does
/// not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionPartition {
    pub barrel: FlaggedSet,
    pub endcap: FlaggedSet,
    pub unknown: Vec<UnitId>,
}

impl RegionPartition {
    pub fn split<C: GeometryCatalog>(catalog: &C, flagged: &FlaggedSet) -> Self {
        let mut partition = Self::default();
        for id in flagged.iter() {
            match catalog.region(id) {
                Some(Region::Barrel) => {
                    partition.barrel.insert(id);
                }
                Some(Region::Endcap) => {
                    partition.endcap.insert(id);
                }
                None => partition.unknown.push(id),
            }
        }

        if !partition.unknown.is_empty() {
            warn!(
                "Dropping {} flagged ids unknown to the geometry catalog (first: {})",
                partition.unknown.len(),
                partition.unknown[0]
            );
        }
        partition
    }

    pub fn get(&self, region: Region) -> &FlaggedSet {
        match region {
            Region::Barrel => &self.barrel,
            Region::Endcap => &self.endcap,
        }
    }
}
