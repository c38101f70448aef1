//! Flood-fill clustering of flagged units

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

use crate::features::geometry::GeometryCatalog;
use crate::features::region::{RegionRules, RegionStrategy};
use crate::shared::models::{Cluster, FlaggedSet, Region, UnitId};

/// Groups flagged units of one region into connected clusters.
///
/// Seeds are taken in ascending id order; each cluster lists its units in
/// breadth-first discovery order with the seed first.
pub struct ClusterBuilder<'a, C> {
    catalog: &'a C,
}

impl<'a, C: GeometryCatalog> ClusterBuilder<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Partition the flagged units of `region` into clusters.
    ///
    /// Units of the other region, and units the catalog does not know, are
    /// ignored.
    pub fn build_clusters(&self, region: Region, flagged: &FlaggedSet) -> Vec<Cluster> {
        let rules = RegionRules::for_region(region, self.catalog);
        let mut visited: FxHashSet<UnitId> = FxHashSet::default();
        let mut clusters = Vec::new();

        for seed in flagged.iter() {
            if visited.contains(&seed) || self.catalog.region(seed) != Some(region) {
                continue;
            }
            clusters.push(reachable_cluster(&rules, seed, flagged, &mut visited));
        }

        debug!(
            "Built {} {} clusters from {} flagged units",
            clusters.len(),
            region,
            flagged.len()
        );
        clusters
    }
}

/// BFS from `seed` over flagged neighbors not yet visited
fn reachable_cluster<S: RegionStrategy>(
    rules: &S,
    seed: UnitId,
    flagged: &FlaggedSet,
    visited: &mut FxHashSet<UnitId>,
) -> Cluster {
    let mut units = vec![seed];
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        for neighbor in rules.neighbors(current, flagged) {
            if visited.insert(neighbor) {
                units.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    Cluster::new(rules.region(), units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geometry::{DetectorCatalog, EndcapSide, SyntheticGeometry};
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    static CATALOG: Lazy<DetectorCatalog> = Lazy::new(|| SyntheticGeometry::phase1().build().unwrap());

    fn barrel(layer: u32, ladder: u32, module: u32) -> UnitId {
        SyntheticGeometry::barrel_id(layer, ladder, module)
    }

    fn endcap(disk: u32, blade: u32, panel: u32) -> UnitId {
        SyntheticGeometry::endcap_id(EndcapSide::Plus, disk, blade, panel)
    }

    #[test]
    fn test_empty_flagged_set() {
        let builder = ClusterBuilder::new(&*CATALOG);
        assert!(builder.build_clusters(Region::Barrel, &FlaggedSet::new()).is_empty());
    }

    #[test]
    fn test_single_unit_cluster() {
        let builder = ClusterBuilder::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([barrel(2, 7, 3)]);
        let clusters = builder.build_clusters(Region::Barrel, &flagged);
        assert_eq!(clusters, vec![Cluster::new(Region::Barrel, vec![barrel(2, 7, 3)])]);
    }

    #[test]
    fn test_chain_along_ladder_and_ring() {
        let builder = ClusterBuilder::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([
            barrel(1, 3, 4),
            barrel(1, 3, 5),
            barrel(1, 4, 5),
            barrel(1, 9, 1),
        ]);

        let clusters = builder.build_clusters(Region::Barrel, &flagged);
        assert_eq!(clusters.len(), 2);
        assert_eq!(
            clusters[0].sorted_units(),
            vec![barrel(1, 3, 4), barrel(1, 3, 5), barrel(1, 4, 5)]
        );
        assert_eq!(clusters[1].units, vec![barrel(1, 9, 1)]);
    }

    #[test]
    fn test_seed_is_smallest_id() {
        let builder = ClusterBuilder::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([barrel(1, 12, 1), barrel(1, 1, 1)]);
        let clusters = builder.build_clusters(Region::Barrel, &flagged);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].seed(), Some(barrel(1, 1, 1)));
    }

    #[test]
    fn test_other_region_and_unknown_ids_ignored() {
        let builder = ClusterBuilder::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([barrel(1, 1, 1), endcap(1, 1, 1), UnitId(3)]);

        let barrel_clusters = builder.build_clusters(Region::Barrel, &flagged);
        let endcap_clusters = builder.build_clusters(Region::Endcap, &flagged);
        assert_eq!(barrel_clusters.len(), 1);
        assert_eq!(endcap_clusters.len(), 1);
        assert_eq!(endcap_clusters[0].units, vec![endcap(1, 1, 1)]);
    }

    #[test]
    fn test_endcap_panels_join_through_shared_blade() {
        let builder = ClusterBuilder::new(&*CATALOG);
        let flagged = FlaggedSet::from_ids([endcap(2, 5, 1), endcap(2, 5, 2), endcap(2, 6, 2), endcap(2, 9, 1)]);

        let clusters = builder.build_clusters(Region::Endcap, &flagged);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 3);
    }
}
