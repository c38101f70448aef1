//! Cluster envelope computation

use tracing::warn;

use crate::errors::{AnalysisError, Result};
use crate::features::geometry::GeometryCatalog;
use crate::features::region::{RegionRules, RegionStrategy};
use crate::shared::models::{Cluster, ClusterSpan, Interval, Topology};

/// Turns clusters into [`ClusterSpan`]s.
///
/// The z and r envelopes are the hull of the member surfaces; the phi
/// envelope comes from the rules of the cluster's region.
pub struct SpanComputer<'a, C> {
    catalog: &'a C,
}

impl<'a, C: GeometryCatalog> SpanComputer<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    pub fn compute_span(&self, cluster: &Cluster) -> Result<ClusterSpan> {
        let seed = cluster.seed().ok_or(AnalysisError::EmptyCluster)?;
        let topology = self
            .catalog
            .topology(seed)
            .ok_or(AnalysisError::UnknownUnit(seed))?;

        let (layer, disk) = match topology {
            Topology::Barrel { layer, .. } => (layer, 0),
            Topology::Endcap { disk, .. } => (0, disk),
        };
        let region = topology.region();

        let (z, r) = self.envelope(cluster)?;
        let phi = RegionRules::for_region(region, self.catalog).phi_span(cluster);
        if phi.is_degenerate() {
            warn!(
                "Degenerate phi span for {} cluster of {} units seeded at {}",
                region,
                cluster.len(),
                seed
            );
        }

        Ok(ClusterSpan {
            region,
            layer,
            disk,
            phi,
            z,
            r,
        })
    }

    pub fn compute_spans(&self, clusters: &[Cluster]) -> Result<Vec<ClusterSpan>> {
        clusters.iter().map(|cluster| self.compute_span(cluster)).collect()
    }

    /// Hull of member z and r intervals
    fn envelope(&self, cluster: &Cluster) -> Result<(Interval, Interval)> {
        let mut envelope: Option<(Interval, Interval)> = None;
        for &unit in &cluster.units {
            let surface = self
                .catalog
                .surface(unit)
                .ok_or(AnalysisError::UnknownUnit(unit))?;
            envelope = Some(match envelope {
                Some((z, r)) => (z.hull(&surface.z), r.hull(&surface.r)),
                None => (surface.z, surface.r),
            });
        }
        envelope.ok_or(AnalysisError::EmptyCluster)
    }
}
