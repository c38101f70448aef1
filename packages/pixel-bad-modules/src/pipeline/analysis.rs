//! Bad-module analysis use case
//!
//! ```text
//! FlaggedSet ─▶ RegionPartition ─▶ ClusterBuilder ─▶ SpanComputer ─▶ OverlapAnalyzer
//!                (barrel/endcap)     (per region)      (per cluster)    (three passes)
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::{AnalysisConfig, ReportOptions, Validatable};
use crate::errors::Result;
use crate::features::clustering::{ClusterBuilder, RegionPartition};
use crate::features::geometry::GeometryCatalog;
use crate::features::overlap::OverlapAnalyzer;
use crate::features::report::{render_clusters, render_overlap_groups, render_spans, render_units};
use crate::features::span::SpanComputer;
use crate::shared::models::{Cluster, ClusterSpan, FlaggedSet, OverlapGroup, Region, UnitId, UnitRecord};

/// Counters collected during one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub flagged_barrel: usize,
    pub flagged_endcap: usize,
    /// Flagged ids the catalog does not know
    pub skipped_unknown: usize,
    pub barrel_clusters: usize,
    pub endcap_clusters: usize,
    pub degenerate_spans: usize,
    pub overlap_groups: usize,
    pub duration_ms: u64,
}

/// Everything one run produces.
///
/// Infinite axial bounds serialize as `null` in JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub axial_threshold: Option<f32>,
    pub flagged_units: Vec<UnitRecord>,
    pub unknown_units: Vec<UnitId>,
    pub barrel_clusters: Vec<Cluster>,
    pub endcap_clusters: Vec<Cluster>,
    pub barrel_spans: Vec<ClusterSpan>,
    pub endcap_spans: Vec<ClusterSpan>,
    pub overlap_groups: Vec<OverlapGroup>,
    pub stats: AnalysisStats,
}

impl AnalysisReport {
    pub fn clusters(&self, region: Region) -> &[Cluster] {
        match region {
            Region::Barrel => &self.barrel_clusters,
            Region::Endcap => &self.endcap_clusters,
        }
    }

    pub fn spans(&self, region: Region) -> &[ClusterSpan] {
        match region {
            Region::Barrel => &self.barrel_spans,
            Region::Endcap => &self.endcap_spans,
        }
    }

    /// Text report; sections beyond the overlap groups follow `options`
    pub fn render_text<C: GeometryCatalog>(&self, catalog: &C, options: &ReportOptions) -> String {
        let mut out = String::new();

        if options.show_units {
            out.push_str(&render_units(&self.flagged_units));
            out.push('\n');
        }
        if options.show_clusters {
            out.push_str(&render_clusters(catalog, &self.barrel_clusters, &self.barrel_spans));
            out.push_str(&render_clusters(catalog, &self.endcap_clusters, &self.endcap_spans));
        }
        if options.show_spans {
            out.push_str(&render_spans(&self.barrel_spans));
            out.push_str(&render_spans(&self.endcap_spans));
            out.push('\n');
        }

        if self.overlap_groups.is_empty() {
            out.push_str("No overlapping clusters.\n");
        } else {
            out.push_str(&render_overlap_groups(&self.overlap_groups));
        }

        let stats = &self.stats;
        out.push_str(&format!(
            "\n{} flagged ({} barrel, {} endcap, {} unknown), {} clusters ({} barrel, {} endcap, {} degenerate), {} overlap groups\n",
            stats.flagged_barrel + stats.flagged_endcap + stats.skipped_unknown,
            stats.flagged_barrel,
            stats.flagged_endcap,
            stats.skipped_unknown,
            stats.barrel_clusters + stats.endcap_clusters,
            stats.barrel_clusters,
            stats.endcap_clusters,
            stats.degenerate_spans,
            stats.overlap_groups
        ));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the full analysis against one catalog and configuration
pub struct BadModuleAnalysis<'a, C> {
    catalog: &'a C,
    config: AnalysisConfig,
}

impl<'a, C: GeometryCatalog> BadModuleAnalysis<'a, C> {
    /// Fails if `config` does not validate
    pub fn new(catalog: &'a C, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self, flagged: &FlaggedSet) -> Result<AnalysisReport> {
        let start_time = Instant::now();
        info!(
            "Starting bad-module analysis of {} flagged units (threshold: {:?})",
            flagged.len(),
            self.config.axial_threshold
        );

        let partition = RegionPartition::split(self.catalog, flagged);
        let flagged_units: Vec<UnitRecord> = flagged
            .iter()
            .filter_map(|id| self.catalog.record(id))
            .collect();

        let builder = ClusterBuilder::new(self.catalog);
        let barrel_clusters = builder.build_clusters(Region::Barrel, &partition.barrel);
        let endcap_clusters = builder.build_clusters(Region::Endcap, &partition.endcap);

        let computer = SpanComputer::new(self.catalog);
        let barrel_spans = computer.compute_spans(&barrel_clusters)?;
        let endcap_spans = computer.compute_spans(&endcap_clusters)?;
        debug!(
            "Computed {} barrel and {} endcap spans",
            barrel_spans.len(),
            endcap_spans.len()
        );

        let analyzer = OverlapAnalyzer::new(self.config.axial_threshold, self.config.passes);
        let overlap_groups = analyzer.find_overlap_groups(&barrel_spans, &endcap_spans)?;

        let degenerate_spans = barrel_spans
            .iter()
            .chain(&endcap_spans)
            .filter(|span| span.phi.is_degenerate())
            .count();

        let stats = AnalysisStats {
            flagged_barrel: partition.barrel.len(),
            flagged_endcap: partition.endcap.len(),
            skipped_unknown: partition.unknown.len(),
            barrel_clusters: barrel_clusters.len(),
            endcap_clusters: endcap_clusters.len(),
            degenerate_spans,
            overlap_groups: overlap_groups.len(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Analysis finished - {} barrel clusters, {} endcap clusters, {} overlap groups in {}ms",
            stats.barrel_clusters, stats.endcap_clusters, stats.overlap_groups, stats.duration_ms
        );

        Ok(AnalysisReport {
            axial_threshold: self.config.axial_threshold,
            flagged_units,
            unknown_units: partition.unknown,
            barrel_clusters,
            endcap_clusters,
            barrel_spans,
            endcap_spans,
            overlap_groups,
            stats,
        })
    }
}
