//! Multi-line text reports

use std::fmt::Write;

use super::format::{significant, ClusterSpanInfo, UnitInfo};
use crate::features::geometry::GeometryCatalog;
use crate::shared::models::{Cluster, ClusterSpan, OverlapGroup, Region, UnitRecord};

/// Units grouped under a header per region, in the given order
pub fn render_units(units: &[UnitRecord]) -> String {
    let mut out = String::new();
    for (region, header) in [(Region::Barrel, "Barrel units:"), (Region::Endcap, "Endcap units:")] {
        let mut lines = units.iter().filter(|record| record.region() == region).peekable();
        if lines.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "{}", header);
        for record in lines {
            let _ = writeln!(out, "{}", UnitInfo(record));
        }
    }
    out
}

/// Each cluster as its span line followed by one line per member.
///
/// `clusters` and `spans` are parallel. Members unknown to the catalog are
/// listed by id only.
pub fn render_clusters<C: GeometryCatalog>(
    catalog: &C,
    clusters: &[Cluster],
    spans: &[ClusterSpan],
) -> String {
    let mut out = String::new();
    for (cluster, span) in clusters.iter().zip(spans) {
        let _ = writeln!(out, "{:<16}{}", "Cluster:", ClusterSpanInfo(span));
        for &unit in &cluster.units {
            match catalog.record(unit) {
                Some(record) => {
                    let _ = writeln!(out, "{}", UnitInfo(&record));
                }
                None => {
                    let _ = writeln!(out, "id:[{}]; <not in catalog>", unit);
                }
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_spans(spans: &[ClusterSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let _ = writeln!(out, "{}", ClusterSpanInfo(span));
    }
    out
}

/// One block per group: header, anchor line, then each partner with the
/// axial range it shares with the anchor.
pub fn render_overlap_groups(groups: &[OverlapGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "Overlapping clusters ({}):", group.class);
        let _ = writeln!(out, "{}", ClusterSpanInfo(&group.anchor));
        for partner in &group.partners {
            let _ = writeln!(
                out,
                "{}axial:<{},{}>",
                ClusterSpanInfo(&partner.span),
                significant(partner.range.lower, 6, true),
                significant(partner.range.upper, 6, true)
            );
        }
    }
    out
}
