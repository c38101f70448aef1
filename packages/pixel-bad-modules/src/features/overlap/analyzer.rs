//! Overlap grouping
//!
//! ```text
//! barrel × barrel   each unordered pair once, anchor = earlier span
//! endcap × endcap   each unordered pair once, anchor = earlier span
//! barrel × endcap   anchor = barrel span, partners = endcap spans
//! ```
//!
//! A pair qualifies when the phi spans overlap and the axial range meets
//! `[-threshold, +threshold]`.

use tracing::debug;

use super::ranges::{barrel_endcap_overlap_range, barrel_overlap_range, endcap_overlap_range};
use crate::config::OverlapPasses;
use crate::errors::Result;
use crate::shared::models::{AxialRange, ClusterSpan, OverlapGroup, OverlapPartner, PairClass};

#[derive(Debug, Clone)]
pub struct OverlapAnalyzer {
    threshold: f32,
    passes: OverlapPasses,
}

impl Default for OverlapAnalyzer {
    fn default() -> Self {
        Self::new(None, OverlapPasses::default())
    }
}

impl OverlapAnalyzer {
    /// `threshold: None` accepts every axial range
    pub fn new(threshold: Option<f32>, passes: OverlapPasses) -> Self {
        Self {
            threshold: threshold.unwrap_or(f32::INFINITY),
            passes,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Groups of overlapping spans, in pass order barrel×barrel,
    /// endcap×endcap, barrel×endcap. Within a pass groups follow anchor
    /// order and partners follow candidate order.
    pub fn find_overlap_groups(
        &self,
        barrel: &[ClusterSpan],
        endcap: &[ClusterSpan],
    ) -> Result<Vec<OverlapGroup>> {
        let mut groups = Vec::new();

        if self.passes.barrel_barrel {
            for (i, anchor) in barrel.iter().enumerate() {
                groups.extend(self.group_for(
                    PairClass::BarrelBarrel,
                    anchor,
                    &barrel[i + 1..],
                    barrel_overlap_range,
                )?);
            }
        }

        if self.passes.endcap_endcap {
            for (i, anchor) in endcap.iter().enumerate() {
                groups.extend(self.group_for(
                    PairClass::EndcapEndcap,
                    anchor,
                    &endcap[i + 1..],
                    endcap_overlap_range,
                )?);
            }
        }

        if self.passes.barrel_endcap {
            for anchor in barrel {
                groups.extend(self.group_for(
                    PairClass::BarrelEndcap,
                    anchor,
                    endcap,
                    barrel_endcap_overlap_range,
                )?);
            }
        }

        debug!(
            "Found {} overlap groups (threshold {})",
            groups.len(),
            self.threshold
        );
        Ok(groups)
    }

    fn group_for<F>(
        &self,
        class: PairClass,
        anchor: &ClusterSpan,
        candidates: &[ClusterSpan],
        range_of: F,
    ) -> Result<Option<OverlapGroup>>
    where
        F: Fn(&ClusterSpan, &ClusterSpan) -> Result<Option<AxialRange>>,
    {
        let mut group = OverlapGroup::new(class, *anchor);

        for candidate in candidates {
            if !anchor.phi_overlaps(candidate) {
                continue;
            }
            if let Some(range) = range_of(anchor, candidate)? {
                if range.within(self.threshold) {
                    group.partners.push(OverlapPartner {
                        span: *candidate,
                        range,
                    });
                }
            }
        }

        Ok(group.has_partners().then_some(group))
    }
}
