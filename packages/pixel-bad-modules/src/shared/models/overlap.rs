//! Overlap results between cluster envelopes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClusterSpan;

/// Interval on the beam axis from which two clusters are seen overlapping.
///
/// Either bound may be infinite when the overlap region is open on one side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxialRange {
    pub lower: f32,
    pub upper: f32,
}

impl AxialRange {
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// True if the range meets `[-threshold, +threshold]`
    pub fn within(&self, threshold: f32) -> bool {
        -threshold <= self.upper && self.lower <= threshold
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }
}

/// Which pair of regions a comparison is between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairClass {
    BarrelBarrel,
    EndcapEndcap,
    BarrelEndcap,
}

impl PairClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairClass::BarrelBarrel => "barrel-barrel",
            PairClass::EndcapEndcap => "endcap-endcap",
            PairClass::BarrelEndcap => "barrel-endcap",
        }
    }
}

impl fmt::Display for PairClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span overlapping a group's anchor, with the axial range of the overlap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapPartner {
    pub span: ClusterSpan,
    pub range: AxialRange,
}

/// An anchor span together with every span it overlaps.
///
/// Membership is relative to the anchor only; partners need not overlap
/// each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup {
    pub class: PairClass,
    pub anchor: ClusterSpan,
    pub partners: Vec<OverlapPartner>,
}

impl OverlapGroup {
    pub fn new(class: PairClass, anchor: ClusterSpan) -> Self {
        Self {
            class,
            anchor,
            partners: Vec::new(),
        }
    }

    /// Anchor first, then partners in discovery order
    pub fn spans(&self) -> impl Iterator<Item = &ClusterSpan> {
        std::iter::once(&self.anchor).chain(self.partners.iter().map(|p| &p.span))
    }

    /// Number of spans including the anchor
    pub fn len(&self) -> usize {
        1 + self.partners.len()
    }

    pub fn has_partners(&self) -> bool {
        !self.partners.is_empty()
    }
}
