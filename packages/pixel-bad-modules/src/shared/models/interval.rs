use serde::{Deserialize, Serialize};

/// Closed interval `[start, end]` of a single cylindrical coordinate.
///
/// For phi, `start > end` marks an interval wrapping through ±π. For z and r
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn as_pair(&self) -> (f32, f32) {
        (self.start, self.end)
    }

    /// Smallest interval covering both (non-circular coordinates only)
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<(f32, f32)> for Interval {
    fn from((start, end): (f32, f32)) -> Self {
        Self::new(start, end)
    }
}
