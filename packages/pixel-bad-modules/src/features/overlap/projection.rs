//! Projection of (z, r) corner lines onto the beam axis

use crate::errors::{AnalysisError, Result};

/// A point in the (z, r) half plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZrPoint {
    pub z: f32,
    pub r: f32,
}

impl ZrPoint {
    pub const fn new(z: f32, r: f32) -> Self {
        Self { z, r }
    }
}

/// z at which the straight line through `a` and `b` crosses r = 0.
///
/// Points at equal radius have no crossing and yield
/// [`AnalysisError::DegenerateProjection`]; the range functions only project
/// corners of strictly separated radial spans.
#[inline]
pub fn z_axis_intersection(a: ZrPoint, b: ZrPoint) -> Result<f32> {
    if a.r == b.r {
        return Err(AnalysisError::DegenerateProjection {
            z_a: a.z,
            z_b: b.z,
            r: a.r,
        });
    }
    Ok((b.z - a.z) / (b.r - a.r) * (-a.r) + a.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_line_through_origin() {
        let z = z_axis_intersection(ZrPoint::new(1.0, 1.0), ZrPoint::new(2.0, 2.0)).unwrap();
        assert!(approx(z, 0.0));
    }

    #[test]
    fn test_parallel_to_axis_is_an_error() {
        let result = z_axis_intersection(ZrPoint::new(1.0, 3.0), ZrPoint::new(5.0, 3.0));
        assert!(matches!(
            result,
            Err(AnalysisError::DegenerateProjection { r, .. }) if r == 3.0
        ));
    }

    #[test]
    fn test_order_of_points_does_not_matter() {
        let a = ZrPoint::new(-14.0, 11.0);
        let b = ZrPoint::new(10.0, 2.5);
        let forward = z_axis_intersection(a, b).unwrap();
        let backward = z_axis_intersection(b, a).unwrap();
        assert!(approx(forward, 17.058823));
        assert!(approx(forward, backward));
    }
}
