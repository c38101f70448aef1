//! Angle utilities for phi intervals.
//!
//! Phi intervals are `(start, end)` pairs with both bounds in `[-π, π]`.
//! An interval with `start > end` wraps through the ±π seam.

use std::f32::consts::PI;

/// Wraps an angle into `(-π, π]`.
#[inline]
pub fn normalize_phi(angle: f32) -> f32 {
    let two_pi = 2.0 * PI;
    let mut norm = (angle + PI).rem_euclid(two_pi) - PI;
    if norm <= -PI {
        norm += two_pi;
    }
    norm
}

/// True if `(start, end)` wraps through the ±π seam.
#[inline]
pub fn is_inverted(range: (f32, f32)) -> bool {
    range.0 > range.1
}

/// Circular overlap test for two phi intervals.
///
/// Symmetric and reflexive. Two wrapping intervals always overlap since both
/// contain the seam.
#[inline]
pub fn phi_ranges_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    let (x1, x2) = a;
    let (y1, y2) = b;
    match (is_inverted(a), is_inverted(b)) {
        (false, false) => x1 <= y2 && y1 <= x2,
        (true, false) | (false, true) => y1 <= x2 || x1 <= y2,
        (true, true) => true,
    }
}

/// True if `phi_a` lies strictly clockwise of `phi_b`.
///
/// Only meaningful for angles in a common half plane, which holds for
/// overlapping detector units.
#[inline]
pub fn phi_more_clockwise(phi_a: f32, phi_b: f32) -> bool {
    let (xa, ya) = (phi_a.cos(), phi_a.sin());
    let (xb, yb) = (phi_b.cos(), phi_b.sin());
    if xa >= 0.0 && xb >= 0.0 {
        ya < yb
    } else if ya >= 0.0 && yb >= 0.0 {
        xa > xb
    } else if xa <= 0.0 && xb <= 0.0 {
        ya > yb
    } else if ya <= 0.0 && yb <= 0.0 {
        xa < xb
    } else {
        false
    }
}

/// True if `phi_a` lies strictly counter-clockwise of `phi_b`.
#[inline]
pub fn phi_more_counterclockwise(phi_a: f32, phi_b: f32) -> bool {
    let (xa, ya) = (phi_a.cos(), phi_a.sin());
    let (xb, yb) = (phi_b.cos(), phi_b.sin());
    if xa >= 0.0 && xb >= 0.0 {
        ya > yb
    } else if ya >= 0.0 && yb >= 0.0 {
        xa < xb
    } else if xa <= 0.0 && xb <= 0.0 {
        ya < yb
    } else if ya <= 0.0 && yb <= 0.0 {
        xa > xb
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn normalize_phi_wraps_into_range() {
        assert!(approx_eq(normalize_phi(0.5), 0.5));
        assert!(approx_eq(normalize_phi(PI + 0.25), -PI + 0.25));
        assert!(approx_eq(normalize_phi(-PI - 0.25), PI - 0.25));
        assert!(approx_eq(normalize_phi(PI), PI));
    }

    #[test]
    fn overlap_normal_intervals() {
        assert!(phi_ranges_overlap((0.0, 1.0), (0.5, 1.5)));
        assert!(phi_ranges_overlap((0.0, 1.0), (1.0, 2.0)));
        assert!(!phi_ranges_overlap((0.0, 1.0), (1.1, 2.0)));
    }

    #[test]
    fn overlap_one_inverted() {
        // (3.0, -3.0) wraps through the seam
        assert!(phi_ranges_overlap((3.0, -3.0), (-3.1, -2.0)));
        assert!(phi_ranges_overlap((2.0, 3.1), (3.0, -3.0)));
        assert!(!phi_ranges_overlap((3.0, -3.0), (-1.0, 1.0)));
    }

    #[test]
    fn overlap_both_inverted() {
        assert!(phi_ranges_overlap((3.0, -3.0), (3.1, -3.1)));
    }

    #[test]
    fn overlap_is_symmetric_and_reflexive() {
        let ranges = [(0.0, 1.0), (3.0, -3.0), (-2.0, -1.5), (1.2, 2.5)];
        for a in ranges {
            assert!(phi_ranges_overlap(a, a));
            for b in ranges {
                assert_eq!(phi_ranges_overlap(a, b), phi_ranges_overlap(b, a));
            }
        }
    }

    #[test]
    fn clockwise_in_each_half() {
        // right half: smaller y is more clockwise
        assert!(phi_more_clockwise(-0.2, 0.2));
        // upper half: larger x is more clockwise
        assert!(phi_more_clockwise(1.4, 1.8));
        // left half, across the seam: 3.1 is clockwise of -3.1
        assert!(phi_more_clockwise(3.1, -3.1));
        // lower half: smaller x is more clockwise
        assert!(phi_more_clockwise(-1.8, -1.4));
    }

    #[test]
    fn clockwise_is_strict() {
        assert!(!phi_more_clockwise(0.3, 0.3));
        assert!(!phi_more_counterclockwise(0.3, 0.3));
    }

    #[test]
    fn counterclockwise_mirrors_clockwise() {
        let pairs = [(-0.2, 0.2), (1.4, 1.8), (3.1, -3.1), (-1.8, -1.4)];
        for (a, b) in pairs {
            assert!(phi_more_clockwise(a, b));
            assert!(phi_more_counterclockwise(b, a));
            assert!(!phi_more_counterclockwise(a, b));
        }
    }
}
