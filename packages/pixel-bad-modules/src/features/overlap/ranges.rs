//! Axial overlap ranges per pair class
//!
//! For two cluster envelopes, the range of beam-axis positions from which a
//! straight line can pass through both. Each function picks the corners of
//! the two (z, r) rectangles that bound that range and projects them with
//! [`z_axis_intersection`]. `Ok(None)` means the geometry admits no range.

use super::projection::{z_axis_intersection, ZrPoint};
use crate::errors::Result;
use crate::shared::models::{AxialRange, ClusterSpan};

#[inline]
fn project(a: (f32, f32), b: (f32, f32)) -> Result<f32> {
    z_axis_intersection(ZrPoint::new(a.0, a.1), ZrPoint::new(b.0, b.1))
}

/// Two barrel spans. Needs strictly separated radial spans.
pub fn barrel_overlap_range(a: &ClusterSpan, b: &ClusterSpan) -> Result<Option<AxialRange>> {
    let (outer, inner) = if a.r.start > b.r.end {
        (a, b)
    } else if b.r.start > a.r.end {
        (b, a)
    } else {
        return Ok(None);
    };
    let (o, i) = (outer, inner);

    let range = if o.z.end < i.z.start {
        AxialRange::new(
            project((o.z.end, o.r.end), (i.z.start, i.r.start))?,
            project((o.z.start, o.r.start), (i.z.end, i.r.end))?,
        )
    } else if o.z.start <= i.z.end && i.z.start <= o.z.end {
        AxialRange::new(
            project((o.z.end, o.r.start), (i.z.start, i.r.end))?,
            project((o.z.start, o.r.start), (i.z.end, i.r.end))?,
        )
    } else {
        AxialRange::new(
            project((o.z.end, o.r.start), (i.z.start, i.r.end))?,
            project((o.z.start, o.r.end), (i.z.end, i.r.start))?,
        )
    };
    Ok(Some(range))
}

/// Two endcap spans on the same side, on different disks.
///
/// The bound facing the interaction point always comes from a projection.
/// The far bound is finite only when the further span sits radially outside
/// the nearer one; otherwise lines through both reach arbitrarily far.
pub fn endcap_overlap_range(a: &ClusterSpan, b: &ClusterSpan) -> Result<Option<AxialRange>> {
    if a.z.start < 0.0 && b.z.start < 0.0 {
        let (f, n) = if a.z.end < b.z.start {
            (a, b)
        } else if b.z.end < a.z.start {
            (b, a)
        } else {
            return Ok(None);
        };
        if f.r.end <= n.r.start {
            return Ok(None);
        }

        let lower = project((f.z.end, f.r.end), (n.z.start, n.r.start))?;
        let upper = if f.r.start > n.r.end {
            // Far corner sits on the nearer span's outer radius, as in the barrel×endcap case
            project((f.z.start, f.r.start), (n.z.end, n.r.end))?
        } else {
            f32::INFINITY
        };
        Ok(Some(AxialRange::new(lower, upper)))
    } else if a.z.start > 0.0 && b.z.start > 0.0 {
        let (f, n) = if a.z.start > b.z.end {
            (a, b)
        } else if b.z.start > a.z.end {
            (b, a)
        } else {
            return Ok(None);
        };
        if f.r.end <= n.r.start {
            return Ok(None);
        }

        let upper = project((f.z.start, f.r.end), (n.z.end, n.r.start))?;
        let lower = if f.r.start > n.r.end {
            // Far corner sits on the nearer span's outer radius, as in the barrel×endcap case
            project((f.z.end, f.r.start), (n.z.start, n.r.end))?
        } else {
            f32::NEG_INFINITY
        };
        Ok(Some(AxialRange::new(lower, upper)))
    } else {
        Ok(None)
    }
}

/// A barrel span and an endcap span. The endcap span must reach past the
/// barrel's inner radius and lie axially clear of it.
pub fn barrel_endcap_overlap_range(
    barrel: &ClusterSpan,
    endcap: &ClusterSpan,
) -> Result<Option<AxialRange>> {
    let (b, e) = (barrel, endcap);
    if e.r.end <= b.r.start {
        return Ok(None);
    }

    if e.z.end < b.z.start {
        let lower = project((e.z.end, e.r.end), (b.z.start, b.r.start))?;
        let upper = if e.r.start > b.r.end {
            project((e.z.start, e.r.start), (b.z.end, b.r.end))?
        } else {
            f32::INFINITY
        };
        Ok(Some(AxialRange::new(lower, upper)))
    } else if e.z.start > b.z.end {
        let upper = project((e.z.start, e.r.end), (b.z.end, b.r.start))?;
        let lower = if e.r.start > b.r.end {
            project((e.z.end, e.r.start), (b.z.start, b.r.end))?
        } else {
            f32::NEG_INFINITY
        };
        Ok(Some(AxialRange::new(lower, upper)))
    } else {
        Ok(None)
    }
}
