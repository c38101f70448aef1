//! Line formats for units and cluster spans
//!
//! ```text
//! id:[...]; subdetid:[1]; layer:[1]; ladder:[ 3]; module:[4]; phi:[...]; z:[...]; r:[...];
//! subdetid:[1]; layer:[1]; phi:<...>; z:<...>; r:<...>;
//! ```
//!
//! Floats carry 6 significant digits; phi and z are always signed.

use std::fmt;

use crate::shared::models::{ClusterSpan, Region, Topology, UnitRecord};

const SIGNIFICANT_DIGITS: usize = 6;
const DELIMITER: &str = "; ";

/// Formats `value` with `digits` significant digits, optionally with an
/// explicit sign. Non-finite values print as `inf` / `NaN`.
pub fn significant(value: f32, digits: usize, signed: bool) -> String {
    let decimals = if value == 0.0 || !value.is_finite() {
        digits.saturating_sub(1)
    } else {
        let magnitude = f64::from(value.abs()).log10().floor() as i64;
        (digits as i64 - 1 - magnitude).max(0) as usize
    };
    if signed {
        format!("{:+.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

fn write_pair(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    (open, close): (char, char),
    (start, end): (f32, f32),
    signed: bool,
    width: usize,
) -> fmt::Result {
    write!(
        f,
        "{}:{}{:>w$},{:<w$}{}{}",
        label,
        open,
        significant(start, SIGNIFICANT_DIGITS, signed),
        significant(end, SIGNIFICANT_DIGITS, signed),
        close,
        DELIMITER,
        w = width
    )
}

/// One catalog unit, as a single line
pub struct UnitInfo<'a>(pub &'a UnitRecord);

impl fmt::Display for UnitInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(f, "id:[{}]{}", record.id, DELIMITER)?;
        write!(f, "subdetid:[{}]{}", record.region().subdet_id(), DELIMITER)?;
        match record.topology {
            Topology::Barrel {
                layer,
                ladder,
                module,
            } => write!(
                f,
                "layer:[{}]{d}ladder:[{:>2}]{d}module:[{}]{d}",
                layer,
                ladder,
                module,
                d = DELIMITER
            )?,
            Topology::Endcap { disk, blade, panel } => write!(
                f,
                "disk:[{}]{d}blade:[{:>2}]{d}panel:[{}]{d}",
                disk,
                blade,
                panel,
                d = DELIMITER
            )?,
        }

        let surface = &record.surface;
        write_pair(f, "phi", ('[', ']'), surface.phi.as_pair(), true, 10)?;
        write_pair(f, "z", ('[', ']'), surface.z.as_pair(), true, 8)?;
        write_pair(f, "r", ('[', ']'), surface.r.as_pair(), false, 8)
    }
}

/// One cluster envelope, as a single line
pub struct ClusterSpanInfo<'a>(pub &'a ClusterSpan);

impl fmt::Display for ClusterSpanInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.0;
        let locant = match span.region {
            Region::Barrel => "layer",
            Region::Endcap => "disk",
        };
        write!(
            f,
            "subdetid:[{}]{d}{}:[{}]{d}",
            span.region.subdet_id(),
            locant,
            span.locant(),
            d = DELIMITER
        )?;
        write_pair(f, "phi", ('<', '>'), span.phi.bounds(), true, 10)?;
        write_pair(f, "z", ('<', '>'), span.z.as_pair(), true, 8)?;
        write_pair(f, "r", ('<', '>'), span.r.as_pair(), false, 8)
    }
}
