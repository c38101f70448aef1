//! Test fixtures

use once_cell::sync::Lazy;
use pixel_bad_modules::{DetectorCatalog, EndcapSide, SyntheticGeometry, Topology, UnitId};
use std::io::Write;
use tempfile::NamedTempFile;

/// Synthetic Phase-1-like detector, built once per test binary
pub static SYNTHETIC: Lazy<DetectorCatalog> = Lazy::new(|| {
    SyntheticGeometry::phase1()
        .build()
        .expect("synthetic geometry is consistent")
});

/// Units of barrel layer 1 and of the first plus-side endcap disk. Small
/// enough that random subsets form multi-unit clusters.
pub static DENSE_POOL: Lazy<Vec<UnitId>> = Lazy::new(|| {
    SYNTHETIC
        .records()
        .into_iter()
        .filter(|record| match record.topology {
            Topology::Barrel { layer, .. } => layer == 1,
            Topology::Endcap { disk, .. } => disk == 1 && record.surface.z.start > 0.0,
        })
        .map(|record| record.id)
        .collect()
});

/// Every unit of the synthetic detector
pub static FULL_POOL: Lazy<Vec<UnitId>> =
    Lazy::new(|| SYNTHETIC.records().into_iter().map(|record| record.id).collect());

pub fn barrel(layer: u32, ladder: u32, module: u32) -> UnitId {
    SyntheticGeometry::barrel_id(layer, ladder, module)
}

pub fn endcap_plus(disk: u32, blade: u32, panel: u32) -> UnitId {
    SyntheticGeometry::endcap_id(EndcapSide::Plus, disk, blade, panel)
}

pub fn endcap_minus(disk: u32, blade: u32, panel: u32) -> UnitId {
    SyntheticGeometry::endcap_id(EndcapSide::Minus, disk, blade, panel)
}

/// Write `content` to a temporary file with the given suffix
pub fn temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
