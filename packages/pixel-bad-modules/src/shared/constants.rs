//! Detector topology constants
//!
//! The pixel barrel has a fixed number of ladders per layer and a fixed
//! number of modules per ladder. These never change for a given detector
//! build, so they are compile-time constants rather than catalog data.

/// Barrel topology
pub mod barrel {
    /// Ladders per layer, index 0 = layer 1
    pub const LADDERS_PER_LAYER: [u32; 4] = [12, 28, 44, 64];

    /// Modules along one ladder (numbered 1..=8)
    pub const MODULES_PER_LADDER: u32 = 8;

    /// Number of ladders on `layer`, `None` for layers outside 1..=4
    #[inline]
    pub fn ladders_in_layer(layer: u32) -> Option<u32> {
        match layer {
            1..=4 => Some(LADDERS_PER_LAYER[(layer - 1) as usize]),
            _ => None,
        }
    }
}

/// Degenerate span rendering
pub mod sentinel {
    /// Bound used when a degenerate phi span has to be rendered as an
    /// interval: `(+EPSILON, -EPSILON)`.
    pub const PHI_BOUND: f32 = f32::EPSILON;
}
