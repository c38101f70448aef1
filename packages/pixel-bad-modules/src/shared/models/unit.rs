//! Detector unit identity, topology and surface.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Interval;

/// Opaque detector unit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl UnitId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UnitId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Detector region. Closed set: the pixel detector has exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Barrel,
    Endcap,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Barrel => "barrel",
            Region::Endcap => "endcap",
        }
    }

    /// Numeric sub-detector tag used in rendered output (1 = barrel, 2 = endcap)
    pub fn subdet_id(&self) -> u32 {
        match self {
            Region::Barrel => 1,
            Region::Endcap => 2,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topology coordinates of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "region", rename_all = "lowercase")]
pub enum Topology {
    Barrel { layer: u32, ladder: u32, module: u32 },
    Endcap { disk: u32, blade: u32, panel: u32 },
}

impl Topology {
    pub fn region(&self) -> Region {
        match self {
            Topology::Barrel { .. } => Region::Barrel,
            Topology::Endcap { .. } => Region::Endcap,
        }
    }

    /// Layer for barrel units, disk for endcap units
    pub fn locant(&self) -> u32 {
        match *self {
            Topology::Barrel { layer, .. } => layer,
            Topology::Endcap { disk, .. } => disk,
        }
    }
}

/// Geometric footprint of a unit in cylindrical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub phi: Interval,
    pub z: Interval,
    pub r: Interval,
}

impl Surface {
    pub fn new(phi: Interval, z: Interval, r: Interval) -> Self {
        Self { phi, z, r }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: UnitId,
    pub topology: Topology,
    pub surface: Surface,
}

impl UnitRecord {
    pub fn new(id: UnitId, topology: Topology, surface: Surface) -> Self {
        Self {
            id,
            topology,
            surface,
        }
    }

    pub fn region(&self) -> Region {
        self.topology.region()
    }
}
