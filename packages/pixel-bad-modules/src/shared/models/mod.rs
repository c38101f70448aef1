//! Shared models

mod cluster;
mod flagged;
mod interval;
mod overlap;
mod unit;

pub use cluster::{Cluster, ClusterSpan, PhiSpan};
pub use flagged::FlaggedSet;
pub use interval::Interval;
pub use overlap::{AxialRange, OverlapGroup, OverlapPartner, PairClass};
pub use unit::{Region, Surface, Topology, UnitId, UnitRecord};
