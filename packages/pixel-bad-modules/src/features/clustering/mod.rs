//! Clustering of flagged units

pub mod builder;
pub mod partition;

pub use builder::ClusterBuilder;
pub use partition::RegionPartition;
