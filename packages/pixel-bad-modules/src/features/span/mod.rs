//! Cluster spans

pub mod computer;

pub use computer::SpanComputer;
