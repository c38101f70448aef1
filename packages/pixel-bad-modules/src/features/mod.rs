//! Feature modules
//!
//! ```text
//! features/
//! ├── geometry/    # catalog port, in-memory catalog, file I/O, synthetic detector
//! ├── region/      # barrel / endcap adjacency and phi envelope rules
//! ├── clustering/  # region split and flood-fill clustering
//! ├── span/        # cluster envelopes
//! ├── overlap/     # axial ranges and overlap groups
//! └── report/      # text output
//! ```

pub mod clustering;
pub mod geometry;
pub mod overlap;
pub mod region;
pub mod report;
pub mod span;
