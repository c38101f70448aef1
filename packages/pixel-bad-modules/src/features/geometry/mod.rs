//! Detector geometry
//!
//! ```text
//! geometry/
//! ├── ports.rs      # GeometryCatalog trait (what the analysis consumes)
//! ├── catalog.rs    # In-memory DetectorCatalog
//! ├── io.rs         # JSON / YAML catalog files
//! └── synthetic.rs  # Phase-1-like synthetic detector
//! ```

pub mod catalog;
pub mod io;
pub mod ports;
pub mod synthetic;

pub use catalog::{check_surface, CatalogError, CatalogResult, DetectorCatalog};
pub use io::{CatalogFileV1, CatalogFormat};
pub use ports::GeometryCatalog;
pub use synthetic::{EndcapSide, SyntheticGeometry};
