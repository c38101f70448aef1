//! Configuration
//!
//! ```text
//! config/
//! ├── analysis_config.rs  # AnalysisConfig, OverlapPasses, ReportOptions
//! ├── io.rs               # YAML schema v1
//! ├── validation.rs       # Validatable trait
//! └── error.rs            # ConfigError
//! ```

pub mod analysis_config;
pub mod error;
pub mod io;
pub mod validation;

pub use analysis_config::{AnalysisConfig, OverlapPasses, ReportOptions};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use validation::Validatable;
