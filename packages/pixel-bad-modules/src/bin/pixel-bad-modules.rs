//! Pixel bad-module analysis CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyze a list of flagged unit ids against a catalog file
//! pixel-bad-modules analyze --flagged bad_units.txt --catalog geometry.yaml --threshold 15
//!
//! # Same, against the built-in synthetic detector, as JSON
//! pixel-bad-modules analyze --flagged bad_units.txt --synthetic --format json
//!
//! # Dump the synthetic detector as a catalog file
//! pixel-bad-modules synthetic --output geometry.yaml
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pixel_bad_modules::features::report::render_units;
use pixel_bad_modules::{
    AnalysisConfig, AnalysisError, BadModuleAnalysis, DetectorCatalog, FlaggedSet,
    SyntheticGeometry, UnitRecord,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixel-bad-modules")]
#[command(about = "Cluster dead pixel modules and find beam-axis overlaps", long_about = None)]
struct Cli {
    /// Log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster flagged units and report overlapping clusters
    Analyze {
        /// File with flagged unit ids (whitespace or comma separated, # comments)
        #[arg(short, long)]
        flagged: PathBuf,

        /// Geometry catalog (.json, .yaml or .yml)
        #[arg(short, long, conflicts_with = "synthetic")]
        catalog: Option<PathBuf>,

        /// Use the built-in synthetic detector instead of a catalog file
        #[arg(long)]
        synthetic: bool,

        /// YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Axial threshold; overrides the config file
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Skip the barrel × barrel comparison
        #[arg(long)]
        no_barrel_barrel: bool,

        /// Skip the endcap × endcap comparison
        #[arg(long)]
        no_endcap_endcap: bool,

        /// Skip the barrel × endcap comparison
        #[arg(long)]
        no_barrel_endcap: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// List every flagged unit
        #[arg(long)]
        show_units: bool,

        /// List every cluster with its members
        #[arg(long)]
        show_clusters: bool,

        /// List every cluster span
        #[arg(long)]
        show_spans: bool,
    },

    /// Write the synthetic detector geometry
    Synthetic {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = DumpFormat::Yaml)]
        format: DumpFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Json,
    Yaml,
    Text,
}

/// Flags of `analyze` that override the config file
struct Overrides {
    threshold: Option<f32>,
    no_barrel_barrel: bool,
    no_endcap_endcap: bool,
    no_barrel_endcap: bool,
    show_units: bool,
    show_clusters: bool,
    show_spans: bool,
}

impl Overrides {
    fn apply(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(threshold) = self.threshold {
            config.axial_threshold = Some(threshold);
        }
        config.passes.barrel_barrel &= !self.no_barrel_barrel;
        config.passes.endcap_endcap &= !self.no_endcap_endcap;
        config.passes.barrel_endcap &= !self.no_barrel_endcap;
        config.report.show_units |= self.show_units;
        config.report.show_clusters |= self.show_clusters;
        config.report.show_spans |= self.show_spans;
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            flagged,
            catalog,
            synthetic,
            config,
            threshold,
            no_barrel_barrel,
            no_endcap_endcap,
            no_barrel_endcap,
            format,
            show_units,
            show_clusters,
            show_spans,
        } => {
            let overrides = Overrides {
                threshold,
                no_barrel_barrel,
                no_endcap_endcap,
                no_barrel_endcap,
                show_units,
                show_clusters,
                show_spans,
            };
            run_analysis(&flagged, catalog.as_deref(), synthetic, config.as_deref(), &overrides, format)?;
        }
        Commands::Synthetic { output, format } => {
            dump_synthetic(output.as_deref(), format)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_analysis(
    flagged_path: &Path,
    catalog_path: Option<&Path>,
    synthetic: bool,
    config_path: Option<&Path>,
    overrides: &Overrides,
    format: OutputFormat,
) -> Result<()> {
    let catalog = match (catalog_path, synthetic) {
        (Some(path), _) => DetectorCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        (None, true) => SyntheticGeometry::phase1()
            .build()
            .context("Failed to build synthetic geometry")?,
        (None, false) => bail!("Either --catalog <file> or --synthetic is required"),
    };

    let config = match config_path {
        Some(path) => AnalysisConfig::from_yaml(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    let config = overrides.apply(config);

    let text = std::fs::read_to_string(flagged_path)
        .with_context(|| format!("Failed to read {}", flagged_path.display()))?;
    let flagged = FlaggedSet::parse_list(&text)
        .with_context(|| format!("Failed to parse {}", flagged_path.display()))?;

    let analysis = BadModuleAnalysis::new(&catalog, config)?;
    let report = analysis.run(&flagged).map_err(analysis_failure)?;

    match format {
        OutputFormat::Text => print!("{}", report.render_text(&catalog, &analysis.config().report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Internal-consistency failures get their own diagnostic, separate from
/// problems with the input files.
fn analysis_failure(err: AnalysisError) -> anyhow::Error {
    if err.is_internal() {
        tracing::error!("Internal consistency failure: {}", err);
        anyhow::Error::new(err)
            .context("Internal consistency failure in the analysis (please report with the catalog and flagged list)")
    } else {
        anyhow::Error::new(err).context("Analysis failed")
    }
}

fn dump_synthetic(output: Option<&Path>, format: DumpFormat) -> Result<()> {
    let catalog = SyntheticGeometry::phase1()
        .build()
        .context("Failed to build synthetic geometry")?;

    let content = match format {
        DumpFormat::Json => catalog.to_json()?,
        DumpFormat::Yaml => catalog.to_yaml()?,
        DumpFormat::Text => {
            let records: Vec<UnitRecord> = catalog.records().into_iter().copied().collect();
            render_units(&records)
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} units to {}", catalog.len(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
