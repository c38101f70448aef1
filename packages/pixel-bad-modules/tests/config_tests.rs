//! Configuration loading tests

mod common;

use common::temp_file;
use pixel_bad_modules::{AnalysisConfig, ConfigError, Validatable};

const EXAMPLE: &str = include_str!("../config/example.yaml");

#[test]
fn test_example_config_loads() {
    let config = AnalysisConfig::from_yaml_str(EXAMPLE).unwrap();
    assert_eq!(config.axial_threshold, Some(15.0));
    assert!(config.passes.barrel_barrel);
    assert!(config.passes.endcap_endcap);
    assert!(config.passes.barrel_endcap);
    assert!(config.report.show_spans);
    assert!(!config.report.show_units);
}

#[test]
fn test_config_file_roundtrip() {
    let config = AnalysisConfig::from_yaml_str(EXAMPLE).unwrap();
    let file = temp_file(&config.to_yaml().unwrap(), ".yaml");

    let reloaded = AnalysisConfig::from_yaml(file.path()).unwrap();
    assert_eq!(reloaded, config);
    assert!(reloaded.validate().is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AnalysisConfig::from_yaml(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_unknown_pass_name_rejected() {
    let yaml = "version: 1\npasses:\n  barrel_forward: true\n";
    assert!(matches!(
        AnalysisConfig::from_yaml_str(yaml),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_infinite_threshold_rejected() {
    let yaml = "version: 1\naxial_threshold: .inf\n";
    assert!(matches!(
        AnalysisConfig::from_yaml_str(yaml),
        Err(ConfigError::Range { .. })
    ));
}
