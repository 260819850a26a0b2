//! Integration tests for the self-check suite and config loading

use intcalc::core::checks;
use intcalc::models::{Config, OutputFormat};

mod common;

use common::{create_test_dir, write_config};

#[test]
fn test_self_check_suite_passes() {
    let report = checks::run_all();
    assert!(report.is_pass());
    assert_eq!(report.failed(), 0);
    assert_eq!(report.groups.len(), 5);
}

#[test]
fn test_self_check_counts_are_consistent() {
    let report = checks::run_all();
    let group_total: usize = report.groups.iter().map(|g| g.total()).sum();
    assert_eq!(report.total(), group_total);
}

#[test]
fn test_config_defaults_when_file_missing() {
    let (_temp_dir, dir) = create_test_dir();

    let config = Config::load_from_dir(&dir).unwrap();
    assert_eq!(config.output.format, OutputFormat::Plain);
}

#[test]
fn test_config_loaded_from_file() {
    let (_temp_dir, dir) = create_test_dir();
    write_config(&dir, "[output]\nformat = \"json\"\n");

    let config = Config::load_from_dir(&dir).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_config_parse_error_is_reported() {
    let (_temp_dir, dir) = create_test_dir();
    write_config(&dir, "[output]\nformat = 3\n");

    let result = Config::load_from_dir(&dir);
    assert!(result.is_err());
}

#[test]
fn test_cli_override_beats_config_file() {
    let (_temp_dir, dir) = create_test_dir();
    write_config(&dir, "[output]\nformat = \"json\"\n");

    let config = Config::load_from_dir(&dir)
        .unwrap()
        .with_overrides(Some(OutputFormat::Plain));
    assert_eq!(config.output.format, OutputFormat::Plain);
}
