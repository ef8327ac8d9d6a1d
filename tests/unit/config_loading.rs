//! Unit tests for TOML configuration loading.

use std::fs;

use stepper_jog::config::{
    load_config, parse_config, validate_config, ControllerConfig, EnablePolarity,
};
use stepper_jog::error::{ConfigError, Error};

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_file() {
    let path = std::env::temp_dir().join(format!("stepper-jog-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
[pins]
step = 17
dir = 27
enable = 22

[timing]
step_high_us = 250
step_low_us = 250

[driver]
enable_polarity = "active_high"
"#,
    )
    .expect("temp dir is writable");

    let result = load_config(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("config should load");
    assert_eq!(config.pins.step, 17);
    assert_eq!(config.pins.enable, Some(22));
    assert_eq!(config.timing.step_period_us(), 500);
    // Untouched timing fields keep their defaults
    assert_eq!(config.timing.direction_setup_us, 1_000);
    assert_eq!(config.driver.enable_polarity, EnablePolarity::ActiveHigh);
    assert_eq!(config.progress.threshold_steps, 100);
}

/// Test that defaults match the documented wiring.
#[test]
fn test_defaults() {
    let config = ControllerConfig::default();
    assert_eq!(config.pins.step, 8);
    assert_eq!(config.pins.dir, 10);
    assert_eq!(config.pins.enable, Some(12));
    assert_eq!(config.timing.step_high_us, 1_000);
    assert_eq!(config.timing.step_low_us, 1_000);
    assert_eq!(config.timing.enable_settle_us, 100_000);
    assert_eq!(config.driver.enable_polarity, EnablePolarity::ActiveLow);
    assert!(validate_config(&config).is_ok());
}

/// Test that validation runs as part of parsing.
#[test]
fn test_parse_validates() {
    let toml_str = r#"
[pins]
step = 4
dir = 4
"#;

    assert_eq!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::DuplicatePin(4)))
    );
}

/// Test that unknown polarity names are rejected.
#[test]
fn test_unknown_polarity() {
    let toml_str = r#"
[driver]
enable_polarity = "sideways"
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}
