//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::ControllerConfig;

/// Validate a controller configuration.
///
/// Checks:
/// - Step HIGH and LOW phases are at least 1 us
/// - Progress interval is non-zero
/// - No pin id is assigned to two lines
pub fn validate_config(config: &ControllerConfig) -> Result<()> {
    if config.timing.step_high_us == 0 || config.timing.step_low_us == 0 {
        return Err(Error::Config(ConfigError::ZeroStepDuration));
    }

    if config.progress.interval_steps == 0 {
        return Err(Error::Config(ConfigError::ZeroProgressInterval));
    }

    validate_pins(config)?;

    Ok(())
}

fn validate_pins(config: &ControllerConfig) -> Result<()> {
    let mut seen: heapless::Vec<u8, 3> = heapless::Vec::new();
    for id in config.pins.ids() {
        if seen.contains(&id) {
            return Err(Error::Config(ConfigError::DuplicatePin(id)));
        }
        // At most three ids, capacity is exact
        let _ = seen.push(id);
    }
    Ok(())
}
