//! Controller configuration - root configuration structure.

use serde::Deserialize;

use super::driver::DriverOptions;
use super::pins::PinAssignment;
use super::progress::ProgressConfig;
use super::timing::PulseTimingConfig;

/// Root configuration structure from TOML.
///
/// Every table is optional; a missing table takes its defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Output line assignment.
    pub pins: PinAssignment,

    /// Pulse timing protocol.
    pub timing: PulseTimingConfig,

    /// Driver board options.
    pub driver: DriverOptions,

    /// Progress reporting policy.
    pub progress: ProgressConfig,
}

impl ControllerConfig {
    /// Whether an enable line is wired.
    #[inline]
    pub fn has_enable_line(&self) -> bool {
        self.pins.enable.is_some()
    }
}
