//! Driver options from TOML.

use heapless::String;
use serde::Deserialize;

use super::pins::EnablePolarity;

/// Options describing the attached driver board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriverOptions {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Level of the enable line that activates the power stage.
    pub enable_polarity: EnablePolarity,

    /// Invert direction pin logic (Clockwise drives DIR LOW).
    pub invert_direction: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            name: String::try_from("stepper").unwrap_or_default(),
            enable_polarity: EnablePolarity::default(),
            invert_direction: false,
        }
    }
}
