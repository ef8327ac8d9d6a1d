//! Configuration module for stepper-jog.
//!
//! Provides the pin, timing, driver and progress settings, loaded from TOML
//! files (with `std` feature) or built in code. Every setting has a default,
//! so an empty file is a valid configuration.

mod controller;
mod driver;
#[cfg(feature = "std")]
mod loader;
mod pins;
mod progress;
mod timing;
mod validation;

pub use controller::ControllerConfig;
pub use driver::DriverOptions;
pub use pins::{board_to_bcm, EnablePolarity, PinAssignment};
pub use progress::ProgressConfig;
pub use timing::PulseTimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
