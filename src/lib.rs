//! # stepper-jog
//!
//! Step/direction pulse driver and operator command loop for stepper motor
//! drivers (TB6600 and similar), with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Deterministic pulse trains**: fixed HIGH/LOW step period, direction
//!   setup hold before the first step, settle hold on disable
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/ENABLE, `DelayNs` for timing
//! - **no_std compatible**: Driver, parser and control loop work without the standard library
//! - **Guaranteed teardown**: the driver is disabled exactly once on every exit path
//! - **Interruptible**: an external flag is honoured between commands and between steps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_jog::{ControlLoop, PulseDriverBuilder, ScriptedSource, NeverInterrupted};
//!
//! let driver = PulseDriverBuilder::new()
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .enable_pin(enable_pin)
//!     .delay(delay)
//!     .build()?;
//!
//! let mut events = Vec::new();
//! let mut control = ControlLoop::new(
//!     driver,
//!     ScriptedSource::new(["right 200", "left 50", "quit"]),
//!     &mut events,
//!     NeverInterrupted,
//! );
//! control.run();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): TOML config files, stdin command source, simulated lines, logging
//! - `alloc`: `Arc` interrupt flags and `Vec` event collection
//! - `defmt`: `defmt::Format` derives for embedded targets
//! - `cli` (default): the `stepper-jog` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod motion;
pub mod motor;
#[cfg(feature = "std")]
pub mod sim;

// Re-exports for ergonomic API
pub use command::{parse, CommandSource, ScriptedSource};
pub use config::{validate_config, ControllerConfig, ProgressConfig, PulseTimingConfig};
pub use control::{
    Console, ControlLoop, ControlState, Event, InterruptSignal, NeverInterrupted, ShutdownReason,
};
pub use error::{Error, ParseError, Result};
pub use motion::{Direction, MoveCommand};
pub use motor::{MotorState, MoveOutcome, NoPin, PulseDriver, PulseDriverBuilder, StepDriver};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

#[cfg(feature = "std")]
pub use command::StdinSource;

#[cfg(feature = "std")]
pub use control::StdoutConsole;
