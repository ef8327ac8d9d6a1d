//! Control module for stepper-jog.
//!
//! The command loop: reads lines, validates them, drives the motor, reports
//! outcomes and guarantees the driver is disabled when the session ends.

mod control_loop;
mod events;
mod interrupt;

pub use control_loop::{ControlLoop, ControlState, ShutdownReason};
pub use events::{Console, Event};
pub use interrupt::{InterruptSignal, NeverInterrupted};

#[cfg(feature = "std")]
pub use events::StdoutConsole;
