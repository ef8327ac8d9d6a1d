//! Motor module for stepper-jog.
//!
//! Provides the STEP/DIR pulse driver and the session state the control
//! loop keeps about it.

mod builder;
mod driver;
mod no_pin;
mod state;
mod step_driver;

pub use builder::PulseDriverBuilder;
pub use driver::{MoveOutcome, PulseDriver};
pub use no_pin::NoPin;
pub use state::MotorState;
pub use step_driver::StepDriver;
