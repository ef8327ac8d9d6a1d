//! Unit test harness for stepper-jog.
//!
//! This module organizes public-API tests for each component of the library.

mod command_parsing;
mod config_loading;
mod pulse_timing;
