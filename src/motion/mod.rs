//! Motion module for stepper-jog.
//!
//! Value types describing a requested motion.

mod command;
mod direction;

pub use command::MoveCommand;
pub use direction::Direction;
