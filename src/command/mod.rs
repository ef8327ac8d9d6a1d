//! Command module for stepper-jog.
//!
//! Turns operator text into validated [`MoveCommand`](crate::MoveCommand)s
//! and abstracts where that text comes from.

mod parser;
mod source;
#[cfg(feature = "std")]
mod stdin;

pub use parser::{is_quit_sentinel, parse, QUIT_SENTINELS};
pub use source::{CommandSource, ScriptedSource};

#[cfg(feature = "std")]
pub use stdin::StdinSource;
