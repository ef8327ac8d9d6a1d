//! Operator-facing outcome lines.

use core::fmt;

use crate::error::{Error, ParseError};
use crate::motion::MoveCommand;

/// One outcome of the control loop, rendered as a single line by `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Driver enabled, waiting for commands.
    Ready,
    /// A command line was rejected.
    Rejected(ParseError),
    /// Periodic progress of a long move.
    Progress {
        /// Steps emitted so far.
        completed: u32,
        /// Steps requested.
        total: u32,
    },
    /// A move finished all of its steps.
    Completed(MoveCommand),
    /// A move was stopped by an interrupt at a step boundary.
    MoveInterrupted {
        /// The command being executed.
        command: MoveCommand,
        /// Steps emitted before stopping.
        completed: u32,
    },
    /// Operator typed a quit sentinel.
    QuitRequested,
    /// Command input ended.
    EndOfInput,
    /// Interrupt observed between commands.
    InterruptReceived,
    /// Startup or move failure; the session ends.
    Fault(Error),
    /// Driver disabled and lines released.
    DriverDisabled,
    /// Disabling the driver reported a problem; teardown continued.
    ShutdownFailed(Error),
    /// Session over.
    Terminated,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Ready => write!(
                f,
                "Stepper motor controller ready. Commands: 'right [steps]' or 'left [steps]', 'quit' to exit"
            ),
            Event::Rejected(e) => write!(f, "{}", e),
            Event::Progress { completed, total } => {
                write!(f, "Progress: {}/{} steps", completed, total)
            }
            Event::Completed(command) => write!(f, "Movement complete: {}", command),
            Event::MoveInterrupted { command, completed } => write!(
                f,
                "Movement interrupted after {}/{} steps",
                completed,
                command.steps()
            ),
            Event::QuitRequested => write!(f, "Quit requested"),
            Event::EndOfInput => write!(f, "EOF detected"),
            Event::InterruptReceived => write!(f, "Interrupt detected"),
            Event::Fault(e) => write!(f, "Error: {}", e),
            Event::DriverDisabled => write!(f, "Driver disabled, outputs released"),
            Event::ShutdownFailed(e) => write!(f, "Driver shutdown problem (ignored): {}", e),
            Event::Terminated => write!(f, "Program terminated"),
        }
    }
}

/// Sink for operator-facing events.
pub trait Console {
    /// Deliver one event.
    fn emit(&mut self, event: &Event);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn emit(&mut self, event: &Event) {
        (**self).emit(event)
    }
}

#[cfg(feature = "alloc")]
impl Console for alloc::vec::Vec<Event> {
    fn emit(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Console printing each event as a line on stdout.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

#[cfg(feature = "std")]
impl Console for StdoutConsole {
    fn emit(&mut self, event: &Event) {
        use std::io::Write;

        // Write errors are ignored; teardown keeps going
        let _ = writeln!(std::io::stdout().lock(), "{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Direction;

    #[test]
    fn test_lines() {
        let command = MoveCommand::new(Direction::Clockwise, 200).unwrap();

        assert_eq!(
            Event::Progress {
                completed: 50,
                total: 200
            }
            .to_string(),
            "Progress: 50/200 steps"
        );
        assert_eq!(
            Event::Completed(command).to_string(),
            "Movement complete: right 200 steps"
        );
        assert_eq!(
            Event::MoveInterrupted {
                command,
                completed: 3
            }
            .to_string(),
            "Movement interrupted after 3/200 steps"
        );
        assert_eq!(
            Event::Rejected(ParseError::NonPositiveSteps).to_string(),
            "Invalid step count. Must be positive integer."
        );
    }

    #[test]
    fn test_every_line_is_single() {
        let events = [
            Event::Ready,
            Event::Rejected(ParseError::WrongTokenCount(3)),
            Event::QuitRequested,
            Event::EndOfInput,
            Event::InterruptReceived,
            Event::DriverDisabled,
            Event::Terminated,
        ];
        for event in events {
            assert!(!event.to_string().contains('\n'));
        }
    }
}
