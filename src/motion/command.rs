//! Validated motion request.

use core::fmt;
use core::num::NonZeroU32;

use super::Direction;

/// A request to move `steps` steps in `direction`.
///
/// The step count is at least 1 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    direction: Direction,
    steps: NonZeroU32,
}

impl MoveCommand {
    /// Create a command, or `None` for a zero step count.
    #[inline]
    pub fn new(direction: Direction, steps: u32) -> Option<Self> {
        NonZeroU32::new(steps).map(|steps| Self { direction, steps })
    }

    /// Direction of the move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of steps, always >= 1.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps.get()
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} steps", self.direction, self.steps)
    }
}
