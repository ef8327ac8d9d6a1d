//! Motor session state.

use crate::motion::Direction;

/// What the control loop knows about the driver outputs.
///
/// Created disabled at startup, updated on enable, disable and direction
/// changes, and disabled again at shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorState {
    enabled: bool,
    latched_direction: Option<Direction>,
}

impl MotorState {
    /// Fresh state: disabled, no direction latched.
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: false,
            latched_direction: None,
        }
    }

    /// Whether the driver power stage is active.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Direction last written to the DIR line, if any.
    #[inline]
    pub fn latched_direction(&self) -> Option<Direction> {
        self.latched_direction
    }

    /// Record a successful enable.
    pub fn mark_enabled(&mut self) {
        self.enabled = true;
    }

    /// Record a disable. The DIR line is released, so the latch is cleared.
    pub fn mark_disabled(&mut self) {
        self.enabled = false;
        self.latched_direction = None;
    }

    /// Record the direction latched for a move.
    ///
    /// Returns `true` when it differs from the previous latch.
    pub fn latch(&mut self, direction: Direction) -> bool {
        let changed = self.latched_direction != Some(direction);
        self.latched_direction = Some(direction);
        changed
    }
}
