//! Driver interface used by the control loop.

use core::ops::ControlFlow;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::Result;
use crate::motion::Direction;

use super::driver::{MoveOutcome, PulseDriver};

/// Lifecycle and motion operations of a step/direction driver.
///
/// [`PulseDriver`] is the hardware implementation.
pub trait StepDriver {
    /// Put the lines in a known state and enable the driver.
    fn initialize(&mut self) -> Result<()>;

    /// Disable the driver and release the lines.
    fn shutdown(&mut self) -> Result<()>;

    /// Emit up to `steps` pulses, asking `on_step` whether to continue after
    /// each one.
    fn move_steps_with<F>(
        &mut self,
        direction: Direction,
        steps: u32,
        on_step: F,
    ) -> Result<MoveOutcome>
    where
        F: FnMut(u32) -> ControlFlow<()>;

    /// Expected wall time of a `steps`-step move in microseconds, if known.
    fn move_duration_us(&self, _steps: u32) -> Option<u64> {
        None
    }
}

impl<D: StepDriver + ?Sized> StepDriver for &mut D {
    fn initialize(&mut self) -> Result<()> {
        (**self).initialize()
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }

    fn move_steps_with<F>(
        &mut self,
        direction: Direction,
        steps: u32,
        on_step: F,
    ) -> Result<MoveOutcome>
    where
        F: FnMut(u32) -> ControlFlow<()>,
    {
        (**self).move_steps_with(direction, steps, on_step)
    }

    fn move_duration_us(&self, steps: u32) -> Option<u64> {
        (**self).move_duration_us(steps)
    }
}

impl<STEP, DIR, DELAY, EN> StepDriver for PulseDriver<STEP, DIR, DELAY, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    EN: OutputPin,
{
    fn initialize(&mut self) -> Result<()> {
        PulseDriver::initialize(self)
    }

    fn shutdown(&mut self) -> Result<()> {
        PulseDriver::shutdown(self)
    }

    fn move_steps_with<F>(
        &mut self,
        direction: Direction,
        steps: u32,
        on_step: F,
    ) -> Result<MoveOutcome>
    where
        F: FnMut(u32) -> ControlFlow<()>,
    {
        PulseDriver::move_steps_with(self, direction, steps, on_step)
    }

    fn move_duration_us(&self, steps: u32) -> Option<u64> {
        Some(self.timing().move_duration_us(steps))
    }
}
