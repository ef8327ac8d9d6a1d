//! Step/direction pulse driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use core::ops::ControlFlow;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{EnablePolarity, PulseTimingConfig};
use crate::error::{Line, MotorError, Result};
use crate::motion::Direction;

use super::no_pin::NoPin;

/// How a pulse train ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveOutcome {
    /// Every requested step was emitted.
    Completed,
    /// The step callback stopped the train at a step boundary.
    Aborted {
        /// Steps emitted before stopping.
        completed: u32,
    },
}

/// STEP/DIR pulse driver with an optional enable line.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `EN`: Enable pin type (defaults to [`NoPin`] when no enable line is wired)
///
/// The driver owns its lines exclusively. All timed holds block the caller.
pub struct PulseDriver<STEP, DIR, DELAY, EN = NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    EN: OutputPin,
{
    /// STEP pin (one HIGH/LOW cycle per step).
    step_pin: STEP,

    /// DIR pin (level selects rotation).
    dir_pin: DIR,

    /// Enable pin, if wired.
    enable_pin: Option<EN>,

    /// Delay provider for all holds.
    delay: DELAY,

    /// Timing protocol.
    timing: PulseTimingConfig,

    /// Level meaning "enabled" on the enable pin.
    enable_polarity: EnablePolarity,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Driver name for logging.
    name: heapless::String<32>,
}

impl<STEP, DIR, DELAY, EN> PulseDriver<STEP, DIR, DELAY, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    EN: OutputPin,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: Option<EN>,
        delay: DELAY,
        timing: PulseTimingConfig,
        enable_polarity: EnablePolarity,
        invert_direction: bool,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            timing,
            enable_polarity,
            invert_direction,
            name,
        }
    }

    /// Get the driver name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the timing protocol.
    #[inline]
    pub fn timing(&self) -> &PulseTimingConfig {
        &self.timing
    }

    /// Whether an enable line is wired.
    #[inline]
    pub fn has_enable_line(&self) -> bool {
        self.enable_pin.is_some()
    }

    /// Drive STEP and DIR LOW, then enable the driver.
    ///
    /// Calling it again rewrites the same levels, so the driver stays
    /// enabled with both lines LOW.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Pin` naming the first line that failed.
    pub fn initialize(&mut self) -> Result<()> {
        write(&mut self.step_pin, false, Line::Step)?;
        write(&mut self.dir_pin, false, Line::Dir)?;
        self.set_enabled(true)?;
        debug!(driver = self.name.as_str(), "driver enabled");
        Ok(())
    }

    /// Disable the driver, let it settle, then drive STEP and DIR LOW.
    ///
    /// Every stage is attempted even if an earlier one fails; the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Pin` naming the first line that failed.
    pub fn shutdown(&mut self) -> Result<()> {
        let disabled = self.set_enabled(false);
        if self.enable_pin.is_some() {
            self.delay.delay_us(self.timing.enable_settle_us);
        }
        let step = write(&mut self.step_pin, false, Line::Step);
        let dir = write(&mut self.dir_pin, false, Line::Dir);
        debug!(driver = self.name.as_str(), "driver disabled");
        disabled.and(step).and(dir)
    }

    /// Emit `steps` step pulses in `direction`.
    ///
    /// Zero steps is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Pin` if a line write fails; the pulse train stops
    /// at that point.
    pub fn move_steps(&mut self, direction: Direction, steps: u32) -> Result<()> {
        self.move_steps_with(direction, steps, |_| ControlFlow::Continue(()))
            .map(|_| ())
    }

    /// Emit up to `steps` step pulses, consulting `on_step` after each one.
    ///
    /// Sequence:
    /// 1. DIR is written once with the level encoding `direction`
    /// 2. hold `direction_setup_us`
    /// 3. per step: STEP HIGH, hold `step_high_us`, STEP LOW, hold `step_low_us`
    ///
    /// `on_step` receives the number of completed steps. Returning
    /// `ControlFlow::Break` stops before the next pulse.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Pin` if a line write fails.
    pub fn move_steps_with<F>(
        &mut self,
        direction: Direction,
        steps: u32,
        mut on_step: F,
    ) -> Result<MoveOutcome>
    where
        F: FnMut(u32) -> ControlFlow<()>,
    {
        if steps == 0 {
            return Ok(MoveOutcome::Completed);
        }

        let level = direction.dir_level(self.invert_direction);
        write(&mut self.dir_pin, level, Line::Dir)?;
        trace!(%direction, level, "direction set");
        self.delay.delay_us(self.timing.direction_setup_us);

        for completed in 1..=steps {
            self.pulse()?;

            if on_step(completed).is_break() {
                return Ok(MoveOutcome::Aborted { completed });
            }
        }

        Ok(MoveOutcome::Completed)
    }

    fn pulse(&mut self) -> Result<()> {
        write(&mut self.step_pin, true, Line::Step)?;
        self.delay.delay_us(self.timing.step_high_us);
        write(&mut self.step_pin, false, Line::Step)?;
        self.delay.delay_us(self.timing.step_low_us);
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        let level = self.enable_polarity.level(enabled);
        match self.enable_pin.as_mut() {
            Some(pin) => write(pin, level, Line::Enable),
            None => Ok(()),
        }
    }
}

fn write<P: OutputPin>(pin: &mut P, high: bool, line: Line) -> Result<()> {
    pin.set_state(PinState::from(high))
        .map_err(|_| MotorError::Pin(line).into())
}
