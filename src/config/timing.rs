//! Pulse timing configuration.

use serde::Deserialize;

/// Low-level timing protocol for the STEP/DIR/ENABLE lines.
///
/// All values are microseconds. The step period is
/// `step_high_us + step_low_us` and is uniform for every step of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimingConfig {
    /// Time STEP is held HIGH for each pulse.
    pub step_high_us: u32,

    /// Time STEP is held LOW after each pulse.
    pub step_low_us: u32,

    /// Hold time after setting DIR before the first step edge.
    pub direction_setup_us: u32,

    /// Hold time after disabling the driver before the lines are released.
    pub enable_settle_us: u32,
}

impl PulseTimingConfig {
    /// Default step period (2 ms, 500 steps/s).
    pub const DEFAULT_STEP_PERIOD_US: u32 = 2_000;

    /// Build a timing with an even HIGH/LOW split of `period_us`.
    ///
    /// Odd periods give the extra microsecond to the LOW phase.
    pub fn with_step_period_us(period_us: u32) -> Self {
        let high = period_us / 2;
        Self {
            step_high_us: high,
            step_low_us: period_us - high,
            ..Self::default()
        }
    }

    /// Total time of one HIGH+LOW cycle.
    #[inline]
    pub fn step_period_us(&self) -> u32 {
        self.step_high_us.saturating_add(self.step_low_us)
    }

    /// Approximate step rate in steps per second.
    pub fn steps_per_sec(&self) -> u32 {
        match self.step_period_us() {
            0 => 0,
            period => 1_000_000 / period,
        }
    }

    /// Time a move of `steps` steps holds the caller, in microseconds.
    pub fn move_duration_us(&self, steps: u32) -> u64 {
        self.direction_setup_us as u64 + steps as u64 * self.step_period_us() as u64
    }
}

impl Default for PulseTimingConfig {
    fn default() -> Self {
        Self {
            step_high_us: Self::DEFAULT_STEP_PERIOD_US / 2,
            step_low_us: Self::DEFAULT_STEP_PERIOD_US / 2,
            direction_setup_us: 1_000,
            enable_settle_us: 100_000,
        }
    }
}
