//! Progress reporting policy.

use serde::Deserialize;

/// When to report progress during a long move.
///
/// Moves longer than `threshold_steps` report after every
/// `interval_steps`-th completed step, the last step included when it
/// falls on the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgressConfig {
    /// Moves must be strictly longer than this to report progress.
    pub threshold_steps: u32,

    /// Steps between progress reports.
    pub interval_steps: u32,
}

impl ProgressConfig {
    /// Whether progress is reported after `completed` of `total` steps.
    #[inline]
    pub fn should_report(&self, total: u32, completed: u32) -> bool {
        total > self.threshold_steps
            && self.interval_steps > 0
            && completed > 0
            && completed % self.interval_steps == 0
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            threshold_steps: 100,
            interval_steps: 50,
        }
    }
}
