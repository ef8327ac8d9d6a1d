//! Builder pattern for PulseDriver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{ControllerConfig, EnablePolarity, PulseTimingConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::PulseDriver;
use super::no_pin::NoPin;

/// Builder for creating PulseDriver instances.
///
/// Starts without an enable line; [`enable_pin`](Self::enable_pin) adds one.
pub struct PulseDriverBuilder<STEP, DIR, DELAY, EN = NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    EN: OutputPin,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
    timing: PulseTimingConfig,
    enable_polarity: EnablePolarity,
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> Default for PulseDriverBuilder<STEP, DIR, DELAY, NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> PulseDriverBuilder<STEP, DIR, DELAY, NoPin>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            delay: None,
            name: None,
            timing: PulseTimingConfig::default(),
            enable_polarity: EnablePolarity::default(),
            invert_direction: false,
        }
    }
}

impl<STEP, DIR, DELAY, EN> PulseDriverBuilder<STEP, DIR, DELAY, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    EN: OutputPin,
{
    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the enable pin.
    pub fn enable_pin<P: OutputPin>(self, pin: P) -> PulseDriverBuilder<STEP, DIR, DELAY, P> {
        PulseDriverBuilder {
            step_pin: self.step_pin,
            dir_pin: self.dir_pin,
            enable_pin: Some(pin),
            delay: self.delay,
            name: self.name,
            timing: self.timing,
            enable_polarity: self.enable_polarity,
            invert_direction: self.invert_direction,
        }
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the driver name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the pulse timing protocol.
    pub fn timing(mut self, timing: PulseTimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Set the enable line polarity.
    pub fn enable_polarity(mut self, polarity: EnablePolarity) -> Self {
        self.enable_polarity = polarity;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure timing and driver options from a ControllerConfig.
    ///
    /// Pins are still supplied separately.
    pub fn from_config(mut self, config: &ControllerConfig) -> Self {
        self.name = Some(config.driver.name.clone());
        self.timing = config.timing;
        self.enable_polarity = config.driver.enable_polarity;
        self.invert_direction = config.driver.invert_direction;
        self
    }

    /// Build the PulseDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if the STEP pin, DIR pin or delay is missing.
    pub fn build(self) -> Result<PulseDriver<STEP, DIR, DELAY, EN>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::Missing("step_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::Missing("dir_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::Missing("delay")))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("stepper").unwrap_or_default());

        Ok(PulseDriver::new(
            step_pin,
            dir_pin,
            self.enable_pin,
            delay,
            self.timing,
            self.enable_polarity,
            self.invert_direction,
            name,
        ))
    }
}
