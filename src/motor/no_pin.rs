//! Placeholder output for an unwired line.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

/// Output pin that accepts every write and drives nothing.
///
/// Default enable-line type of a driver without an enable line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
