//! Error types for stepper-jog.
//!
//! Two families live here. [`ParseError`] covers operator input and never
//! leaves the command loop. [`Error`] covers configuration and driver
//! lifecycle failures, which end a session.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for configuration and driver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Output line or driver lifecycle error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder part was not supplied
    Missing(&'static str),
    /// Step high or low duration is zero
    ZeroStepDuration,
    /// Progress interval is zero
    ZeroProgressInterval,
    /// Two output lines share one pin id
    DuplicatePin(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Output lines driven by the pulse driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// STEP line
    Step,
    /// DIR line
    Dir,
    /// Enable line
    Enable,
}

/// Driver and output line errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Writing to an output line failed
    Pin(Line),
}

/// Rejection of an operator command line.
///
/// Input errors are terminal to one command only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line does not hold exactly two whitespace-separated tokens
    WrongTokenCount(usize),
    /// First token is not a known direction
    UnknownDirection,
    /// Second token is not a base-10 integer
    NonNumericSteps,
    /// Step count is zero or negative
    NonPositiveSteps,
    /// Step count does not fit a single move
    StepsOutOfRange {
        /// Largest accepted step count
        max: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Missing(part) => write!(f, "{} is required", part),
            ConfigError::ZeroStepDuration => {
                write!(f, "Step high and low durations must be at least 1 us")
            }
            ConfigError::ZeroProgressInterval => write!(f, "Progress interval must be > 0"),
            ConfigError::DuplicatePin(pin) => {
                write!(f, "Pin {} is assigned to more than one line", pin)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Step => write!(f, "STEP"),
            Line::Dir => write!(f, "DIR"),
            Line::Enable => write!(f, "ENABLE"),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::Pin(line) => write!(f, "{} line write failed", line),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongTokenCount(_) => {
                write!(f, "Invalid command format. Use: 'right [steps]' or 'left [steps]'")
            }
            ParseError::UnknownDirection => write!(f, "Invalid direction. Use 'right' or 'left'"),
            ParseError::NonNumericSteps => write!(f, "Invalid step count. Must be a number."),
            ParseError::NonPositiveSteps => {
                write!(f, "Invalid step count. Must be positive integer.")
            }
            ParseError::StepsOutOfRange { max } => {
                write!(f, "Invalid step count. Must be at most {}.", max)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
