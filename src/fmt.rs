//! Logging shims.
//!
//! Forward to `tracing` when the `std` feature is on and compile to nothing
//! otherwise, so the core stays usable on bare `no_std` targets.

#![allow(unused_macros)]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        ::tracing::debug!($($arg)*);
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        ::tracing::info!($($arg)*);
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        ::tracing::warn!($($arg)*);
    };
}
