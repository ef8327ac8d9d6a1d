//! External interrupt observation.

use core::sync::atomic::{AtomicBool, Ordering};

/// A flag raised from outside the control loop, e.g. by a Ctrl-C handler.
///
/// The loop only reads it; raising is up to the platform.
pub trait InterruptSignal {
    /// Whether an interrupt has been requested.
    fn is_raised(&self) -> bool;
}

impl InterruptSignal for AtomicBool {
    #[inline]
    fn is_raised(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: InterruptSignal + ?Sized> InterruptSignal for &T {
    #[inline]
    fn is_raised(&self) -> bool {
        (**self).is_raised()
    }
}

#[cfg(feature = "alloc")]
impl<T: InterruptSignal + ?Sized> InterruptSignal for alloc::sync::Arc<T> {
    #[inline]
    fn is_raised(&self) -> bool {
        (**self).is_raised()
    }
}

/// Signal that is never raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverInterrupted;

impl InterruptSignal for NeverInterrupted {
    #[inline]
    fn is_raised(&self) -> bool {
        false
    }
}
