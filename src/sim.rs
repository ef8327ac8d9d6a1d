//! Host-side output lines and delay (std only).
//!
//! [`SimulatedPin`] stands in for a GPIO line on machines without one: it
//! keeps its level and counts rising edges, logging each change at `trace`.
//! [`ThreadDelay`] blocks the calling thread with `std::thread::sleep`.

use core::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Default)]
struct PinShared {
    high: AtomicBool,
    rising_edges: AtomicU64,
}

/// Simulated output line identified by a board pin number.
///
/// Clones share state, so a clone kept outside the driver observes what the
/// driver wrote.
#[derive(Debug, Clone)]
pub struct SimulatedPin {
    id: u8,
    label: &'static str,
    shared: Arc<PinShared>,
}

impl SimulatedPin {
    /// Create a LOW line.
    pub fn new(id: u8, label: &'static str) -> Self {
        Self {
            id,
            label,
            shared: Arc::new(PinShared::default()),
        }
    }

    /// Board pin number.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Current level.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.shared.high.load(Ordering::Relaxed)
    }

    /// LOW to HIGH transitions seen so far.
    #[inline]
    pub fn rising_edges(&self) -> u64 {
        self.shared.rising_edges.load(Ordering::Relaxed)
    }

    fn set(&mut self, high: bool) {
        let was_high = self.shared.high.swap(high, Ordering::Relaxed);
        if was_high != high {
            if high {
                self.shared.rising_edges.fetch_add(1, Ordering::Relaxed);
            }
            trace!(pin = self.id, line = self.label, high, "level change");
        }
    }
}

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl OutputPin for SimulatedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

/// Delay provider sleeping the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_level() {
        let observer = SimulatedPin::new(8, "STEP");
        let mut pin = observer.clone();

        pin.set_high().unwrap();
        pin.set_high().unwrap();
        assert!(observer.is_high());
        pin.set_low().unwrap();
        pin.set_high().unwrap();

        assert_eq!(observer.rising_edges(), 2);
        assert_eq!(observer.id(), 8);
    }
}
