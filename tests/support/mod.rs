//! Shared recording doubles for the integration tests.
//!
//! Every pin write and every hold lands in one ordered log, so tests can
//! check the relative order of DIR, STEP and ENABLE activity.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use stepper_jog::config::PulseTimingConfig;
use stepper_jog::error::Line;
use stepper_jog::{InterruptSignal, PulseDriver, PulseDriverBuilder};

/// One observable hardware action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A line was written HIGH (`true`) or LOW (`false`).
    Level(Line, bool),
    /// The driver held for this many microseconds.
    Hold(u32),
}

/// Shared, ordered log of signals.
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Signal>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, signal: Signal) {
        self.0.borrow_mut().push(signal);
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    /// Levels written to `line`, in order.
    pub fn writes(&self, line: Line) -> Vec<bool> {
        self.0
            .borrow()
            .iter()
            .filter_map(|s| match *s {
                Signal::Level(l, high) if l == line => Some(high),
                _ => None,
            })
            .collect()
    }

    /// Completed HIGH then LOW pulses on `line`, lines starting LOW.
    pub fn pulses(&self, line: Line) -> usize {
        let mut high = false;
        let mut pulses = 0;
        for level in self.writes(line) {
            if high && !level {
                pulses += 1;
            }
            high = level;
        }
        pulses
    }
}

/// Output pin appending its writes to a [`Log`].
#[derive(Debug)]
pub struct RecordingPin {
    line: Line,
    log: Log,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Signal::Level(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Signal::Level(self.line, true));
        Ok(())
    }
}

/// Delay provider appending holds to a [`Log`] without sleeping.
#[derive(Debug)]
pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Signal::Hold(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Signal::Hold(us));
    }
}

/// Driver with an active-low enable line, all lines recorded in `log`.
pub type RecordedDriver = PulseDriver<RecordingPin, RecordingPin, RecordingDelay, RecordingPin>;

pub fn timing() -> PulseTimingConfig {
    PulseTimingConfig {
        step_high_us: 10,
        step_low_us: 20,
        direction_setup_us: 5,
        enable_settle_us: 1_000,
    }
}

pub fn recorded_driver(log: &Log) -> RecordedDriver {
    PulseDriverBuilder::new()
        .name("recorded")
        .step_pin(log.pin(Line::Step))
        .dir_pin(log.pin(Line::Dir))
        .enable_pin(log.pin(Line::Enable))
        .delay(log.delay())
        .timing(timing())
        .build()
        .expect("all parts supplied")
}

/// Interrupt raised from the `after + 1`-th read on.
#[derive(Debug)]
pub struct RaisedAfter {
    reads: Cell<u32>,
    after: u32,
}

impl RaisedAfter {
    pub fn new(after: u32) -> Self {
        Self {
            reads: Cell::new(0),
            after,
        }
    }
}

impl InterruptSignal for RaisedAfter {
    fn is_raised(&self) -> bool {
        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        reads > self.after
    }
}
