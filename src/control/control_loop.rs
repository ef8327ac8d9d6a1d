//! Command-to-motion loop and driver lifecycle.

use core::ops::ControlFlow;

use crate::command::{is_quit_sentinel, parse, CommandSource};
use crate::config::ProgressConfig;
use crate::error::{Error, Result};
use crate::motion::MoveCommand;
use crate::motor::{MotorState, MoveOutcome, StepDriver};

use super::events::{Console, Event};
use super::interrupt::InterruptSignal;

/// Lifecycle state of the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlState {
    /// Waiting for the next command.
    Idle,
    /// A move is in progress.
    Executing,
    /// Driver teardown in progress.
    ShuttingDown,
    /// Session over.
    Terminated,
}

impl ControlState {
    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            ControlState::Idle => "Idle",
            ControlState::Executing => "Executing",
            ControlState::ShuttingDown => "ShuttingDown",
            ControlState::Terminated => "Terminated",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ShutdownReason {
    /// Operator typed a quit sentinel.
    Quit,
    /// Command input ended.
    EndOfInput,
    /// External interrupt, between commands or during a move.
    Interrupted,
    /// Driver could not be initialized or failed during a move.
    Fault(Error),
}

impl ShutdownReason {
    /// Whether the session ended without a fault.
    #[inline]
    pub fn is_clean(&self) -> bool {
        !matches!(self, ShutdownReason::Fault(_))
    }
}

/// Reads commands, drives the motor and owns the driver lifecycle.
///
/// Generic over:
/// - `D`: the step driver (usually a [`PulseDriver`](crate::PulseDriver))
/// - `S`: where command lines come from
/// - `C`: where outcome lines go
/// - `I`: the external interrupt flag
///
/// Once [`run`](Self::run) has started, the driver is shut down exactly once:
/// by `run` itself on every exit path, or on drop if `run` never got there.
pub struct ControlLoop<D, S, C, I>
where
    D: StepDriver,
    S: CommandSource,
    C: Console,
    I: InterruptSignal,
{
    driver: D,
    source: S,
    console: C,
    interrupt: I,
    progress: ProgressConfig,
    motor: MotorState,
    state: ControlState,
    started: bool,
    shut_down: bool,
    outcome: Option<ShutdownReason>,
}

impl<D, S, C, I> ControlLoop<D, S, C, I>
where
    D: StepDriver,
    S: CommandSource,
    C: Console,
    I: InterruptSignal,
{
    /// Create a loop in the Idle state. Nothing is written to the driver yet.
    pub fn new(driver: D, source: S, console: C, interrupt: I) -> Self {
        Self {
            driver,
            source,
            console,
            interrupt,
            progress: ProgressConfig::default(),
            motor: MotorState::new(),
            state: ControlState::Idle,
            started: false,
            shut_down: false,
            outcome: None,
        }
    }

    /// Set the progress reporting policy.
    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// What the loop knows about the driver outputs.
    #[inline]
    pub fn motor_state(&self) -> &MotorState {
        &self.motor
    }

    /// Access the driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the session to termination.
    ///
    /// Enables the driver, serves commands until quit, end of input, an
    /// interrupt or a fault, then disables the driver. Returns the reason the
    /// session ended; calling it again returns the same reason without
    /// touching the driver.
    pub fn run(&mut self) -> ShutdownReason {
        if let Some(reason) = &self.outcome {
            return reason.clone();
        }

        self.started = true;
        let reason = match self.start() {
            Ok(()) => self.serve(),
            Err(e) => {
                warn!(error = %e, "driver initialization failed");
                self.console.emit(&Event::Fault(e.clone()));
                ShutdownReason::Fault(e)
            }
        };

        self.finish();
        info!(reason = ?reason, "session terminated");
        self.outcome = Some(reason.clone());
        reason
    }

    fn start(&mut self) -> Result<()> {
        self.driver.initialize()?;
        self.motor.mark_enabled();
        info!("driver enabled, waiting for commands");
        self.console.emit(&Event::Ready);
        Ok(())
    }

    fn serve(&mut self) -> ShutdownReason {
        loop {
            if let Some(reason) = self.check_interrupt() {
                return reason;
            }

            let line = self.source.next_line();

            if let Some(reason) = self.check_interrupt() {
                return reason;
            }

            let Some(line) = line else {
                self.console.emit(&Event::EndOfInput);
                return ShutdownReason::EndOfInput;
            };
            let line = line.as_ref();

            if line.trim().is_empty() {
                continue;
            }

            if is_quit_sentinel(line) {
                self.console.emit(&Event::QuitRequested);
                return ShutdownReason::Quit;
            }

            match parse(line) {
                Ok(command) => {
                    if let Some(reason) = self.execute(command) {
                        return reason;
                    }
                }
                Err(e) => {
                    debug!(line, error = ?e, "command rejected");
                    self.console.emit(&Event::Rejected(e));
                }
            }
        }
    }

    fn check_interrupt(&mut self) -> Option<ShutdownReason> {
        if self.interrupt.is_raised() {
            self.console.emit(&Event::InterruptReceived);
            Some(ShutdownReason::Interrupted)
        } else {
            None
        }
    }

    /// Run one move. Returns a reason when the session must end.
    fn execute(&mut self, command: MoveCommand) -> Option<ShutdownReason> {
        self.enter(ControlState::Executing);

        let direction = command.direction();
        let total = command.steps();
        if self.motor.latch(direction) {
            debug!(%direction, "direction latched");
        }
        debug!(
            %command,
            expected_us = self.driver.move_duration_us(total),
            "move started"
        );

        let Self {
            driver,
            console,
            interrupt,
            progress,
            ..
        } = self;

        let result = driver.move_steps_with(direction, total, |completed| {
            if progress.should_report(total, completed) {
                console.emit(&Event::Progress { completed, total });
            }
            if completed < total && interrupt.is_raised() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        match result {
            Ok(MoveOutcome::Completed) => {
                self.console.emit(&Event::Completed(command));
                self.enter(ControlState::Idle);
                None
            }
            Ok(MoveOutcome::Aborted { completed }) => {
                info!(completed, total, "move interrupted");
                self.console
                    .emit(&Event::MoveInterrupted { command, completed });
                Some(ShutdownReason::Interrupted)
            }
            Err(e) => {
                warn!(error = %e, "move failed");
                self.console.emit(&Event::Fault(e.clone()));
                Some(ShutdownReason::Fault(e))
            }
        }
    }

    fn enter(&mut self, next: ControlState) {
        trace!(from = self.state.name(), to = next.name(), "state change");
        self.state = next;
    }

    fn finish(&mut self) {
        self.enter(ControlState::ShuttingDown);
        self.shutdown_driver();
        self.enter(ControlState::Terminated);
        self.console.emit(&Event::Terminated);
    }

    fn shutdown_driver(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        match self.driver.shutdown() {
            Ok(()) => self.console.emit(&Event::DriverDisabled),
            Err(e) => {
                warn!(error = %e, "driver shutdown reported a problem");
                self.console.emit(&Event::ShutdownFailed(e));
            }
        }
        self.motor.mark_disabled();
    }
}

impl<D, S, C, I> Drop for ControlLoop<D, S, C, I>
where
    D: StepDriver,
    S: CommandSource,
    C: Console,
    I: InterruptSignal,
{
    fn drop(&mut self) {
        if self.started && !self.shut_down {
            warn!("control loop dropped with driver active, shutting down");
            self.finish();
        }
    }
}
