//! `stepper-jog`: interactive jog console for a STEP/DIR stepper driver.
//!
//! Reads `right <steps>` / `left <steps>` lines from stdin and drives the
//! configured lines. Built with the `rpi` feature it drives Raspberry Pi GPIO
//! through rppal, pins numbered as on the 40-pin header (defaults 8/10/12,
//! i.e. BCM 14/15/18). Without it the lines are simulated.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_hal::digital::OutputPin;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stepper_jog::config::ControllerConfig;
#[cfg(not(feature = "rpi"))]
use stepper_jog::sim::SimulatedPin;
use stepper_jog::sim::ThreadDelay;
use stepper_jog::{ControlLoop, PulseDriverBuilder, ShutdownReason, StdinSource, StdoutConsole};

#[derive(Debug, Parser)]
#[command(name = "stepper-jog", version, about = "Jog a stepper motor from the terminal")]
struct Args {
    /// TOML configuration file (pins, timing, driver, progress)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log driver activity at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stepper_jog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(args: &Args) -> Result<ControllerConfig> {
    match &args.config {
        Some(path) => stepper_jog::load_config(path)
            .with_context(|| format!("failed to load config '{}'", path.display())),
        None => Ok(ControllerConfig::default()),
    }
}

/// Run one session on the given lines.
fn session<P: OutputPin>(
    config: &ControllerConfig,
    step: P,
    dir: P,
    enable: Option<P>,
    interrupt: Arc<AtomicBool>,
) -> Result<ShutdownReason> {
    let source = StdinSource::spawn(Arc::clone(&interrupt))
        .context("failed to start command reader")?
        .with_prompt("> ");

    let builder = PulseDriverBuilder::new()
        .from_config(config)
        .step_pin(step)
        .dir_pin(dir)
        .delay(ThreadDelay);

    let reason = match enable {
        Some(pin) => {
            let driver = builder.enable_pin(pin).build()?;
            ControlLoop::new(driver, source, StdoutConsole, interrupt)
                .with_progress(config.progress)
                .run()
        }
        None => {
            let driver = builder.build()?;
            ControlLoop::new(driver, source, StdoutConsole, interrupt)
                .with_progress(config.progress)
                .run()
        }
    };
    Ok(reason)
}

#[cfg(feature = "rpi")]
mod gpio {
    use anyhow::{Context, Result};
    use rppal::gpio::{Gpio, OutputPin};

    use stepper_jog::config::board_to_bcm;

    /// Claim header pin `board` as an output at `high`.
    pub fn output(gpio: &Gpio, board: u8, label: &str, high: bool) -> Result<OutputPin> {
        let bcm = board_to_bcm(board)
            .with_context(|| format!("{} pin {} is not a GPIO header pin", label, board))?;
        let pin = gpio
            .get(bcm)
            .with_context(|| format!("failed to claim GPIO {} for {}", bcm, label))?;
        Ok(if high {
            pin.into_output_high()
        } else {
            pin.into_output_low()
        })
    }
}

#[cfg(feature = "rpi")]
fn drive(config: &ControllerConfig, interrupt: Arc<AtomicBool>) -> Result<ShutdownReason> {
    let gpio = rppal::gpio::Gpio::new().context("failed to open GPIO")?;

    let step = gpio::output(&gpio, config.pins.step, "STEP", false)?;
    let dir = gpio::output(&gpio, config.pins.dir, "DIR", false)?;
    // Claimed at the disabled level; initialize enables it
    let disabled = config.driver.enable_polarity.level(false);
    let enable = config
        .pins
        .enable
        .map(|pin| gpio::output(&gpio, pin, "ENABLE", disabled))
        .transpose()?;

    tracing::info!(backend = "gpio", "lines claimed");
    session(config, step, dir, enable, interrupt)
}

#[cfg(not(feature = "rpi"))]
fn drive(config: &ControllerConfig, interrupt: Arc<AtomicBool>) -> Result<ShutdownReason> {
    let step = SimulatedPin::new(config.pins.step, "STEP");
    let dir = SimulatedPin::new(config.pins.dir, "DIR");
    let enable = config
        .pins
        .enable
        .map(|pin| SimulatedPin::new(pin, "ENABLE"));

    tracing::info!(backend = "simulated", "lines created");
    session(config, step, dir, enable, interrupt)
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load(&args)?;

    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let interrupt = Arc::clone(&interrupt);
        ctrlc::set_handler(move || {
            interrupt.store(true, Ordering::Relaxed);
        })
        .context("failed to install Ctrl-C handler")?;
    }

    tracing::info!(
        step = config.pins.step,
        dir = config.pins.dir,
        enable = ?config.pins.enable,
        steps_per_sec = config.timing.steps_per_sec(),
        "starting"
    );

    let reason = drive(&config, interrupt)?;

    Ok(if reason.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
