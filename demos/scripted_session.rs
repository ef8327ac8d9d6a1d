//! Scripted jog session example.
//!
//! Replays a fixed list of operator commands against simulated lines and
//! prints every outcome line, then reports what the lines saw.
//!
//! Runs on any host: `cargo run --example scripted_session`

use stepper_jog::config::PulseTimingConfig;
use stepper_jog::sim::{SimulatedPin, ThreadDelay};
use stepper_jog::{
    ControlLoop, NeverInterrupted, ProgressConfig, PulseDriverBuilder, ScriptedSource,
    ShutdownReason, StdoutConsole,
};

fn main() {
    println!("=== Scripted Session Example ===\n");

    // Keep clones to observe the lines after the driver took them
    let step = SimulatedPin::new(8, "STEP");
    let dir = SimulatedPin::new(10, "DIR");
    let enable = SimulatedPin::new(12, "ENABLE");

    let driver = PulseDriverBuilder::new()
        .name("demo")
        .step_pin(step.clone())
        .dir_pin(dir.clone())
        .enable_pin(enable.clone())
        .delay(ThreadDelay)
        // 0.5 ms per step keeps the demo short
        .timing(PulseTimingConfig::with_step_period_us(500))
        .build()
        .expect("all parts supplied");

    let script = ["right 120", "left 0", "up 5", "left 30", "quit"];
    for line in script {
        println!("> {}", line);
    }
    println!();

    let reason = ControlLoop::new(
        driver,
        ScriptedSource::new(script),
        StdoutConsole,
        NeverInterrupted,
    )
    .with_progress(ProgressConfig {
        threshold_steps: 100,
        interval_steps: 40,
    })
    .run();

    println!();
    println!("Session ended: {:?}", reason);
    println!("STEP pulses:   {}", step.rising_edges());
    println!("DIR level:     {}", if dir.is_high() { "HIGH" } else { "LOW" });
    println!(
        "Driver:        {}",
        if enable.is_high() { "disabled" } else { "enabled" }
    );

    assert_eq!(reason, ShutdownReason::Quit);
    assert_eq!(step.rising_edges(), 150);
}
