//! Pin-level timing protocol of the pulse driver.

use proptest::prelude::*;

use stepper_jog::error::Line;
use stepper_jog::Direction;

use crate::support::{recorded_driver, timing, Log, Signal};

fn expected_move(dir_level: bool, steps: u32) -> Vec<Signal> {
    let timing = timing();
    let mut signals = vec![
        Signal::Level(Line::Dir, dir_level),
        Signal::Hold(timing.direction_setup_us),
    ];
    for _ in 0..steps {
        signals.extend([
            Signal::Level(Line::Step, true),
            Signal::Hold(timing.step_high_us),
            Signal::Level(Line::Step, false),
            Signal::Hold(timing.step_low_us),
        ]);
    }
    signals
}

proptest! {
    #[test]
    fn move_emits_exact_pulse_train(steps in 1u32..300, clockwise in any::<bool>()) {
        let log = Log::new();
        let mut driver = recorded_driver(&log);
        let direction = if clockwise { Direction::Clockwise } else { Direction::CounterClockwise };

        driver.move_steps(direction, steps).unwrap();

        prop_assert_eq!(log.pulses(Line::Step), steps as usize);
        prop_assert_eq!(log.writes(Line::Dir).len(), 1);
        prop_assert!(log.writes(Line::Enable).is_empty());
        prop_assert_eq!(log.signals(), expected_move(clockwise, steps));
    }
}

#[test]
fn test_initialize_then_shutdown_sequence() {
    let log = Log::new();
    let mut driver = recorded_driver(&log);

    driver.initialize().unwrap();
    driver.shutdown().unwrap();

    assert_eq!(
        log.signals(),
        [
            Signal::Level(Line::Step, false),
            Signal::Level(Line::Dir, false),
            // Active-low: LOW enables
            Signal::Level(Line::Enable, false),
            Signal::Level(Line::Enable, true),
            Signal::Hold(timing().enable_settle_us),
            Signal::Level(Line::Step, false),
            Signal::Level(Line::Dir, false),
        ]
    );
}

#[test]
fn test_initialize_is_idempotent() {
    let log = Log::new();
    let mut driver = recorded_driver(&log);

    driver.initialize().unwrap();
    let first = log.signals();
    log.clear();
    driver.initialize().unwrap();

    assert_eq!(log.signals(), first);
}
