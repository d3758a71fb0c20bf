//! Full-board waveforms on the default LilyPad wiring.

use lilyblink::adapters::hardware::{HardwareAdapter, Level};
use lilyblink::app::behavior::BehaviorKind;
use lilyblink::app::bindings::BindingTable;
use lilyblink::config::SystemConfig;
use lilyblink::pins;
use lilyblink::scheduler::TickScheduler;

use crate::mock_hw::{FakeClock, MockOutput, OutputCall, digital_trace, run_ticks};

fn lilypad() -> TickScheduler<MockOutput, FakeClock> {
    let config = SystemConfig::default();
    let table = BindingTable::from_config(&config).unwrap();
    TickScheduler::new(table, MockOutput::default(), FakeClock::new(50), &config)
}

#[test]
fn fast_and_slow_blink_cadence() {
    let mut s = lilypad();
    let per_tick = run_ticks(&mut s, 2_001);

    let fast = digital_trace(&per_tick, pins::LED_2_GPIO);
    assert_eq!(fast[0], (200, false));
    assert_eq!(fast[1], (400, true));
    assert_eq!(fast.len(), 10);

    let slow = digital_trace(&per_tick, pins::LED_7_GPIO);
    assert_eq!(slow, vec![(1_000, false), (2_000, true)]);
    assert_eq!(digital_trace(&per_tick, pins::HEALTH_GPIO), slow);
}

#[test]
fn burst_pins_keep_independent_state() {
    let mut s = lilypad();
    let per_tick = run_ticks(&mut s, 2_000);

    let a = digital_trace(&per_tick, pins::LED_12_GPIO);
    let b = digital_trace(&per_tick, pins::LED_9_GPIO);
    // Two instances of the same behavior advance once per tick each, so
    // their traces are identical and toggle on the 50-tick grid.
    assert_eq!(a, b);
    assert!(a.iter().all(|(tick, _)| tick % 50 == 0));
    assert_eq!(a.len(), 39);

    for (tick, level) in &a {
        if tick % 1_000 >= 600 || tick % 1_000 == 0 {
            assert!(!level, "tick {tick} should be muted");
        }
    }
}

#[test]
fn writes_follow_table_order() {
    let mut s = lilypad();
    let per_tick = run_ticks(&mut s, 1_001);

    // Tick 1000 is a toggle tick for every blink on the board.
    let order: Vec<_> = per_tick[1_000].iter().map(OutputCall::pin).collect();
    assert_eq!(order, vec![2, 12, 7, 9, 13]);
}

#[test]
fn intensity_through_hardware_adapter() {
    let mut config = SystemConfig::default();
    config.pins.clear();
    config.behaviors.clear();
    config.pins.push(pins::LED_9_GPIO).unwrap();
    config.behaviors.push(BehaviorKind::Intensity).unwrap();

    let table = BindingTable::from_config(&config).unwrap();
    let mut s = TickScheduler::new(table, HardwareAdapter::new(), FakeClock::new(10), &config);
    s.setup();
    assert!(s.output().is_output(pins::LED_9_GPIO));

    for _ in 0..=512 {
        s.run_tick();
    }
    assert_eq!(s.output().level(pins::LED_9_GPIO), Some(Level::Analog(128)));

    for _ in 513..=1_023 {
        s.run_tick();
    }
    assert_eq!(s.output().level(pins::LED_9_GPIO), Some(Level::Analog(255)));

    s.run_tick();
    assert_eq!(s.output().level(pins::LED_9_GPIO), Some(Level::Analog(0)));
    assert_eq!(s.output().pwm_channel(pins::LED_9_GPIO), Some(0));
}
