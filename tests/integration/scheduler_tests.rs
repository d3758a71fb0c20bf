//! Tick timing: setup ordering, budget filling, and overrun handling.

use lilyblink::app::bindings::BindingTable;
use lilyblink::config::SystemConfig;
use lilyblink::scheduler::TickScheduler;

use crate::mock_hw::{FakeClock, MockOutput, OutputCall, run_ticks};

fn lilypad(step_cost_us: u64) -> TickScheduler<MockOutput, FakeClock> {
    let config = SystemConfig::default();
    let table = BindingTable::from_config(&config).unwrap();
    TickScheduler::new(table, MockOutput::default(), FakeClock::new(step_cost_us), &config)
}

#[test]
fn setup_configures_every_pin_in_table_order() {
    let mut s = lilypad(100);
    s.setup();
    assert_eq!(
        s.output().calls,
        vec![
            OutputCall::PinMode(2),
            OutputCall::PinMode(12),
            OutputCall::PinMode(7),
            OutputCall::PinMode(9),
            OutputCall::PinMode(13),
        ]
    );

    // A second setup is ignored.
    s.setup();
    assert_eq!(s.output().calls.len(), 5);
}

#[test]
fn ticks_start_exactly_one_budget_apart() {
    let mut s = lilypad(250);
    s.setup();
    run_ticks(&mut s, 20);

    let starts = &s.clock().tick_starts;
    assert_eq!(starts.len(), 20);
    assert!(starts.windows(2).all(|w| w[1] - w[0] == 1_000));
    assert!(s.clock().sleeps.iter().all(|&us| us == 750));
    assert_eq!(s.stats().overruns, 0);
}

#[test]
fn overrunning_ticks_never_sleep() {
    let mut s = lilypad(1_500);
    s.setup();
    run_ticks(&mut s, 10);

    assert!(s.clock().sleeps.is_empty());
    let starts = &s.clock().tick_starts;
    assert!(starts.windows(2).all(|w| w[1] - w[0] == 1_500));
    assert_eq!(s.stats().ticks, 10);
    assert_eq!(s.stats().overruns, 10);
}

#[test]
fn zero_cost_ticks_sleep_full_budget() {
    let mut s = lilypad(0);
    let report = s.run_tick();
    assert_eq!(report.elapsed_us, 0);
    assert_eq!(report.slept_us, 1_000);
    assert!(!report.overrun);
}
