//! Mock hardware adapters for integration tests.
//!
//! `MockOutput` records every output call so tests can assert on the full
//! write history; `FakeClock` simulates step cost and sleeps without
//! actually waiting.

use lilyblink::app::ports::{ClockPort, OutputPort, PinMode};
use lilyblink::pins::Pin;
use lilyblink::scheduler::TickScheduler;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    PinMode(Pin),
    Digital { pin: Pin, level: bool },
    Analog { pin: Pin, level: u8 },
}

impl OutputCall {
    pub fn pin(&self) -> Pin {
        match *self {
            Self::PinMode(pin) | Self::Digital { pin, .. } | Self::Analog { pin, .. } => pin,
        }
    }
}

// ── MockOutput ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockOutput {
    pub calls: Vec<OutputCall>,
}

impl OutputPort for MockOutput {
    fn set_pin_mode(&mut self, pin: Pin, _mode: PinMode) {
        self.calls.push(OutputCall::PinMode(pin));
    }

    fn set_digital_level(&mut self, pin: Pin, level: bool) {
        self.calls.push(OutputCall::Digital { pin, level });
    }

    fn set_analog_level(&mut self, pin: Pin, level: u8) {
        self.calls.push(OutputCall::Analog { pin, level });
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// Simulated time.  Every tick reads the clock twice; the second read
/// (end of the step phase) is charged `step_cost_us`.
pub struct FakeClock {
    now: u64,
    step_cost_us: u64,
    reads: u64,
    pub tick_starts: Vec<u64>,
    pub sleeps: Vec<u32>,
}

impl FakeClock {
    pub fn new(step_cost_us: u64) -> Self {
        Self {
            now: 0,
            step_cost_us,
            reads: 0,
            tick_starts: Vec::new(),
            sleeps: Vec::new(),
        }
    }
}

impl ClockPort for FakeClock {
    fn now_micros(&mut self) -> u64 {
        if self.reads % 2 == 0 {
            self.tick_starts.push(self.now);
        } else {
            self.now += self.step_cost_us;
        }
        self.reads += 1;
        self.now
    }

    fn sleep_micros(&mut self, us: u32) {
        self.sleeps.push(us);
        self.now += u64::from(us);
    }
}

// ── Helpers ───────────────────────────────────────────────────

/// Run `ticks` ticks and return the output calls made during each one.
pub fn run_ticks<C: ClockPort>(
    scheduler: &mut TickScheduler<MockOutput, C>,
    ticks: usize,
) -> Vec<Vec<OutputCall>> {
    let mut per_tick = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let before = scheduler.output().calls.len();
        scheduler.run_tick();
        per_tick.push(scheduler.output().calls[before..].to_vec());
    }
    per_tick
}

/// Ticks at which `pin` was written, with the level written.
pub fn digital_trace(per_tick: &[Vec<OutputCall>], pin: Pin) -> Vec<(usize, bool)> {
    per_tick
        .iter()
        .enumerate()
        .flat_map(|(tick, calls)| {
            calls.iter().filter_map(move |c| match *c {
                OutputCall::Digital { pin: p, level } if p == pin => Some((tick, level)),
                _ => None,
            })
        })
        .collect()
}
