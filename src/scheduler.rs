//! Tick scheduler.
//!
//! Drives every bound behavior once per tick, in table order, then sleeps
//! off whatever is left of the tick budget.
//!
//! ```text
//!   ┌──────────── tick budget (1000 µs) ────────────┐
//!   │ t0 │ step pin₀ │ step pin₁ │ … │ sleep(rest)  │
//!   └───────────────────────────────────────────────┘
//! ```
//!
//! Timing is soft real-time: when the steps overrun the budget the next
//! tick starts immediately, the overrun is counted, and nothing else
//! happens.  Because the sleep is computed from a timestamp taken at the
//! top of each tick, step time does not accumulate into drift.

use log::{info, warn};

use crate::app::bindings::BindingTable;
use crate::app::ports::{ClockPort, OutputPort, PinMode};
use crate::config::SystemConfig;

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Time spent stepping behaviors.
    pub elapsed_us: u64,
    /// Time slept to fill the budget (0 on overrun).
    pub slept_us: u32,
    /// The steps took the whole budget or longer.
    pub overrun: bool,
}

/// Running counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub overruns: u64,
    /// Longest step phase in the current heartbeat window.
    pub max_elapsed_us: u64,
}

/// The behavior engine's main loop.
///
/// Owns the binding table and both hardware ports for the life of the
/// firmware.
pub struct TickScheduler<O, C> {
    table: BindingTable,
    output: O,
    clock: C,
    budget_us: u32,
    stats_interval: u32,
    stats: TickStats,
    initialised: bool,
}

impl<O: OutputPort, C: ClockPort> TickScheduler<O, C> {
    pub fn new(table: BindingTable, output: O, clock: C, config: &SystemConfig) -> Self {
        Self {
            table,
            output,
            clock,
            budget_us: config.tick_budget_us,
            stats_interval: config.stats_interval_ticks,
            stats: TickStats::default(),
            initialised: false,
        }
    }

    /// Configure every bound pin as an output.  Runs once; later calls are ignored.
    pub fn setup(&mut self) {
        if self.initialised {
            warn!("scheduler: setup() called twice, ignoring");
            return;
        }
        for binding in self.table.iter() {
            self.output.set_pin_mode(binding.pin, PinMode::Output);
            info!(
                "scheduler: GPIO{} -> {:?}",
                binding.pin,
                binding.behavior.kind()
            );
        }
        self.initialised = true;
        info!(
            "scheduler: {} pins, {}us tick",
            self.table.len(),
            self.budget_us
        );
    }

    /// Step every behavior once and sleep out the rest of the tick.
    pub fn run_tick(&mut self) -> TickReport {
        let t0 = self.clock.now_micros();

        let output = &mut self.output;
        self.table
            .for_each_binding(|pin, behavior| behavior.step(pin, &mut *output));

        let elapsed_us = self.clock.now_micros().wrapping_sub(t0);
        let budget = u64::from(self.budget_us);
        let report = if elapsed_us < budget {
            let slept_us = (budget - elapsed_us) as u32;
            self.clock.sleep_micros(slept_us);
            TickReport {
                elapsed_us,
                slept_us,
                overrun: false,
            }
        } else {
            TickReport {
                elapsed_us,
                slept_us: 0,
                overrun: true,
            }
        };

        self.record(&report);
        report
    }

    /// Set up (if not already done) and tick forever.
    pub fn run(mut self) -> ! {
        if !self.initialised {
            self.setup();
        }
        loop {
            self.run_tick();
        }
    }

    fn record(&mut self, report: &TickReport) {
        self.stats.ticks += 1;
        if report.overrun {
            self.stats.overruns += 1;
        }
        self.stats.max_elapsed_us = self.stats.max_elapsed_us.max(report.elapsed_us);

        if self.stats_interval != 0 && self.stats.ticks % u64::from(self.stats_interval) == 0 {
            info!(
                "TICK | n={} | overruns={} | max_step={}us/{}us",
                self.stats.ticks, self.stats.overruns, self.stats.max_elapsed_us, self.budget_us
            );
            self.stats.max_elapsed_us = 0;
        }
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
