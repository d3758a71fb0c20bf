//! System configuration parameters
//!
//! Board wiring and loop timing for the LilyBlink firmware.  Compiled in and
//! validated once at boot; nothing here changes while the loop is running.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::app::behavior::BehaviorKind;
use crate::app::bindings::MAX_BINDINGS;
use crate::error::ConfigError;
use crate::pins::{self, Pin};

/// Length of one tick in microseconds.
pub const TICK_BUDGET_US: u32 = 1_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Tick budget (microseconds).  Fixed for the lifetime of the loop.
    pub tick_budget_us: u32,
    /// Ticks between heartbeat log lines (0 disables them).
    pub stats_interval_ticks: u32,

    // --- Wiring ---
    /// Output pins, in the order their behaviors run.
    pub pins: Vec<Pin, MAX_BINDINGS>,
    /// Behavior for each entry of `pins` (same index).
    pub behaviors: Vec<BehaviorKind, MAX_BINDINGS>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        // LilyPad shirt: four front LEDs plus the on-board health LED.
        let wiring = [
            (pins::LED_2_GPIO, BehaviorKind::BlinkFast),
            (pins::LED_12_GPIO, BehaviorKind::BlinkBurst),
            (pins::LED_7_GPIO, BehaviorKind::BlinkSlow),
            (pins::LED_9_GPIO, BehaviorKind::BlinkBurst),
            (pins::HEALTH_GPIO, BehaviorKind::BlinkSlow),
        ];

        let mut pins: Vec<Pin, MAX_BINDINGS> = Vec::new();
        let mut behaviors: Vec<BehaviorKind, MAX_BINDINGS> = Vec::new();
        for (pin, kind) in wiring {
            // Five entries always fit in MAX_BINDINGS.
            let _ = pins.push(pin);
            let _ = behaviors.push(kind);
        }

        Self {
            tick_budget_us: TICK_BUDGET_US,
            stats_interval_ticks: 10_000, // every 10 s
            pins,
            behaviors,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_budget_us == 0 {
            return Err(ConfigError::ZeroTickBudget);
        }
        if self.pins.len() != self.behaviors.len() {
            return Err(ConfigError::LengthMismatch {
                pins: self.pins.len(),
                behaviors: self.behaviors.len(),
            });
        }
        if self.pins.is_empty() {
            return Err(ConfigError::NoBindings);
        }
        for (i, pin) in self.pins.iter().enumerate() {
            if self.pins[..i].contains(pin) {
                return Err(ConfigError::DuplicatePin(*pin));
            }
        }
        Ok(())
    }
}
