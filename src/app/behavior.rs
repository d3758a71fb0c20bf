//! Per-pin LED behaviors.
//!
//! Each behavior is a small countdown state machine stepped once per 1 ms
//! tick.  On every step it updates its own counters and issues at most one
//! write to its pin.
//!
//! | Behavior    | Output  | Cycle                                      |
//! |-------------|---------|--------------------------------------------|
//! | Intensity   | PWM     | ramps 0 → 255 over 1024 ticks, then wraps  |
//! | BlinkFast   | digital | toggles every 200 ticks                    |
//! | BlinkSlow   | digital | toggles every 1000 ticks                   |
//! | BlinkBurst  | digital | 50-tick toggling, muted for the last 400 of every 1000 ticks |
//!
//! Counters are checked *before* they are decremented and reloaded when
//! they hit zero, so a freshly built behavior and one that has just
//! wrapped are indistinguishable.  No division, no floats.
//!
//! The variant set is closed, so dispatch is a single `match` rather than
//! a trait object.

use serde::{Deserialize, Serialize};

use super::ports::OutputPort;
use crate::pins::Pin;

/// Ticks in one full Intensity ramp (a multiple of 256, roughly 1 s).
pub const INTENSITY_PERIOD: u16 = 1024;
/// BlinkFast half-period in ticks.
pub const BLINK_FAST_PERIOD: u16 = 200;
/// BlinkSlow half-period in ticks.
pub const BLINK_SLOW_PERIOD: u16 = 1000;
/// BlinkBurst toggle half-period in ticks.
pub const BURST_TOGGLE_PERIOD: u16 = 50;
/// BlinkBurst envelope length in ticks.
pub const BURST_ENVELOPE: u16 = 1000;
/// Trailing part of the envelope during which BlinkBurst stays dark.
pub const BURST_OFF_TIME: u16 = 400;

// ───────────────────────────────────────────────────────────────
// Behavior tag (configuration side)
// ───────────────────────────────────────────────────────────────

/// Names a behavior variant without carrying any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Intensity,
    BlinkFast,
    BlinkSlow,
    BlinkBurst,
}

impl BehaviorKind {
    /// Build a fresh instance in its initial state.
    pub const fn build(self) -> Behavior {
        match self {
            Self::Intensity => Behavior::intensity(),
            Self::BlinkFast => Behavior::blink_fast(),
            Self::BlinkSlow => Behavior::blink_slow(),
            Self::BlinkBurst => Behavior::blink_burst(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Behavior
// ───────────────────────────────────────────────────────────────

/// A stateful signal generator for one pin.
///
/// Not `Clone`: every binding slot owns its own instance.
#[derive(Debug, PartialEq, Eq)]
pub enum Behavior {
    Intensity(Intensity),
    BlinkFast(Blink),
    BlinkSlow(Blink),
    BlinkBurst(Burst),
}

impl Behavior {
    pub const fn intensity() -> Self {
        Self::Intensity(Intensity::new())
    }

    pub const fn blink_fast() -> Self {
        Self::BlinkFast(Blink::new(BLINK_FAST_PERIOD))
    }

    pub const fn blink_slow() -> Self {
        Self::BlinkSlow(Blink::new(BLINK_SLOW_PERIOD))
    }

    pub const fn blink_burst() -> Self {
        Self::BlinkBurst(Burst::new())
    }

    /// Advance one tick and drive `pin`.
    pub fn step<O: OutputPort + ?Sized>(&mut self, pin: Pin, out: &mut O) {
        match self {
            Self::Intensity(b) => b.step(pin, out),
            Self::BlinkFast(b) | Self::BlinkSlow(b) => b.step(pin, out),
            Self::BlinkBurst(b) => b.step(pin, out),
        }
    }

    pub const fn kind(&self) -> BehaviorKind {
        match self {
            Self::Intensity(_) => BehaviorKind::Intensity,
            Self::BlinkFast(_) => BehaviorKind::BlinkFast,
            Self::BlinkSlow(_) => BehaviorKind::BlinkSlow,
            Self::BlinkBurst(_) => BehaviorKind::BlinkBurst,
        }
    }

    /// Ticks after which the output pattern repeats exactly.
    pub const fn period(&self) -> u32 {
        match self {
            Self::Intensity(_) => INTENSITY_PERIOD as u32,
            Self::BlinkFast(b) | Self::BlinkSlow(b) => 2 * b.period as u32,
            Self::BlinkBurst(_) => BURST_ENVELOPE as u32,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Variants
// ───────────────────────────────────────────────────────────────

/// PWM ramp: the countdown doubles as the inverted brightness.
#[derive(Debug, PartialEq, Eq)]
pub struct Intensity {
    count: u16,
}

impl Intensity {
    pub const fn new() -> Self {
        Self {
            count: INTENSITY_PERIOD,
        }
    }

    fn step<O: OutputPort + ?Sized>(&mut self, pin: Pin, out: &mut O) {
        // count ∈ [1, 1024] here, so the level spans 0..=255.
        out.set_analog_level(pin, ((INTENSITY_PERIOD - self.count) >> 2) as u8);
        self.count -= 1;
        if self.count == 0 {
            self.count = INTENSITY_PERIOD;
        }
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::new()
    }
}

/// Square wave with a half-period of `period` ticks.  Starts logically HIGH.
#[derive(Debug, PartialEq, Eq)]
pub struct Blink {
    period: u16,
    count: u16,
    state: bool,
}

impl Blink {
    pub const fn new(period: u16) -> Self {
        Self {
            period,
            count: period,
            state: true,
        }
    }

    /// Current logical level (the last level written, once toggled).
    pub const fn state(&self) -> bool {
        self.state
    }

    fn step<O: OutputPort + ?Sized>(&mut self, pin: Pin, out: &mut O) {
        if self.count == 0 {
            self.state = !self.state;
            out.set_digital_level(pin, self.state);
            self.count = self.period;
        }
        self.count -= 1;
    }
}

/// Fast toggling gated by a slower free-running envelope.
#[derive(Debug, PartialEq, Eq)]
pub struct Burst {
    count: u16,
    long_count: u16,
    state: bool,
}

impl Burst {
    pub const fn new() -> Self {
        Self {
            count: BURST_TOGGLE_PERIOD,
            long_count: BURST_ENVELOPE,
            state: true,
        }
    }

    pub const fn state(&self) -> bool {
        self.state
    }

    fn step<O: OutputPort + ?Sized>(&mut self, pin: Pin, out: &mut O) {
        if self.count == 0 {
            self.state = !self.state;
            out.set_digital_level(pin, self.state && self.long_count > BURST_OFF_TIME);
            self.count = BURST_TOGGLE_PERIOD;
        }
        // The envelope never resyncs with the toggle phase.
        if self.long_count == 0 {
            self.long_count = BURST_ENVELOPE;
        }
        self.long_count -= 1;
        self.count -= 1;
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self::new()
    }
}
