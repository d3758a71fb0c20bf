//! Port traits — the hexagonal boundary between the behavior engine and
//! the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TickScheduler / Behavior (domain)
//! ```
//!
//! Driven adapters implement these traits.  The
//! [`TickScheduler`](crate::scheduler::TickScheduler) consumes them via
//! generics, so the engine never touches registers directly and every
//! waveform can be checked on the host.

use crate::pins::Pin;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → LEDs)
// ───────────────────────────────────────────────────────────────

/// Electrical mode of a pin.  Only outputs are needed for LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output,
}

/// Write-side port: behaviors drive their LED through this.
///
/// Writes are synchronous register operations and are treated as
/// infallible here.  If the target can fail a write, the adapter logs it.
pub trait OutputPort {
    /// Configure `pin` before the first tick.
    fn set_pin_mode(&mut self, pin: Pin, mode: PinMode);

    /// Drive `pin` fully on or off.
    fn set_digital_level(&mut self, pin: Pin, level: bool);

    /// Drive `pin` with an 8-bit PWM duty (0 = off, 255 = full).
    fn set_analog_level(&mut self, pin: Pin, level: u8);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: timer ↔ scheduler)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source plus the blocking delay used at tick boundaries.
pub trait ClockPort {
    /// Microseconds since an arbitrary epoch.  Must not go backwards
    /// within a run; callers still subtract with wrapping arithmetic.
    fn now_micros(&mut self) -> u64;

    /// Block for `us` microseconds.  The only suspension point in the system.
    fn sleep_micros(&mut self, us: u32);
}
