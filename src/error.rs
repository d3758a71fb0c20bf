//! Unified error types for the LilyBlink firmware.
//!
//! A single `Error` enum that every subsystem converts into.  All variants
//! are `Copy`, so they can be returned from boot-time validation without
//! allocation.
//!
//! The tick loop itself has no error path: overruns are counted, not
//! reported, and hardware writes are assumed infallible at this level.

use core::fmt;

use crate::pins::Pin;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The board wiring or timing configuration is invalid.
    Config(ConfigError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Fatal configuration problems, detected once at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The pin list and behavior list differ in length.
    LengthMismatch { pins: usize, behaviors: usize },
    /// More bindings than the table has slots for.
    TooManyBindings(usize),
    /// The same pin is bound twice.
    DuplicatePin(Pin),
    /// The table would be empty.
    NoBindings,
    /// A zero-length tick cannot be scheduled.
    ZeroTickBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { pins, behaviors } => {
                write!(f, "{pins} pins but {behaviors} behaviors")
            }
            Self::TooManyBindings(n) => write!(f, "{n} bindings exceed table capacity"),
            Self::DuplicatePin(pin) => write!(f, "GPIO{pin} bound more than once"),
            Self::NoBindings => write!(f, "no pins bound"),
            Self::ZeroTickBudget => write!(f, "tick budget must be non-zero"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Hardware initialisation errors
// ---------------------------------------------------------------------------

/// Errors while configuring a peripheral.  Carries the ESP-IDF return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    /// Every LEDC channel is already bound to another pin.
    LedcExhausted,
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={rc})"),
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={rc})"),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={rc})"),
            Self::LedcExhausted => write!(f, "no free LEDC channel"),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
