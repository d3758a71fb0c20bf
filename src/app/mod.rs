//! Application core — the behavior engine, zero I/O.
//!
//! Behaviors and the binding table are pure logic.  They reach the LEDs
//! only through the **port traits** in [`ports`], so every waveform can be
//! checked without real peripherals.

pub mod behavior;
pub mod bindings;
pub mod ports;
