//! Peripheral helpers.

pub mod hw_init;
