//! Binding table: which behavior drives which pin.
//!
//! The table owns every [`Behavior`] for the lifetime of the firmware.  It
//! is built once at boot and exposes no way to add or remove slots
//! afterwards.  Traversal order is declaration order, every time.

use heapless::Vec;

use super::behavior::{Behavior, BehaviorKind};
use crate::config::SystemConfig;
use crate::error::ConfigError;
use crate::pins::Pin;

/// Maximum number of bound pins (stack-allocated).
pub const MAX_BINDINGS: usize = 8;

/// One pin paired with the behavior it exclusively owns.
#[derive(Debug)]
pub struct Binding {
    pub pin: Pin,
    pub behavior: Behavior,
}

/// Fixed-capacity, ordered pin → behavior map.
#[derive(Debug)]
pub struct BindingTable {
    slots: Vec<Binding, MAX_BINDINGS>,
}

impl BindingTable {
    /// Build from two parallel arrays.
    ///
    /// Equal length is enforced by the type system and capacity by a
    /// compile-time assertion, so only a duplicate pin can fail here.
    pub fn from_parts<const N: usize>(
        pins: [Pin; N],
        behaviors: [Behavior; N],
    ) -> Result<Self, ConfigError> {
        const { assert!(N <= MAX_BINDINGS, "binding table capacity exceeded") };

        let mut slots: Vec<Binding, MAX_BINDINGS> = Vec::new();
        for (pin, behavior) in pins.into_iter().zip(behaviors) {
            if slots.iter().any(|b| b.pin == pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
            // Capacity checked at compile time above.
            let _ = slots.push(Binding { pin, behavior });
        }
        Ok(Self { slots })
    }

    /// Build from runtime lists, e.g. the board configuration.
    pub fn from_lists(pins: &[Pin], kinds: &[BehaviorKind]) -> Result<Self, ConfigError> {
        if pins.len() != kinds.len() {
            return Err(ConfigError::LengthMismatch {
                pins: pins.len(),
                behaviors: kinds.len(),
            });
        }
        if pins.len() > MAX_BINDINGS {
            return Err(ConfigError::TooManyBindings(pins.len()));
        }

        let mut slots: Vec<Binding, MAX_BINDINGS> = Vec::new();
        for (&pin, &kind) in pins.iter().zip(kinds) {
            if slots.iter().any(|b| b.pin == pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
            slots
                .push(Binding {
                    pin,
                    behavior: kind.build(),
                })
                .map_err(|_| ConfigError::TooManyBindings(pins.len()))?;
        }
        Ok(Self { slots })
    }

    /// Build the table described by `config` after validating it.
    pub fn from_config(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::from_lists(&config.pins, &config.behaviors)
    }

    /// Visit every binding in declaration order.
    pub fn for_each_binding<F>(&mut self, mut f: F)
    where
        F: FnMut(Pin, &mut Behavior),
    {
        for slot in self.slots.iter_mut() {
            f(slot.pin, &mut slot.behavior);
        }
    }

    /// Bound pins in declaration order.
    pub fn pins(&self) -> impl Iterator<Item = Pin> + '_ {
        self.slots.iter().map(|b| b.pin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
