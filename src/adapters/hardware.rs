//! Hardware adapter — bridges the board's GPIO/LEDC peripherals to
//! [`OutputPort`].
//!
//! This is the only module in the system that touches actual hardware.
//! On non-espidf targets the underlying `hw_init` calls are no-ops and
//! the adapter just tracks the last level per pin in memory.
//!
//! Analog outputs get an LEDC channel on their first write; channels are
//! handed out in order and never released.

use heapless::Vec;
use log::error;

use crate::app::bindings::MAX_BINDINGS;
use crate::app::ports::{OutputPort, PinMode};
use crate::drivers::hw_init;
use crate::error::HwInitError;
use crate::pins::{LEDC_CHANNEL_COUNT, Pin};

/// Last level driven onto a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Digital(bool),
    Analog(u8),
}

/// Concrete adapter owning every LED output on the board.
pub struct HardwareAdapter {
    outputs: Vec<Pin, MAX_BINDINGS>,
    levels: Vec<(Pin, Level), MAX_BINDINGS>,
    /// Index is the LEDC channel number.
    pwm_pins: Vec<Pin, LEDC_CHANNEL_COUNT>,
    ledc_ready: bool,
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            levels: Vec::new(),
            pwm_pins: Vec::new(),
            ledc_ready: false,
        }
    }

    /// Whether `pin` has been configured as an output.
    pub fn is_output(&self, pin: Pin) -> bool {
        self.outputs.contains(&pin)
    }

    /// The last level successfully written to `pin`.
    pub fn level(&self, pin: Pin) -> Option<Level> {
        self.levels.iter().find(|(p, _)| *p == pin).map(|(_, l)| *l)
    }

    /// LEDC channel bound to `pin`, if it has been used as an analog output.
    pub fn pwm_channel(&self, pin: Pin) -> Option<u32> {
        self.pwm_pins
            .iter()
            .position(|p| *p == pin)
            .map(|i| i as u32)
    }

    fn ensure_pwm_channel(&mut self, pin: Pin) -> Result<u32, HwInitError> {
        if let Some(channel) = self.pwm_channel(pin) {
            return Ok(channel);
        }
        if self.pwm_pins.is_full() {
            return Err(HwInitError::LedcExhausted);
        }
        if !self.ledc_ready {
            hw_init::init_ledc_timer()?;
            self.ledc_ready = true;
        }
        let channel = self.pwm_pins.len() as u32;
        hw_init::attach_ledc(channel, pin)?;
        self.pwm_pins
            .push(pin)
            .map_err(|_| HwInitError::LedcExhausted)?;
        Ok(channel)
    }

    fn remember(&mut self, pin: Pin, level: Level) {
        if let Some(slot) = self.levels.iter_mut().find(|(p, _)| *p == pin) {
            slot.1 = level;
        } else {
            // Beyond binding-table capacity there is nothing worth tracking.
            let _ = self.levels.push((pin, level));
        }
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn set_pin_mode(&mut self, pin: Pin, mode: PinMode) {
        match mode {
            PinMode::Output => {
                if let Err(e) = hw_init::configure_output(pin) {
                    error!("hardware: GPIO{} output config failed: {}", pin, e);
                    return;
                }
                if !self.outputs.contains(&pin) && self.outputs.push(pin).is_err() {
                    error!("hardware: GPIO{} exceeds output capacity", pin);
                }
            }
        }
    }

    fn set_digital_level(&mut self, pin: Pin, level: bool) {
        hw_init::gpio_write(pin, level);
        self.remember(pin, Level::Digital(level));
    }

    fn set_analog_level(&mut self, pin: Pin, level: u8) {
        match self.ensure_pwm_channel(pin) {
            Ok(channel) => {
                hw_init::ledc_set(channel, level);
                self.remember(pin, Level::Analog(level));
            }
            Err(e) => error!("hardware: GPIO{} PWM unavailable: {}", pin, e),
        }
    }
}
