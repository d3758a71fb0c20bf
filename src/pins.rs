//! GPIO pin assignments for the LilyPad shirt boards.
//!
//! Single source of truth — the default binding table in
//! [`config`](crate::config) references these rather than hard-coding
//! pin numbers.

/// GPIO identifier as used by the ESP-IDF driver (`gpio_num_t`).
pub type Pin = i32;

// ---------------------------------------------------------------------------
// Shirt LEDs (sewn onto the front panel with conductive thread)
// ---------------------------------------------------------------------------

pub const LED_2_GPIO: Pin = 2;
pub const LED_12_GPIO: Pin = 12;
pub const LED_7_GPIO: Pin = 7;
pub const LED_9_GPIO: Pin = 9;

// ---------------------------------------------------------------------------
// On-board health LED
// ---------------------------------------------------------------------------

pub const HEALTH_GPIO: Pin = 13;

// ---------------------------------------------------------------------------
// PWM configuration (analog-level outputs)
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for dimmed LEDs (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
/// Number of LEDC channels available for analog outputs.
pub const LEDC_CHANNEL_COUNT: usize = 8;
