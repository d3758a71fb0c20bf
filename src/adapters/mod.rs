//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                     |
//! |------------|--------------|---------------------------------|
//! | `hardware` | OutputPort   | ESP32 GPIO, LEDC PWM            |
//! | `time`     | ClockPort    | esp_timer + `DelayNs`           |

pub mod hardware;
pub mod time;
