//! Clock adapter.
//!
//! Provides the monotonic microsecond clock and tick-boundary delay.
//!
//! - **`target_os = "espidf"`** — reads `esp_timer_get_time()` (64-bit,
//!   microsecond precision, monotonic) and delays with any
//!   [`DelayNs`], normally `esp_idf_hal::delay::Ets`.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` and
//!   [`StdDelay`] for host-side simulation.

use embedded_hal::delay::DelayNs;

use crate::app::ports::ClockPort;

/// Monotonic clock plus a blocking delay provider.
pub struct SystemClock<D> {
    delay: D,
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl<D: DelayNs> SystemClock<D> {
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl<D: DelayNs> ClockPort for SystemClock<D> {
    #[cfg(target_os = "espidf")]
    fn now_micros(&mut self) -> u64 {
        // SAFETY: esp_timer_get_time reads the free-running system timer.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    #[cfg(not(target_os = "espidf"))]
    fn now_micros(&mut self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    fn sleep_micros(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

/// `thread::sleep`-backed delay for host builds.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(not(target_os = "espidf"))]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
