//! Raw ESP-IDF GPIO and LEDC helpers.
//!
//! Thin wrappers over the sys calls used by
//! [`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter).  Only
//! the main task calls these, so none of the register accesses race.
//! On host targets every function is a no-op that reports success.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::HwInitError;
use crate::pins::Pin;
#[cfg(target_os = "espidf")]
use crate::pins;

// ── GPIO Outputs ──────────────────────────────────────────────

/// Configure `pin` as a push-pull output and drive it LOW.
#[cfg(target_os = "espidf")]
pub fn configure_output(pin: Pin) -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        ..Default::default()
    };
    // SAFETY: gpio_config only touches the IO-MUX/GPIO registers of `pin`;
    // called from the main task during setup.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    // SAFETY: pin was configured as an output just above.
    unsafe { gpio_set_level(pin, 0) };
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(_pin: Pin) -> Result<(), HwInitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: Pin, high: bool) {
    // SAFETY: gpio_set_level writes the output register of an
    // already-configured pin. Main-loop only.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: Pin, _high: bool) {}

// ── LEDC PWM ─────────────────────────────────────────────────

/// Configure LEDC timer 0 (1 kHz, 8-bit) shared by every dimmed LED.
#[cfg(target_os = "espidf")]
pub fn init_ledc_timer() -> Result<(), HwInitError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_8_BIT,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: single main-task context; timer 0 is owned by this module.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcTimerFailed(ret));
    }
    info!(
        "hw_init: LEDC timer0 {}Hz/{}-bit",
        pins::LED_PWM_FREQ_HZ,
        pins::PWM_RESOLUTION_BITS
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_ledc_timer() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): LEDC timer skipped");
    Ok(())
}

/// Route `pin` to LEDC `channel` on timer 0, starting at duty 0.
#[cfg(target_os = "espidf")]
pub fn attach_ledc(channel: u32, pin: Pin) -> Result<(), HwInitError> {
    // SAFETY: channel index is bounded by LEDC_CHANNEL_COUNT in the caller;
    // timer 0 was configured by init_ledc_timer().
    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: ledc_channel_t_LEDC_CHANNEL_0 + channel,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pin,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcChannelFailed(ret));
    }
    info!("hw_init: GPIO{} -> LEDC CH{}", pin, channel);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn attach_ledc(_channel: u32, _pin: Pin) -> Result<(), HwInitError> {
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) {
    // SAFETY: channel was configured by attach_ledc(); duty register
    // writes are race-free since only the main loop calls this.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty));
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) {}
