//! LilyBlink Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  HardwareAdapter (OutputPort)   SystemClock (Clock)  │
//! │  ──────────── Port Trait Boundary ────────────────   │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │ TickScheduler ─▶ BindingTable ─▶ Behavior × N  │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::Ets;
use log::{error, info};

use lilyblink::adapters::hardware::HardwareAdapter;
use lilyblink::adapters::time::SystemClock;
use lilyblink::app::bindings::BindingTable;
use lilyblink::config::SystemConfig;
use lilyblink::error::Error;
use lilyblink::scheduler::TickScheduler;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  LilyBlink v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Board wiring ───────────────────────────────────────
    let config = SystemConfig::default();
    let table = match BindingTable::from_config(&config) {
        Ok(t) => t,
        Err(e) => {
            // Bad wiring is a build defect; never start the loop with it.
            error!("Board config invalid: {} — halting", e);
            return Err(Error::from(e).into());
        }
    };

    // ── 3. Adapters + scheduler ───────────────────────────────
    let hw = HardwareAdapter::new();
    let clock = SystemClock::new(Ets);
    let mut scheduler = TickScheduler::new(table, hw, clock, &config);
    scheduler.setup();

    info!("System ready. Entering tick loop.");

    // ── 4. Tick loop (never returns) ──────────────────────────
    scheduler.run()
}
