//! Host-loop demo for `cadence-clock`.
//!
//! Runs a 5 Hz perfect-delta "simulation" clock and a 1 Hz measured-delta
//! "status" clock from one polling loop for a few seconds, the way a game or
//! control loop would drive them.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use cadence_clock::{DeltaMode, TickClock, logging};

fn main() -> Result<()> {
    logging::init_logging(logging::LoggingConfig {
        filter: Some("info".into()),
        ..Default::default()
    });

    let mut sim = TickClock::with_mode(5.0, DeltaMode::Perfect)?;
    let mut status = TickClock::new(1.0)?;

    let deadline = Instant::now() + Duration::from_secs(4);
    let mut sim_steps: u64 = 0;

    while Instant::now() < deadline {
        if sim.poll() {
            // Perfect deltas: every step integrates exactly 1/5 s, no matter
            // how late this loop iteration ran.
            sim_steps += 1;
            log::info!(
                "sim step {sim_steps}: dt={:.3}s progress={:.2}",
                sim.last_delta(),
                sim.cycle_progress_clamped(),
            );
        }

        if status.poll() {
            log::info!(
                "status: {} sim steps consumed, measured dt={:.3}s",
                sim.ticks_consumed(),
                status.last_delta(),
            );
        }

        thread::sleep(Duration::from_millis(2));
    }

    log::info!("done: {sim_steps} sim steps in 4s at 5 Hz");
    Ok(())
}
