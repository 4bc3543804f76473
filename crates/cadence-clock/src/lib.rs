//! Cadence clock crate.
//!
//! A polled fixed-frequency tick primitive. One `TickClock` per host loop
//! (render loop, network tick, control loop); the loop calls `poll()` whenever
//! convenient and acts when it returns true. No scheduler thread, no
//! callbacks, no wall-clock time.

mod clock;
mod error;
mod source;

pub mod logging;

pub use clock::{DeltaMode, TickClock};
pub use error::RateError;
pub use source::{ClockSource, ManualClock, MonotonicClock};
