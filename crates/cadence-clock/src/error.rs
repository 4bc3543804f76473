use std::fmt;

/// A rejected tick-rate at clock construction.
///
/// The period is derived as `1 / rate_hz`, so the rate must be a positive,
/// finite number. Anything else (zero, negative, NaN, infinite) would produce
/// a clock that never fires or divides by zero, and is refused up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateError {
    /// The rate that was passed in, in Hz.
    pub rate_hz: f64,
}

impl RateError {
    pub(crate) fn new(rate_hz: f64) -> Self {
        Self { rate_hz }
    }
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick rate must be a positive finite frequency in Hz, got {}",
            self.rate_hz
        )
    }
}

impl std::error::Error for RateError {}
