use std::time::{Duration, Instant};

use crate::error::RateError;
use crate::source::{ClockSource, MonotonicClock};

/// How a clock reports the time delta attributed to a fired tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Report the wall-clock time actually elapsed since the previous
    /// consumed tick. Honest, but jittery under scheduling noise.
    #[default]
    Measured,

    /// Report the nominal period (`1 / rate_hz`) for every tick, regardless
    /// of when the caller actually polled.
    ///
    /// Two independent consumers stepping a simulation with this mode (say, a
    /// predictive client and an authoritative server) integrate identical
    /// deltas and stay in agreement; measured deltas would diverge under any
    /// jitter.
    Perfect,
}

/// A polled fixed-frequency tick clock.
///
/// Ticks are laid out on an immutable timeline: tick `n` occurs at
/// `start_reference + n * period`. Every query samples the clock source and
/// asks which tick index that instant falls in; nothing is ever re-anchored,
/// so rounding error cannot accumulate across long runs.
///
/// The host loop calls [`poll`](Self::poll) wherever convenient. A `true`
/// return means at least one tick became due since the previous `true`; the
/// host then reads [`last_delta`](Self::last_delta) and/or the cycle-progress
/// queries as needed.
///
/// `TickClock` is a plain value owned by one loop. Mutation (`poll`, `drain`,
/// `restart`) requires `&mut self`; the progress and peek queries are `&self`
/// reads.
#[derive(Debug, Clone)]
pub struct TickClock<S: ClockSource = MonotonicClock> {
    source: S,
    rate_hz: f64,
    period: Duration,
    delta_mode: DeltaMode,

    // Origin of the tick timeline. Only `restart` may move it.
    start_reference: Instant,
    // Index of the last tick the caller has been told about.
    ticks_consumed: u64,
    last_consumed_at: Instant,
    last_delta: Duration,
}

impl TickClock<MonotonicClock> {
    /// Creates a clock on the host's monotonic clock, in measured mode.
    ///
    /// Fails if `rate_hz` is not a positive finite number, or is too high to
    /// express as a nanosecond-resolution period.
    pub fn new(rate_hz: f64) -> Result<Self, RateError> {
        Self::with_mode(rate_hz, DeltaMode::default())
    }

    /// Creates a clock on the host's monotonic clock with an explicit mode.
    pub fn with_mode(rate_hz: f64, delta_mode: DeltaMode) -> Result<Self, RateError> {
        Self::with_source(rate_hz, delta_mode, MonotonicClock)
    }
}

impl<S: ClockSource> TickClock<S> {
    /// Creates a clock on an injected [`ClockSource`].
    ///
    /// The timeline starts at `source.now()` at the moment of the call.
    pub fn with_source(rate_hz: f64, delta_mode: DeltaMode, source: S) -> Result<Self, RateError> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(RateError::new(rate_hz));
        }

        let period = Duration::from_secs_f64(1.0 / rate_hz);
        if period.is_zero() {
            // Rate so high the period rounds below 1ns.
            return Err(RateError::new(rate_hz));
        }

        let start = source.now();
        Ok(Self {
            source,
            rate_hz,
            period,
            delta_mode,
            start_reference: start,
            ticks_consumed: 0,
            last_consumed_at: start,
            last_delta: Duration::ZERO,
        })
    }

    /// The configured rate, in Hz.
    #[inline]
    pub fn rate_hz(&self) -> f64 {
        self.rate_hz
    }

    /// The nominal period between ticks, in seconds.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period.as_secs_f64()
    }

    /// The configured delta mode.
    #[inline]
    pub fn delta_mode(&self) -> DeltaMode {
        self.delta_mode
    }

    /// How many ticks have been consumed since construction or the last
    /// [`restart`](Self::restart).
    #[inline]
    pub fn ticks_consumed(&self) -> u64 {
        self.ticks_consumed
    }

    /// Consumes a due tick, if any.
    ///
    /// Returns true when at least one whole period has elapsed beyond the
    /// last consumed tick. If the caller polled late and several periods went
    /// by, the consumed index jumps straight to the latest due tick and the
    /// clock fires once; callers that want one event per missed period use
    /// [`drain`](Self::drain) and act on the returned count.
    pub fn poll(&mut self) -> bool {
        let now = self.source.now();
        let expected = self.expected_ticks_at(now);
        if expected <= self.ticks_consumed {
            return false;
        }

        let skipped = expected - self.ticks_consumed - 1;
        if skipped > 0 {
            log::trace!("tick clock behind by {skipped} whole periods, jumping to tick {expected}");
        }

        self.consume_up_to(expected, now);
        true
    }

    /// Consumes every due tick and returns how many there were.
    ///
    /// Returns 0 (and changes nothing) when no tick is due. Delta bookkeeping
    /// is identical to [`poll`](Self::poll): one measured delta spanning the
    /// whole gap, or the nominal period in perfect mode.
    pub fn drain(&mut self) -> u64 {
        let now = self.source.now();
        let expected = self.expected_ticks_at(now);
        if expected <= self.ticks_consumed {
            return 0;
        }

        let due = expected - self.ticks_consumed;
        self.consume_up_to(expected, now);
        due
    }

    /// Side-effect-free peek: would [`poll`](Self::poll) return true right
    /// now?
    pub fn enough_time_has_passed(&self) -> bool {
        let now = self.source.now();
        self.expected_ticks_at(now) > self.ticks_consumed
    }

    /// The delta attributed to the most recent consumed tick, in seconds.
    ///
    /// In perfect mode this is the nominal period, always, including before
    /// the first tick. In measured mode it is the wall-clock gap recorded at
    /// the last successful `poll`/`drain`, and 0.0 before the first one.
    pub fn last_delta(&self) -> f64 {
        match self.delta_mode {
            DeltaMode::Perfect => self.period.as_secs_f64(),
            DeltaMode::Measured => self.last_delta.as_secs_f64(),
        }
    }

    /// Normalized position in [0, 1] through the current cycle.
    ///
    /// Pure function of the current time; ignores whether a due tick has been
    /// consumed. If the caller is late, this wraps from ~1 back to ~0 the
    /// moment a new cycle begins. Interpolation code that has not first
    /// called `poll` usually wants
    /// [`cycle_progress_clamped`](Self::cycle_progress_clamped) instead.
    pub fn cycle_progress(&self) -> f64 {
        self.cycle_progress_at(self.source.now())
    }

    /// As [`cycle_progress`](Self::cycle_progress), evaluated at a supplied
    /// instant instead of sampling the source.
    ///
    /// Instants before the timeline origin clamp to 0.
    pub fn cycle_progress_at(&self, at: Instant) -> f64 {
        let elapsed = at
            .saturating_duration_since(self.start_reference)
            .as_secs_f64();
        let period = self.period.as_secs_f64();
        let position = elapsed % period;
        (position / period).clamp(0.0, 1.0)
    }

    /// Cycle progress that pins at 1.0 while a due tick is unconsumed.
    ///
    /// Once a new cycle begins that the caller has not yet acknowledged via
    /// `poll`, this holds at exactly 1.0 instead of wrapping to ~0, so a
    /// caller reading progress independently of polling sees a monotonic ramp
    /// rather than a sawtooth discontinuity.
    pub fn cycle_progress_clamped(&self) -> f64 {
        let now = self.source.now();
        if self.expected_ticks_at(now) > self.ticks_consumed {
            return 1.0;
        }
        self.cycle_progress_at(now)
    }

    /// Restarts the timeline at the current instant.
    ///
    /// Consumed-tick count and last delta reset to zero; rate and delta mode
    /// are unchanged. The clock behaves as if freshly constructed.
    pub fn restart(&mut self) {
        let now = self.source.now();
        self.start_reference = now;
        self.last_consumed_at = now;
        self.ticks_consumed = 0;
        self.last_delta = Duration::ZERO;
        log::debug!("tick clock restarted ({} Hz)", self.rate_hz);
    }

    /// Tick index the timeline has reached at `now`.
    ///
    /// Integer arithmetic on nanoseconds, so period boundaries land exactly.
    /// A source that stepped backward past the origin saturates to elapsed
    /// zero, which clamps the index at 0 rather than underflowing.
    fn expected_ticks_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.start_reference);
        (elapsed.as_nanos() / self.period.as_nanos()) as u64
    }

    fn consume_up_to(&mut self, expected: u64, now: Instant) {
        self.last_delta = match self.delta_mode {
            DeltaMode::Measured => now.saturating_duration_since(self.last_consumed_at),
            DeltaMode::Perfect => self.period,
        };
        self.last_consumed_at = now;
        self.ticks_consumed = expected;
    }
}
