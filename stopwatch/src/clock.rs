use crate::Instant;

/// A source of monotonically comparable time points.
///
/// A clock is stateless: `now` samples the source and returns an opaque
/// [`Instant`]. The stopwatch is generic over this trait, so the same code
/// runs against the system clocks or a test double built with
/// [`Instant::from_nanos`].
pub trait Clock {
    /// Return the clock's current reading.
    fn now() -> Instant;
}

/// The system monotonic clock.
///
/// Readings are monotonically nondecreasing and unaffected by wall-clock
/// adjustments. This is the default clock for a [`Stopwatch`](crate::Stopwatch).
#[derive(Copy, Clone, Debug, Default)]
pub struct Monotonic;

impl Clock for Monotonic {
    fn now() -> Instant {
        crate::sys::monotonic()
    }
}

/// The system realtime (wall) clock.
///
/// Readings track calendar time and may jump forward or backward when the
/// clock is adjusted. Elapsed-time queries saturate to zero rather than
/// underflowing if the clock steps backward mid-interval.
#[derive(Copy, Clone, Debug, Default)]
pub struct Realtime;

impl Clock for Realtime {
    fn now() -> Instant {
        crate::sys::realtime()
    }
}
