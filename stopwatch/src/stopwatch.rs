use core::marker::PhantomData;

use crate::clock::{Clock, Monotonic};
use crate::duration::UnitDuration;
use crate::instant::Instant;

/// A single-interval stopwatch over a clock source.
///
/// The beginning and end of the interval are independently settable: the
/// same instance answers elapsed-time queries repeatedly, live while it is
/// still running and frozen once [`stop`](Stopwatch::stop) has been called.
/// There is no accumulation of past intervals and no reset operation;
/// re-calling [`start`](Stopwatch::start) simply moves the beginning
/// forward and does not clear a prior stop.
///
/// All operations are total. Stopping a stopwatch that was never started
/// yields an elapsed time of exactly zero rather than a value derived from
/// the epoch sentinel.
///
/// ```
/// use stopwatch::{DecimalMilliseconds, Stopwatch};
///
/// let mut stopwatch: Stopwatch = Stopwatch::new();
/// stopwatch.start();
/// let live = stopwatch.elapsed::<DecimalMilliseconds>();
/// stopwatch.stop();
/// let frozen = stopwatch.elapsed::<DecimalMilliseconds>();
/// assert!(frozen >= live);
/// ```
pub struct Stopwatch<C: Clock = Monotonic> {
    started: Option<Instant>,
    stopped: Option<Instant>,
    clock: PhantomData<C>,
}

impl<C: Clock> Stopwatch<C> {
    /// Create a stopwatch with both interval endpoints unset.
    pub fn new() -> Self {
        Self {
            started: None,
            stopped: None,
            clock: PhantomData,
        }
    }

    /// Record the current clock reading as the beginning of the interval.
    ///
    /// Calling again moves the beginning forward. A prior stop is not
    /// cleared: [`is_stopped`](Stopwatch::is_stopped) stays true and the
    /// stored end keeps bounding elapsed queries.
    pub fn start(&mut self) {
        self.started = Some(C::now());
    }

    /// Record the current clock reading as the end of the interval.
    ///
    /// If [`start`](Stopwatch::start) was never called, the same reading
    /// becomes the beginning too, so the elapsed time collapses to zero.
    pub fn stop(&mut self) {
        let now = C::now();

        if self.started.is_none() {
            self.started = Some(now);
        }

        self.stopped = Some(now);
    }

    /// True if [`stop`](Stopwatch::stop) has been called since this
    /// instance was constructed.
    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    /// The elapsed count in the requested unit and representation.
    ///
    /// Shorthand for `elapsed_as_duration::<D>().count()`. Prefer the
    /// `Decimal*` and `Integer*` aliases as the type parameter:
    /// `stopwatch.elapsed::<DecimalMilliseconds>()`.
    pub fn elapsed<D: UnitDuration>(&self) -> D::Rep {
        self.elapsed_as_duration::<D>().count()
    }

    /// The elapsed interval as a duration value in the requested unit and
    /// representation.
    ///
    /// The end of the interval is the stored stop reading if one exists,
    /// otherwise the clock's current reading, so an un-stopped stopwatch
    /// reports a live, increasing value on every call. The query is pure
    /// and can be made any number of times, before or after `stop`.
    pub fn elapsed_as_duration<D: UnitDuration>(&self) -> D {
        D::from_elapsed_nanos(self.elapsed_nanos())
    }

    fn elapsed_nanos(&self) -> u64 {
        let end = self.stopped.unwrap_or_else(C::now);
        let begin = self.started.unwrap_or(Instant::EPOCH);

        // saturates when start lands after stop, e.g. start-stop-start
        end.saturating_nanos_since(begin)
    }
}

impl<C: Clock> Default for Stopwatch<C> {
    fn default() -> Self {
        Self::new()
    }
}
