//! This crate provides a single-interval stopwatch over pluggable clock
//! sources, together with a fixed catalogue of duration units in either
//! integer or decimal representation.
//!
//! A [`Stopwatch`] samples a clock at [`start`](Stopwatch::start) and,
//! optionally, at [`stop`](Stopwatch::stop). Elapsed-time queries are pure:
//! an un-stopped stopwatch reports a live, increasing value; a stopped one
//! reports a frozen value. Conversion to a caller-chosen unit and numeric
//! representation happens at query time through one of the duration type
//! aliases:
//!
//! ```
//! use stopwatch::{DecimalMilliseconds, IntegerNanoseconds, Stopwatch};
//!
//! let mut stopwatch: Stopwatch = Stopwatch::new();
//! stopwatch.start();
//! // ... timed work ...
//! stopwatch.stop();
//!
//! let millis = stopwatch.elapsed::<DecimalMilliseconds>();
//! let nanos = stopwatch.elapsed::<IntegerNanoseconds>();
//! assert!(nanos as f64 >= millis);
//! ```
//!
//! The clock is a type parameter. [`Monotonic`] (the default) and
//! [`Realtime`] read the system clocks; a custom source, such as a test
//! double, implements [`Clock`] and produces readings with
//! [`Instant::from_nanos`].

mod clock;
mod duration;
mod instant;
mod stopwatch;
mod units;

mod sys;

pub use clock::{Clock, Monotonic, Realtime};
pub use duration::{Duration, UnitDuration};
pub use instant::Instant;
pub use units::{Representation, Unit};
pub use units::{
    Centiseconds, Days, Deciseconds, Hours, Microseconds, Milliseconds, Minutes, Months,
    Nanoseconds, Seconds, Weeks, Years,
};
pub use units::{
    DAYS_RATIO, HOURS_RATIO, MINUTES_RATIO, MONTHS_RATIO, SECONDS_RATIO, WEEKS_RATIO, YEARS_RATIO,
};

pub use self::stopwatch::Stopwatch;

pub use duration::{
    DecimalCentiseconds, DecimalDays, DecimalDeciseconds, DecimalHours, DecimalMicroseconds,
    DecimalMilliseconds, DecimalMinutes, DecimalMonths, DecimalNanoseconds, DecimalSeconds,
    DecimalWeeks, DecimalYears,
};
pub use duration::{
    IntegerCentiseconds, IntegerDays, IntegerDeciseconds, IntegerHours, IntegerMicroseconds,
    IntegerMilliseconds, IntegerMinutes, IntegerMonths, IntegerNanoseconds, IntegerSeconds,
    IntegerWeeks, IntegerYears,
};
