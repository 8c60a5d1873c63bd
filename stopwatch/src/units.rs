//! The fixed unit catalogue and the numeric representations a converted
//! count can take.
//!
//! Units at or above one second are derived from the seconds-per-unit ratio
//! constants; relationships hold by construction (one minute is sixty
//! seconds, one hour is sixty minutes, and so on). Months and years are the
//! Gregorian mean values and are not exact multiples of a day.

/// Seconds per second.
pub const SECONDS_RATIO: u64 = 1;

/// Seconds per minute.
pub const MINUTES_RATIO: u64 = SECONDS_RATIO * 60;

/// Seconds per hour.
pub const HOURS_RATIO: u64 = MINUTES_RATIO * 60;

/// Seconds per day.
pub const DAYS_RATIO: u64 = HOURS_RATIO * 24;

/// Seconds per week.
pub const WEEKS_RATIO: u64 = DAYS_RATIO * 7;

/// Seconds per Gregorian mean month.
pub const MONTHS_RATIO: u64 = 2_629_746;

/// Seconds per Gregorian mean year.
pub const YEARS_RATIO: u64 = 31_556_952;

const NANOS_PER_SEC: u64 = 1_000_000_000;

const MICROS_PER_SEC: u64 = 1_000_000;
const MILLIS_PER_SEC: u64 = 1_000;
const CENTIS_PER_SEC: u64 = 100;
const DECIS_PER_SEC: u64 = 10;

/// A unit from the fixed catalogue, identified by the length of one unit in
/// whole nanoseconds.
pub trait Unit {
    /// The length of one unit in nanoseconds.
    const NANOS_PER_UNIT: u64;
}

/// The numeric representation of a converted count.
///
/// Integer representations truncate toward zero; decimal representations
/// preserve fractional precision.
pub trait Representation: Copy {
    /// Convert a raw count of whole nanoseconds into a count of units of
    /// the given length.
    fn convert(ns: u64, nanos_per_unit: u64) -> Self;
}

impl Representation for u64 {
    fn convert(ns: u64, nanos_per_unit: u64) -> Self {
        ns / nanos_per_unit
    }
}

impl Representation for f64 {
    fn convert(ns: u64, nanos_per_unit: u64) -> Self {
        ns as f64 / nanos_per_unit as f64
    }
}

macro_rules! unit {
    ($(#[$attr:meta])* $name:ident = $nanos:expr) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name;

        impl Unit for $name {
            const NANOS_PER_UNIT: u64 = $nanos;
        }
    };
}

unit!(
    /// One billionth of a second, the native resolution of the clocks.
    Nanoseconds = 1
);
unit!(Microseconds = NANOS_PER_SEC / MICROS_PER_SEC);
unit!(Milliseconds = NANOS_PER_SEC / MILLIS_PER_SEC);
unit!(Centiseconds = NANOS_PER_SEC / CENTIS_PER_SEC);
unit!(Deciseconds = NANOS_PER_SEC / DECIS_PER_SEC);
unit!(Seconds = SECONDS_RATIO * NANOS_PER_SEC);
unit!(Minutes = MINUTES_RATIO * NANOS_PER_SEC);
unit!(Hours = HOURS_RATIO * NANOS_PER_SEC);
unit!(Days = DAYS_RATIO * NANOS_PER_SEC);
unit!(Weeks = WEEKS_RATIO * NANOS_PER_SEC);
unit!(
    /// Gregorian mean month, 2629746 seconds. Not an exact multiple of a day.
    Months = MONTHS_RATIO * NANOS_PER_SEC
);
unit!(
    /// Gregorian mean year, 31556952 seconds. Not an exact multiple of a day.
    Years = YEARS_RATIO * NANOS_PER_SEC
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios() {
        assert_eq!(SECONDS_RATIO, 1);
        assert_eq!(MINUTES_RATIO, 60);
        assert_eq!(HOURS_RATIO, 3_600);
        assert_eq!(DAYS_RATIO, 86_400);
        assert_eq!(WEEKS_RATIO, 604_800);
        assert_eq!(MONTHS_RATIO, 2_629_746);
        assert_eq!(YEARS_RATIO, 31_556_952);
    }

    #[test]
    fn ratios_hold_by_construction() {
        assert_eq!(MINUTES_RATIO, 60 * SECONDS_RATIO);
        assert_eq!(HOURS_RATIO, 60 * MINUTES_RATIO);
        assert_eq!(DAYS_RATIO, 24 * HOURS_RATIO);
        assert_eq!(WEEKS_RATIO, 7 * DAYS_RATIO);
    }

    #[test]
    fn unit_lengths() {
        assert_eq!(Nanoseconds::NANOS_PER_UNIT, 1);
        assert_eq!(Microseconds::NANOS_PER_UNIT, 1_000);
        assert_eq!(Milliseconds::NANOS_PER_UNIT, 1_000_000);
        assert_eq!(Centiseconds::NANOS_PER_UNIT, 10_000_000);
        assert_eq!(Deciseconds::NANOS_PER_UNIT, 100_000_000);
        assert_eq!(Seconds::NANOS_PER_UNIT, 1_000_000_000);
        assert_eq!(Minutes::NANOS_PER_UNIT, 60_000_000_000);
        assert_eq!(Hours::NANOS_PER_UNIT, 3_600_000_000_000);
        assert_eq!(Days::NANOS_PER_UNIT, 86_400_000_000_000);
        assert_eq!(Weeks::NANOS_PER_UNIT, 604_800_000_000_000);
        assert_eq!(Months::NANOS_PER_UNIT, 2_629_746_000_000_000);
        assert_eq!(Years::NANOS_PER_UNIT, 31_556_952_000_000_000);
    }

    #[test]
    fn integer_truncates_toward_zero() {
        assert_eq!(u64::convert(1_999_999_999, Seconds::NANOS_PER_UNIT), 1);
        assert_eq!(u64::convert(999_999_999, Seconds::NANOS_PER_UNIT), 0);
    }

    #[test]
    fn decimal_preserves_fraction() {
        let secs = f64::convert(1_500_000_000, Seconds::NANOS_PER_UNIT);
        assert!((secs - 1.5).abs() < f64::EPSILON);
    }
}
