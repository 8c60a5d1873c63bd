use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::units::{Representation, Unit};
use crate::units::{
    Centiseconds, Days, Deciseconds, Hours, Microseconds, Milliseconds, Minutes, Months,
    Nanoseconds, Seconds, Weeks, Years,
};

/// A span of time expressed as a scalar count of one unit from the fixed
/// catalogue.
///
/// The unit is a zero-sized type parameter, so a `Duration` is exactly the
/// size of its numeric representation. Prefer the `Decimal*` and `Integer*`
/// type aliases over spelling out the parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Duration<R: Representation, U: Unit> {
    count: R,
    unit: PhantomData<U>,
}

impl<R: Representation, U: Unit> Duration<R, U> {
    /// Construct directly from a count of units.
    pub fn from_count(count: R) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    /// Convert a raw span of whole nanoseconds into this unit, truncating
    /// or keeping the fraction per the representation's semantics.
    pub fn from_nanos(ns: u64) -> Self {
        Self::from_count(R::convert(ns, U::NANOS_PER_UNIT))
    }

    /// The scalar count of units.
    pub fn count(&self) -> R {
        self.count
    }
}

impl<R, U> Add for Duration<R, U>
where
    R: Representation + Add<Output = R>,
    U: Unit,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_count(self.count + rhs.count)
    }
}

impl<R, U> Sub for Duration<R, U>
where
    R: Representation + Sub<Output = R>,
    U: Unit,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_count(self.count - rhs.count)
    }
}

/// The conversion seam used by [`Stopwatch`](crate::Stopwatch) elapsed
/// queries, letting a single type parameter select both the unit and the
/// numeric representation.
pub trait UnitDuration {
    /// The numeric representation of the count.
    type Rep: Representation;

    /// Convert a raw elapsed span of whole nanoseconds.
    fn from_elapsed_nanos(ns: u64) -> Self;

    /// The scalar count of units.
    fn count(&self) -> Self::Rep;
}

impl<R: Representation, U: Unit> UnitDuration for Duration<R, U> {
    type Rep = R;

    fn from_elapsed_nanos(ns: u64) -> Self {
        Self::from_nanos(ns)
    }

    fn count(&self) -> R {
        self.count
    }
}

// Floating point counts, preserving fractional precision.
pub type DecimalNanoseconds = Duration<f64, Nanoseconds>;
pub type DecimalMicroseconds = Duration<f64, Microseconds>;
pub type DecimalMilliseconds = Duration<f64, Milliseconds>;
pub type DecimalCentiseconds = Duration<f64, Centiseconds>;
pub type DecimalDeciseconds = Duration<f64, Deciseconds>;
pub type DecimalSeconds = Duration<f64, Seconds>;
pub type DecimalMinutes = Duration<f64, Minutes>;
pub type DecimalHours = Duration<f64, Hours>;
pub type DecimalDays = Duration<f64, Days>;
pub type DecimalWeeks = Duration<f64, Weeks>;
pub type DecimalMonths = Duration<f64, Months>;
pub type DecimalYears = Duration<f64, Years>;

// Integer counts, truncating toward zero.
pub type IntegerNanoseconds = Duration<u64, Nanoseconds>;
pub type IntegerMicroseconds = Duration<u64, Microseconds>;
pub type IntegerMilliseconds = Duration<u64, Milliseconds>;
pub type IntegerCentiseconds = Duration<u64, Centiseconds>;
pub type IntegerDeciseconds = Duration<u64, Deciseconds>;
pub type IntegerSeconds = Duration<u64, Seconds>;
pub type IntegerMinutes = Duration<u64, Minutes>;
pub type IntegerHours = Duration<u64, Hours>;
pub type IntegerDays = Duration<u64, Days>;
pub type IntegerWeeks = Duration<u64, Weeks>;
pub type IntegerMonths = Duration<u64, Months>;
pub type IntegerYears = Duration<u64, Years>;

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK_NS: u64 = 604_800_000_000_000;

    #[test]
    fn conversion_per_representation() {
        assert_eq!(IntegerSeconds::from_nanos(1_999_999_999).count(), 1);
        assert_eq!(IntegerDeciseconds::from_nanos(100_000_000).count(), 1);
        assert_eq!(IntegerMilliseconds::from_nanos(100_000_000).count(), 100);

        let secs = DecimalSeconds::from_nanos(1_999_999_999).count();
        assert!(secs > 1.99 && secs < 2.0);
    }

    #[test]
    fn large_units() {
        assert_eq!(IntegerWeeks::from_nanos(WEEK_NS).count(), 1);
        assert_eq!(IntegerDays::from_nanos(WEEK_NS).count(), 7);
        assert_eq!(IntegerMonths::from_nanos(WEEK_NS).count(), 0);

        let months = DecimalMonths::from_nanos(WEEK_NS).count();
        assert!(months > 0.22 && months < 0.24);

        let years = DecimalYears::from_nanos(WEEK_NS).count();
        assert!(years > 0.019 && years < 0.020);
    }

    #[test]
    fn arithmetic() {
        let a = IntegerMilliseconds::from_count(70);
        let b = IntegerMilliseconds::from_count(30);

        assert_eq!((a + b).count(), 100);
        assert_eq!((a - b).count(), 40);
        assert!(a > b);
    }
}
