use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A reading of a clock source in whole nanoseconds.
///
/// Instants are opaque: only the difference between two readings taken from
/// the same clock is meaningful. The internal representation is a single
/// `u64` nanosecond count, so readings wrap after ~584 years.
///
/// Readings from [`Monotonic`](crate::Monotonic) are monotonically
/// nondecreasing. Readings from [`Realtime`](crate::Realtime) come from a
/// clock that is subject to phase and frequency adjustments and may jump
/// forward or backward.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    pub(crate) ns: u64,
}

impl Instant {
    /// The zero reading. A stopwatch that was never started measures from
    /// this sentinel.
    pub const EPOCH: Self = Self { ns: 0 };

    /// Construct an instant from a raw nanosecond reading.
    ///
    /// This is the constructor used by custom [`Clock`](crate::Clock)
    /// implementations, including test doubles.
    pub const fn from_nanos(ns: u64) -> Self {
        Self { ns }
    }

    /// The raw reading in nanoseconds.
    pub const fn as_nanos(&self) -> u64 {
        self.ns
    }

    /// The whole nanoseconds from some earlier reading until this one, or
    /// `None` if `earlier` is actually later.
    pub fn checked_nanos_since(&self, earlier: Self) -> Option<u64> {
        self.ns.checked_sub(earlier.ns)
    }

    /// The whole nanoseconds from some earlier reading until this one,
    /// saturating to zero if `earlier` is actually later.
    pub fn saturating_nanos_since(&self, earlier: Self) -> u64 {
        self.ns.saturating_sub(earlier.ns)
    }
}

impl Add<core::time::Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: core::time::Duration) -> Self::Output {
        Instant {
            ns: self.ns + rhs.as_nanos() as u64,
        }
    }
}

impl AddAssign<core::time::Duration> for Instant {
    fn add_assign(&mut self, rhs: core::time::Duration) {
        self.ns += rhs.as_nanos() as u64;
    }
}

impl Sub<core::time::Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: core::time::Duration) -> Self::Output {
        Instant {
            ns: self.ns - rhs.as_nanos() as u64,
        }
    }
}

impl SubAssign<core::time::Duration> for Instant {
    fn sub_assign(&mut self, rhs: core::time::Duration) {
        self.ns -= rhs.as_nanos() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nanos_since() {
        let earlier = Instant::from_nanos(100);
        let later = Instant::from_nanos(350);

        assert_eq!(later.checked_nanos_since(earlier), Some(250));
        assert_eq!(earlier.checked_nanos_since(later), None);

        assert_eq!(later.saturating_nanos_since(earlier), 250);
        assert_eq!(earlier.saturating_nanos_since(later), 0);
    }

    #[test]
    fn std_duration_arithmetic() {
        let mut t = Instant::EPOCH + core::time::Duration::from_micros(3);
        assert_eq!(t.as_nanos(), 3_000);

        t += core::time::Duration::from_nanos(7);
        assert_eq!(t.as_nanos(), 3_007);

        t -= core::time::Duration::from_nanos(7);
        assert_eq!(t - core::time::Duration::from_micros(1), Instant::from_nanos(2_000));
    }
}
