//! Lengths of time on the timeline.

use std::fmt;

use pad::{PadStr, Alignment};

use crate::error::Result;
use crate::util::{checked_add, checked_mul, checked_sub, split_cycles, to_i64};


pub(crate) const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The nanosecond part is always kept between 0 and 999,999,999, so a
/// duration of minus half a second is stored as -1 seconds plus
/// 500,000,000 nanoseconds.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanos: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// nanoseconds long. The nanoseconds can be any value, including
    /// negative ones, and get carried into the seconds.
    pub fn of_nanos(seconds: i64, nanos: i64) -> Result<Self> {
        let (carry, nanos) = split_cycles(nanos, NANOS_IN_SECOND);
        let seconds = checked_add(seconds, carry)?;
        Ok(Self { seconds, nanos: nanos as i32 })
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanos)
    }

    // As with the millisecond version of this type, there are no separate
    // seconds() and nanos() functions, because it’s easy to assume that
    // nanos() would return the *total* length in nanoseconds.

    /// Whether this duration is zero-length.
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Whether this duration is shorter than zero.
    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let seconds = checked_add(self.seconds, rhs.seconds)?;
        Self::of_nanos(seconds, i64::from(self.nanos) + i64::from(rhs.nanos))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let seconds = checked_sub(self.seconds, rhs.seconds)?;
        Self::of_nanos(seconds, i64::from(self.nanos) - i64::from(rhs.nanos))
    }

    /// Multiplies this duration by a whole number, failing rather than
    /// wrapping if the result can’t be represented.
    pub fn checked_mul(self, amount: i64) -> Result<Self> {
        let total = checked_mul(self.total_nanos(), i128::from(amount))?;
        let seconds = to_i64(total.div_euclid(i128::from(NANOS_IN_SECOND)))?;
        let nanos = total.rem_euclid(i128::from(NANOS_IN_SECOND)) as i32;
        Ok(Self { seconds, nanos })
    }

    fn total_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_IN_SECOND) + i128::from(self.nanos)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Duration({})", self)
    }
}

/// Durations are written in the ISO-8601 `PT…S` style, with the fraction
/// only present when there is one.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (seconds, nanos) = if self.seconds < 0 && self.nanos > 0 {
            (self.seconds + 1, NANOS_IN_SECOND - i64::from(self.nanos))
        }
        else {
            (self.seconds, i64::from(self.nanos))
        };

        let sign = if self.seconds < 0 && seconds == 0 { "-" } else { "" };
        write!(f, "PT{}{}", sign, seconds)?;

        if nanos > 0 {
            let fraction = nanos.to_string().pad(9, '0', Alignment::Right, false);
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }

        write!(f, "S")
    }
}


#[cfg(test)]
mod test {
    pub use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Ok(Duration::of(10)), Duration::of(2).checked_add(Duration::of(8)))
        }

        #[test]
        fn wrapping() {
            let half = Duration::of_nanos(0, 750_000_000).unwrap();
            assert_eq!(Duration::of_nanos(1, 500_000_000), half.checked_add(half))
        }

        #[test]
        fn overflow() {
            assert!(Duration::of(i64::MAX).checked_add(Duration::of(1)).is_err())
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Ok(Duration::of(13)), Duration::of(28).checked_sub(Duration::of(15)))
        }

        #[test]
        fn below_zero() {
            let half = Duration::of_nanos(0, 500_000_000).unwrap();
            assert_eq!(Duration::of_nanos(0, -500_000_000), Duration::zero().checked_sub(half))
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Ok(Duration::of(16)), Duration::of(8).checked_mul(2))
        }

        #[test]
        fn nanoseconds() {
            let nano = Duration::of_nanos(0, 1).unwrap();
            assert_eq!(Ok(Duration::of(1)), nano.checked_mul(1_000_000_000))
        }

        #[test]
        fn negative() {
            assert_eq!(Duration::of_nanos(-2, 500_000_000), Duration::of_nanos(0, 500_000_000).unwrap().checked_mul(-3))
        }

        #[test]
        fn overflow() {
            assert!(Duration::of(i64::MAX / 2 + 1).checked_mul(2).is_err())
        }
    }

    mod display {
        use super::*;

        #[test]
        fn whole() {
            assert_eq!(Duration::of(90).to_string(), "PT90S")
        }

        #[test]
        fn fraction() {
            assert_eq!(Duration::of_nanos(1, 5_000_000).unwrap().to_string(), "PT1.005S")
        }

        #[test]
        fn negative_fraction() {
            assert_eq!(Duration::of_nanos(0, -500_000_000).unwrap().to_string(), "PT-0.5S")
        }
    }
}
