//! Exact points on a timeline.

use std::fmt;

use crate::duration::{Duration, NANOS_IN_SECOND};
use crate::error::Result;
use crate::system::sys_time;
use crate::util::split_cycles;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since
/// the Unix epoch, and a 32-bit integer of nanoseconds into that second,
/// which is always kept between 0 and 999,999,999.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanos: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, adjusted by any number of nanoseconds, which get
    /// carried into the seconds.
    pub fn at_nanos(seconds: i64, nanos: i64) -> Result<Self> {
        let (seconds, nanos) = Duration::of_nanos(seconds, nanos)?.lengths();
        Ok(Self { seconds, nanos })
    }

    /// Creates a new Instant set to the computer’s current time.
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    pub fn now() -> Self {
        let (seconds, nanos) = unsafe { sys_time() };
        let (carry, nanos) = split_cycles(i64::from(nanos), NANOS_IN_SECOND);
        Self { seconds: seconds + carry, nanos: nanos as i32 }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Moves this instant along the timeline by the given duration.
    pub fn checked_add(self, duration: Duration) -> Result<Self> {
        let (seconds, nanos) = Duration::of_nanos(self.seconds, i64::from(self.nanos))?
            .checked_add(duration)?
            .lengths();
        Ok(Self { seconds, nanos })
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanos)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn addition() {
        assert_eq!(Ok(Instant::at(10)), Instant::at(3).checked_add(Duration::of(7)))
    }

    #[test]
    fn subtraction() {
        assert_eq!(Ok(Instant::at(20)), Instant::at(50).checked_add(Duration::of(-30)))
    }

    #[test]
    fn carries_nanos() {
        assert_eq!(Instant::at_nanos(0, -1).unwrap(), Instant::at_nanos(-1, 999_999_999).unwrap())
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Instant::at_nanos(5, 7).unwrap()), "Instant(5s/7ns)")
    }
}
