//! Misc stuff.

use std::fmt::Display;
use std::ops::Range;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, ToPrimitive};

use crate::error::{Error, Result};


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }
}


/// Split a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


// The checked helpers below turn num-traits’ `None` into an error that
// says which operation failed and on what.

pub(crate) fn checked_add<T: CheckedAdd + Display>(a: T, b: T) -> Result<T> {
    match a.checked_add(&b) {
        Some(sum) => Ok(sum),
        None      => Err(Error::Arithmetic(format!("overflow adding {} to {}", b, a))),
    }
}

pub(crate) fn checked_sub<T: CheckedSub + Display>(a: T, b: T) -> Result<T> {
    match a.checked_sub(&b) {
        Some(difference) => Ok(difference),
        None             => Err(Error::Arithmetic(format!("overflow subtracting {} from {}", b, a))),
    }
}

pub(crate) fn checked_mul<T: CheckedMul + Display>(a: T, b: T) -> Result<T> {
    match a.checked_mul(&b) {
        Some(product) => Ok(product),
        None          => Err(Error::Arithmetic(format!("overflow multiplying {} by {}", a, b))),
    }
}

pub(crate) fn checked_div<T: CheckedDiv + Display + Default + PartialEq>(a: T, b: T) -> Result<T> {
    if b == T::default() {
        return Err(Error::Arithmetic(format!("division of {} by zero", a)));
    }

    match a.checked_div(&b) {
        Some(quotient) => Ok(quotient),
        None           => Err(Error::Arithmetic(format!("overflow dividing {} by {}", a, b))),
    }
}

pub(crate) fn checked_rem<T: CheckedRem + Display + Default + PartialEq>(a: T, b: T) -> Result<T> {
    if b == T::default() {
        return Err(Error::Arithmetic(format!("remainder of {} by zero", a)));
    }

    match a.checked_rem(&b) {
        Some(remainder) => Ok(remainder),
        None            => Err(Error::Arithmetic(format!("overflow taking remainder of {} by {}", a, b))),
    }
}

pub(crate) fn checked_neg<T: CheckedNeg + Display>(a: T) -> Result<T> {
    match a.checked_neg() {
        Some(negated) => Ok(negated),
        None          => Err(Error::Arithmetic(format!("overflow negating {}", a))),
    }
}

/// Narrows a wide intermediate back down to 64 bits.
pub(crate) fn to_i64<T: ToPrimitive + Display>(value: T) -> Result<i64> {
    match value.to_i64() {
        Some(narrow) => Ok(narrow),
        None         => Err(Error::Arithmetic(format!("{} does not fit in 64 bits", value))),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycles_positive() {
        assert_eq!(split_cycles(10, 7), (1, 3));
    }

    #[test]
    fn cycles_negative() {
        assert_eq!(split_cycles(-1, 7), (-1, 6));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(checked_add(i64::MAX, 1).is_err());
        assert!(checked_mul(i64::MIN, -1).is_err());
        assert!(checked_neg(i64::MIN).is_err());
    }

    #[test]
    fn division_by_zero() {
        assert!(checked_div(5_i64, 0).is_err());
        assert!(checked_rem(5_i64, 0).is_err());
        assert_eq!(checked_rem(-7_i64, 2), Ok(-1));
    }

    #[test]
    fn narrowing() {
        assert_eq!(to_i64(12_i128), Ok(12));
        assert!(to_i64(i128::MAX).is_err());
    }
}
