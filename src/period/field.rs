//! An amount of a single period unit.

use std::cmp::Ordering;
use std::fmt;

use crate::chronology::ISOChronology;
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::period::PeriodUnit;
use crate::util::{checked_add, checked_div, checked_mul, checked_neg, checked_rem, checked_sub};


/// A **period field** is an amount of a single unit, such as “5 Days”.
///
/// Every operation returns a new value, and none of them wrap: anything
/// that would overflow a 64-bit amount is an error instead.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct PeriodField {
    amount: i64,
    unit: PeriodUnit,
}

impl PeriodField {

    /// Creates a period of the given amount of the given unit.
    pub fn of(amount: i64, unit: &PeriodUnit) -> Self {
        Self { amount, unit: unit.clone() }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn unit(&self) -> &PeriodUnit {
        &self.unit
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns a period of the same unit with a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self { amount, unit: self.unit.clone() }
    }

    pub fn plus(&self, amount: i64) -> Result<Self> {
        checked_add(self.amount, amount).map(|a| self.with_amount(a))
    }

    /// Adds another period, which has to be in the same unit.
    pub fn plus_field(&self, period: &PeriodField) -> Result<Self> {
        self.check_same_unit(period, "add")?;
        self.plus(period.amount)
    }

    pub fn minus(&self, amount: i64) -> Result<Self> {
        checked_sub(self.amount, amount).map(|a| self.with_amount(a))
    }

    /// Subtracts another period, which has to be in the same unit.
    pub fn minus_field(&self, period: &PeriodField) -> Result<Self> {
        self.check_same_unit(period, "subtract")?;
        self.minus(period.amount)
    }

    pub fn multiplied_by(&self, scalar: i64) -> Result<Self> {
        checked_mul(self.amount, scalar).map(|a| self.with_amount(a))
    }

    /// Divides the amount, rounding towards zero.
    pub fn divided_by(&self, divisor: i64) -> Result<Self> {
        checked_div(self.amount, divisor).map(|a| self.with_amount(a))
    }

    /// The remainder of dividing the amount, with the sign of the amount.
    pub fn remainder(&self, divisor: i64) -> Result<Self> {
        checked_rem(self.amount, divisor).map(|a| self.with_amount(a))
    }

    pub fn negated(&self) -> Result<Self> {
        checked_neg(self.amount).map(|a| self.with_amount(a))
    }

    pub fn abs(&self) -> Result<Self> {
        if self.amount < 0 { self.negated() } else { Ok(self.clone()) }
    }

    fn check_same_unit(&self, period: &PeriodField, verb: &str) -> Result<()> {
        if self.unit == period.unit {
            Ok(())
        }
        else {
            Err(Error::InvalidArgument(format!("cannot {} {} and {}: units differ", verb, self, period)))
        }
    }

    /// Converts this period into an equivalent one in the given unit.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::ISOChronology;
    ///
    /// let hours = ISOChronology::hours().field(3);
    /// let minutes = hours.to_equivalent(&ISOChronology::minutes()).unwrap();
    /// assert_eq!(minutes.amount(), 180);
    ///
    /// assert!(minutes.to_equivalent(&ISOChronology::hours()).is_err());
    /// ```
    pub fn to_equivalent(&self, required: &PeriodUnit) -> Result<Self> {
        match self.unit.equivalent_period(required) {
            Some(period) => period.multiplied_by(self.amount),
            None         => Err(self.conversion_error(&[required])),
        }
    }

    /// Converts this period into the first of the given units it has an
    /// equivalent in.
    pub fn to_equivalent_any(&self, units: &[PeriodUnit]) -> Result<Self> {
        for unit in units {
            if let Some(period) = self.unit.equivalent_period(unit) {
                return period.multiplied_by(self.amount);
            }
        }

        let attempted: Vec<&PeriodUnit> = units.iter().collect();
        Err(self.conversion_error(&attempted))
    }

    fn conversion_error(&self, attempted: &[&PeriodUnit]) -> Error {
        Error::Conversion {
            from: self.unit.name().to_owned(),
            to: attempted.iter().map(|u| u.name().to_owned()).collect(),
        }
    }

    /// Multiplies the unit’s estimated duration by the amount. This is
    /// only ever an estimate for units such as months.
    pub fn to_estimated_duration(&self) -> Result<Duration> {
        self.unit.estimated_duration().checked_mul(self.amount)
    }

    /// Converts this period into an exact duration, which only works for
    /// units that are convertible to seconds or nanoseconds.
    pub fn to_duration(&self) -> Result<Duration> {
        let exact = [ ISOChronology::seconds(), ISOChronology::nanos() ];
        self.to_equivalent_any(&exact)?.to_estimated_duration()
    }
}

impl PartialOrd for PeriodField {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodField {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unit.cmp(&other.unit)
            .then_with(|| self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for PeriodField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

impl fmt::Debug for PeriodField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PeriodField({})", self)
    }
}
