//! The integer fields of the ISO calendar.

use std::cmp::Ordering;
use std::fmt;

use crate::chronology::ISOChronology;
use crate::error::{Error, Result};
use crate::period::PeriodUnit;
use crate::rules::{Rule, RuleKind};


/// A **field rule** describes one integer field of a date or time, such
/// as the day of the month: what it’s called, the values it can take, and
/// which unit it counts in over what range.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum FieldRule {
    Year,
    QuarterOfYear,
    MonthOfQuarter,
    MonthOfYear,
    DayOfYear,
    DayOfMonth,
    DayOfWeek,
    AmPmOfDay,
    HourOfAmPm,
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    NanoOfSecond,
}

use self::FieldRule::*;

/// Every field, in declaration order.
#[cfg(test)]
pub(crate) const ALL_FIELDS: [FieldRule; 13] = [
    Year, QuarterOfYear, MonthOfQuarter, MonthOfYear, DayOfYear, DayOfMonth,
    DayOfWeek, AmPmOfDay, HourOfAmPm, HourOfDay, MinuteOfHour, SecondOfMinute,
    NanoOfSecond,
];

impl FieldRule {

    pub fn name(self) -> &'static str {
        match self {
            Year            => "Year",
            QuarterOfYear   => "QuarterOfYear",
            MonthOfQuarter  => "MonthOfQuarter",
            MonthOfYear     => "MonthOfYear",
            DayOfYear       => "DayOfYear",
            DayOfMonth      => "DayOfMonth",
            DayOfWeek       => "DayOfWeek",
            AmPmOfDay       => "AmPmOfDay",
            HourOfAmPm      => "HourOfAmPm",
            HourOfDay       => "HourOfDay",
            MinuteOfHour    => "MinuteOfHour",
            SecondOfMinute  => "SecondOfMinute",
            NanoOfSecond    => "NanoOfSecond",
        }
    }

    pub fn minimum_value(self) -> i64 {
        match self {
            Year => -999_999_999,
            QuarterOfYear | MonthOfQuarter | MonthOfYear | DayOfYear | DayOfMonth | DayOfWeek => 1,
            AmPmOfDay | HourOfAmPm | HourOfDay | MinuteOfHour | SecondOfMinute | NanoOfSecond => 0,
        }
    }

    pub fn maximum_value(self) -> i64 {
        match self {
            Year            => 999_999_999,
            QuarterOfYear   => 4,
            MonthOfQuarter  => 3,
            MonthOfYear     => 12,
            DayOfYear       => 366,
            DayOfMonth      => 31,
            DayOfWeek       => 7,
            AmPmOfDay       => 1,
            HourOfAmPm      => 11,
            HourOfDay       => 23,
            MinuteOfHour    => 59,
            SecondOfMinute  => 59,
            NanoOfSecond    => 999_999_999,
        }
    }

    /// The lowest the maximum ever gets, such as 28 for the day of the
    /// month.
    pub fn smallest_maximum_value(self) -> i64 {
        match self {
            DayOfYear   => 365,
            DayOfMonth  => 28,
            _           => self.maximum_value(),
        }
    }

    /// The unit this field counts in.
    pub fn period_unit(self) -> PeriodUnit {
        match self {
            Year                             => ISOChronology::years(),
            QuarterOfYear                    => ISOChronology::quarters(),
            MonthOfQuarter | MonthOfYear     => ISOChronology::months(),
            DayOfYear | DayOfMonth | DayOfWeek => ISOChronology::days(),
            AmPmOfDay                        => ISOChronology::twelve_hours(),
            HourOfAmPm | HourOfDay           => ISOChronology::hours(),
            MinuteOfHour                     => ISOChronology::minutes(),
            SecondOfMinute                   => ISOChronology::seconds(),
            NanoOfSecond                     => ISOChronology::nanos(),
        }
    }

    /// The unit this field counts up to before going round again, or
    /// `None` for a field that never does, like the year.
    pub fn period_range(self) -> Option<PeriodUnit> {
        match self {
            Year                          => None,
            QuarterOfYear | MonthOfYear | DayOfYear => Some(ISOChronology::years()),
            MonthOfQuarter                => Some(ISOChronology::quarters()),
            DayOfMonth                    => Some(ISOChronology::months()),
            DayOfWeek                     => Some(ISOChronology::weeks()),
            AmPmOfDay | HourOfDay         => Some(ISOChronology::days()),
            HourOfAmPm                    => Some(ISOChronology::twelve_hours()),
            MinuteOfHour                  => Some(ISOChronology::hours()),
            SecondOfMinute                => Some(ISOChronology::minutes()),
            NanoOfSecond                  => Some(ISOChronology::seconds()),
        }
    }

    pub fn is_valid_value(self, value: i64) -> bool {
        value >= self.minimum_value() && value <= self.maximum_value()
    }

    /// Returns the value if it’s in range, or an error naming this field
    /// and its bounds if it isn’t.
    ///
    /// ```rust
    /// use calendrical::{Error, FieldRule};
    ///
    /// assert_eq!(FieldRule::MonthOfYear.check_value(6), Ok(6));
    /// assert_eq!(FieldRule::MonthOfYear.check_value(13), Err(Error::InvalidFieldValue {
    ///     rule: "MonthOfYear", value: 13, min: 1, max: 12,
    /// }));
    /// ```
    pub fn check_value(self, value: i64) -> Result<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        }
        else {
            Err(Error::InvalidFieldValue {
                rule: self.name(),
                value,
                min: self.minimum_value(),
                max: self.maximum_value(),
            })
        }
    }

    /// The typed rule handle for this field.
    pub fn rule(self) -> Rule<i64> {
        Rule::of(RuleKind::Field(self))
    }
}

impl PartialOrd for FieldRule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fields sort from the finest to the coarsest: by unit, then by range,
/// with a field that never goes round coming last.
impl Ord for FieldRule {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        let ranges = match (self.period_range(), other.period_range()) {
            (Some(a), Some(b))  => a.cmp(&b),
            (Some(_), None)     => Ordering::Less,
            (None, Some(_))     => Ordering::Greater,
            (None, None)        => Ordering::Equal,
        };

        self.period_unit().cmp(&other.period_unit())
            .then(ranges)
            .then_with(|| self.name().cmp(other.name()))
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
