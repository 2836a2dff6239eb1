//! Rules, and how a value for one is found.
//!
//! Every value that has fields answers the question “what is your value
//! for this rule?” through the `Calendrical` trait. The answer comes from
//! one of two places, tried in order:
//!
//! 1. The value itself, if it holds that rule directly;
//! 2. A derivation from some *other* rule the value can answer, such as
//!    getting the day of the month from a date.
//!
//! If neither works, there is no value, which isn’t an error unless the
//! checked variant was asked for.
//!
//! ```rust
//! use calendrical::{LocalDate, Month};
//! use calendrical::rules::{DAY_OF_WEEK, QUARTER_OF_YEAR, YEAR_MONTH};
//!
//! let date = LocalDate::ymd(2010, Month::June, 30).unwrap();
//! assert_eq!(DAY_OF_WEEK.get_value(&date), Some(3));
//! assert_eq!(QUARTER_OF_YEAR.get_value(&date), Some(2));
//! assert_eq!(YEAR_MONTH.get_value(&date).unwrap().to_string(), "2010-06");
//! ```

use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, MonthDay, YearMonth};
use crate::cal::offset::{ZoneOffset, OffsetDate, OffsetTime, OffsetDateTime};
use crate::cal::zone::{TimeZone, ZonedDateTime};
use crate::error::{Error, Result};

mod field;
mod fields;

pub use self::field::FieldRule;
pub use self::fields::DateTimeFields;


/// How many derivations deep a lookup may go before it gives up. The
/// built-in rules never get close to this.
pub const MAX_DERIVATION_DEPTH: usize = 16;


/// Every kind of rule there is.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum RuleKind {
    Field(FieldRule),
    LocalDate,
    LocalTime,
    LocalDateTime,
    YearMonth,
    MonthDay,
    ZoneOffset,
    TimeZone,
    OffsetDate,
    OffsetTime,
    OffsetDateTime,
    ZonedDateTime,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Field(field)    => field.name(),
            RuleKind::LocalDate       => "LocalDate",
            RuleKind::LocalTime       => "LocalTime",
            RuleKind::LocalDateTime   => "LocalDateTime",
            RuleKind::YearMonth       => "YearMonth",
            RuleKind::MonthDay        => "MonthDay",
            RuleKind::ZoneOffset      => "ZoneOffset",
            RuleKind::TimeZone        => "TimeZone",
            RuleKind::OffsetDate      => "OffsetDate",
            RuleKind::OffsetTime      => "OffsetTime",
            RuleKind::OffsetDateTime  => "OffsetDateTime",
            RuleKind::ZonedDateTime   => "ZonedDateTime",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A value for some rule. Which variant it is depends on the rule’s kind:
/// integer fields give `Field`, and the others give the value type of the
/// same name.
#[derive(PartialEq, Debug, Clone)]
pub enum Value {
    Field(i64),
    LocalDate(LocalDate),
    LocalTime(LocalTime),
    LocalDateTime(LocalDateTime),
    YearMonth(YearMonth),
    MonthDay(MonthDay),
    ZoneOffset(ZoneOffset),
    TimeZone(TimeZone),
    OffsetDate(OffsetDate),
    OffsetTime(OffsetTime),
    OffsetDateTime(OffsetDateTime),
    ZonedDateTime(ZonedDateTime),
}


/// A type that can be the value of a rule.
pub trait RuleValue: Sized {
    fn from_value(value: Value) -> Option<Self>;
    fn into_value(self) -> Value;
}

macro_rules! rule_value {
    ($($variant:ident => $type:ty),* $(,)?) => {
        $(
            impl RuleValue for $type {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _                  => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

rule_value! {
    Field           => i64,
    LocalDate       => LocalDate,
    LocalTime       => LocalTime,
    LocalDateTime   => LocalDateTime,
    YearMonth       => YearMonth,
    MonthDay        => MonthDay,
    ZoneOffset      => ZoneOffset,
    TimeZone        => TimeZone,
    OffsetDate      => OffsetDate,
    OffsetTime      => OffsetTime,
    OffsetDateTime  => OffsetDateTime,
    ZonedDateTime   => ZonedDateTime,
}


/// Anything that can be asked for its value of a rule.
pub trait Calendrical: fmt::Debug {

    /// The value this holds for the rule without working anything out,
    /// or `None` to let the rule try deriving one.
    fn direct_value(&self, kind: RuleKind) -> Option<Value>;
}


/// A **rule** is a typed handle on a kind of rule, which knows what type
/// its values come out as.
pub struct Rule<T> {
    kind: RuleKind,
    marker: PhantomData<fn() -> T>,
}

impl<T> Rule<T> {
    pub const fn of(kind: RuleKind) -> Self {
        Self { kind, marker: PhantomData }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl<T: RuleValue> Rule<T> {

    /// Looks the value up directly, and derives it if that fails.
    pub fn get_value(&self, calendrical: &dyn Calendrical) -> Option<T> {
        resolve(self.kind, calendrical).and_then(T::from_value)
    }

    /// Like `get_value`, but failing when there’s no value to be had.
    pub fn get_value_checked(&self, calendrical: &dyn Calendrical) -> Result<T> {
        self.get_value(calendrical)
            .ok_or_else(|| Error::UnsupportedRule {
                rule: self.name(),
                target: format!("{:?}", calendrical),
            })
    }

    /// Works the value out from the calendrical’s other rules, without
    /// looking it up directly first.
    pub fn derive_value(&self, calendrical: &dyn Calendrical) -> Option<T> {
        derive(self.kind, calendrical, 0).and_then(T::from_value)
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rule<T> {}

impl<T> PartialEq for Rule<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rule({})", self.kind)
    }
}


pub const YEAR: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::Year));
pub const QUARTER_OF_YEAR: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::QuarterOfYear));
pub const MONTH_OF_QUARTER: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::MonthOfQuarter));
pub const MONTH_OF_YEAR: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::MonthOfYear));
pub const DAY_OF_YEAR: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::DayOfYear));
pub const DAY_OF_MONTH: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::DayOfMonth));
pub const DAY_OF_WEEK: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::DayOfWeek));
pub const AMPM_OF_DAY: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::AmPmOfDay));
pub const HOUR_OF_AMPM: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::HourOfAmPm));
pub const HOUR_OF_DAY: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::HourOfDay));
pub const MINUTE_OF_HOUR: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::MinuteOfHour));
pub const SECOND_OF_MINUTE: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::SecondOfMinute));
pub const NANO_OF_SECOND: Rule<i64> = Rule::of(RuleKind::Field(FieldRule::NanoOfSecond));

pub const LOCAL_DATE: Rule<LocalDate> = Rule::of(RuleKind::LocalDate);
pub const LOCAL_TIME: Rule<LocalTime> = Rule::of(RuleKind::LocalTime);
pub const LOCAL_DATE_TIME: Rule<LocalDateTime> = Rule::of(RuleKind::LocalDateTime);
pub const YEAR_MONTH: Rule<YearMonth> = Rule::of(RuleKind::YearMonth);
pub const MONTH_DAY: Rule<MonthDay> = Rule::of(RuleKind::MonthDay);
pub const ZONE_OFFSET: Rule<ZoneOffset> = Rule::of(RuleKind::ZoneOffset);
pub const TIME_ZONE: Rule<TimeZone> = Rule::of(RuleKind::TimeZone);
pub const OFFSET_DATE: Rule<OffsetDate> = Rule::of(RuleKind::OffsetDate);
pub const OFFSET_TIME: Rule<OffsetTime> = Rule::of(RuleKind::OffsetTime);
pub const OFFSET_DATE_TIME: Rule<OffsetDateTime> = Rule::of(RuleKind::OffsetDateTime);
pub const ZONED_DATE_TIME: Rule<ZonedDateTime> = Rule::of(RuleKind::ZonedDateTime);


/// The value for a rule: direct, else derived, else nothing.
pub fn resolve(kind: RuleKind, calendrical: &dyn Calendrical) -> Option<Value> {
    resolve_at(kind, calendrical, 0)
}

fn resolve_at(kind: RuleKind, calendrical: &dyn Calendrical, depth: usize) -> Option<Value> {
    match calendrical.direct_value(kind) {
        Some(value) => Some(value),
        None        => derive(kind, calendrical, depth),
    }
}

fn typed<T: RuleValue>(kind: RuleKind, calendrical: &dyn Calendrical, depth: usize) -> Option<T> {
    resolve_at(kind, calendrical, depth).and_then(T::from_value)
}

fn field(rule: FieldRule, calendrical: &dyn Calendrical, depth: usize) -> Option<i64> {
    typed(RuleKind::Field(rule), calendrical, depth)
}

/// Works a rule’s value out from the calendrical’s other rules. Each rule
/// only ever asks for rules that are more primitive than itself, or that
/// enclose it, so these chains always end.
fn derive(kind: RuleKind, calendrical: &dyn Calendrical, depth: usize) -> Option<Value> {
    if depth >= MAX_DERIVATION_DEPTH {
        warn!("Gave up deriving {} from {:?} after {} steps", kind, calendrical, depth);
        return None;
    }

    let depth = depth + 1;

    let value = match kind {
        RuleKind::Field(rule) => Value::Field(derive_field(rule, calendrical, depth)?),

        RuleKind::LocalDate => {
            let date = typed::<LocalDateTime>(RuleKind::LocalDateTime, calendrical, depth).map(|dt| dt.date())
                .or_else(|| typed::<OffsetDate>(RuleKind::OffsetDate, calendrical, depth).map(|od| od.date()))?;
            Value::LocalDate(date)
        },

        RuleKind::LocalTime => {
            let time = typed::<LocalDateTime>(RuleKind::LocalDateTime, calendrical, depth).map(|dt| dt.time())
                .or_else(|| typed::<OffsetTime>(RuleKind::OffsetTime, calendrical, depth).map(|ot| ot.time()))?;
            Value::LocalTime(time)
        },

        RuleKind::LocalDateTime => {
            let odt = typed::<OffsetDateTime>(RuleKind::OffsetDateTime, calendrical, depth)?;
            Value::LocalDateTime(odt.local_date_time())
        },

        RuleKind::OffsetDateTime => {
            let zdt = typed::<ZonedDateTime>(RuleKind::ZonedDateTime, calendrical, depth)?;
            Value::OffsetDateTime(zdt.offset_date_time().clone())
        },

        RuleKind::OffsetDate => {
            let odt = typed::<OffsetDateTime>(RuleKind::OffsetDateTime, calendrical, depth)?;
            Value::OffsetDate(odt.to_offset_date())
        },

        RuleKind::OffsetTime => {
            let odt = typed::<OffsetDateTime>(RuleKind::OffsetDateTime, calendrical, depth)?;
            Value::OffsetTime(odt.to_offset_time())
        },

        RuleKind::ZoneOffset => {
            let offset = typed::<OffsetDateTime>(RuleKind::OffsetDateTime, calendrical, depth).map(|odt| odt.offset().clone())
                .or_else(|| typed::<OffsetDate>(RuleKind::OffsetDate, calendrical, depth).map(|od| od.offset().clone()))
                .or_else(|| typed::<OffsetTime>(RuleKind::OffsetTime, calendrical, depth).map(|ot| ot.offset().clone()))?;
            Value::ZoneOffset(offset)
        },

        RuleKind::TimeZone => {
            let zdt = typed::<ZonedDateTime>(RuleKind::ZonedDateTime, calendrical, depth)?;
            Value::TimeZone(zdt.zone().clone())
        },

        RuleKind::MonthDay => {
            let month = Month::from_one(field(FieldRule::MonthOfYear, calendrical, depth)?).ok()?;
            let day = FieldRule::DayOfMonth.check_value(field(FieldRule::DayOfMonth, calendrical, depth)?).ok()?;
            Value::MonthDay(MonthDay::of(month, i8::try_from(day).ok()?).ok()?)
        },

        RuleKind::YearMonth => {
            let year = field(FieldRule::Year, calendrical, depth)?;
            let month = Month::from_one(field(FieldRule::MonthOfYear, calendrical, depth)?).ok()?;
            Value::YearMonth(YearMonth::of(year, month).ok()?)
        },

        RuleKind::ZonedDateTime => return None,
    };

    Some(value)
}

fn derive_field(rule: FieldRule, calendrical: &dyn Calendrical, depth: usize) -> Option<i64> {
    match rule {
        FieldRule::QuarterOfYear | FieldRule::MonthOfQuarter => {
            let month = Month::from_one(field(FieldRule::MonthOfYear, calendrical, depth)?).ok()?;
            if rule == FieldRule::QuarterOfYear { Some(i64::from(month.quarter())) } else { Some(i64::from(month.month_of_quarter())) }
        },

        FieldRule::AmPmOfDay | FieldRule::HourOfAmPm => {
            let hour = FieldRule::HourOfDay.check_value(field(FieldRule::HourOfDay, calendrical, depth)?).ok()?;
            if rule == FieldRule::AmPmOfDay { Some(hour / 12) } else { Some(hour % 12) }
        },

        FieldRule::HourOfDay | FieldRule::MinuteOfHour | FieldRule::SecondOfMinute | FieldRule::NanoOfSecond => {
            let time = typed::<LocalTime>(RuleKind::LocalTime, calendrical, depth)?;
            time_field(rule, &time)
        },

        FieldRule::Year | FieldRule::MonthOfYear | FieldRule::DayOfYear | FieldRule::DayOfMonth | FieldRule::DayOfWeek => {
            let date = typed::<LocalDate>(RuleKind::LocalDate, calendrical, depth)?;
            date_field(rule, &date)
        },
    }
}

/// The value of a date field in a date, or `None` for fields that aren’t
/// about dates.
pub(crate) fn date_field(rule: FieldRule, date: &LocalDate) -> Option<i64> {
    match rule {
        FieldRule::Year             => Some(date.year()),
        FieldRule::MonthOfYear      => Some(date.month() as i64),
        FieldRule::DayOfYear        => Some(i64::from(date.yearday())),
        FieldRule::DayOfMonth       => Some(i64::from(date.day())),
        FieldRule::DayOfWeek        => Some(i64::from(date.weekday().value())),
        FieldRule::QuarterOfYear    => Some(i64::from(date.month().quarter())),
        FieldRule::MonthOfQuarter   => Some(i64::from(date.month().month_of_quarter())),
        _                           => None,
    }
}

/// The value of a time field in a time, or `None` for fields that aren’t
/// about times.
pub(crate) fn time_field(rule: FieldRule, time: &LocalTime) -> Option<i64> {
    match rule {
        FieldRule::HourOfDay        => Some(i64::from(time.hour())),
        FieldRule::MinuteOfHour     => Some(i64::from(time.minute())),
        FieldRule::SecondOfMinute   => Some(i64::from(time.second())),
        FieldRule::NanoOfSecond     => Some(i64::from(time.nanosecond())),
        FieldRule::AmPmOfDay        => Some(i64::from(time.hour() / 12)),
        FieldRule::HourOfAmPm       => Some(i64::from(time.hour() % 12)),
        _                           => None,
    }
}


// The plain value types hold themselves and the parts they’re made of.

impl Calendrical for LocalDate {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::LocalDate => Some(Value::LocalDate(*self)),
            _                   => None,
        }
    }
}

impl Calendrical for LocalTime {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::LocalTime => Some(Value::LocalTime(*self)),
            _                   => None,
        }
    }
}

impl Calendrical for LocalDateTime {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::LocalDateTime => Some(Value::LocalDateTime(*self)),
            RuleKind::LocalDate     => Some(Value::LocalDate(self.date())),
            RuleKind::LocalTime     => Some(Value::LocalTime(self.time())),
            _                       => None,
        }
    }
}

impl Calendrical for YearMonth {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::YearMonth                     => Some(Value::YearMonth(*self)),
            RuleKind::Field(FieldRule::Year)        => Some(Value::Field(self.year.0)),
            RuleKind::Field(FieldRule::MonthOfYear) => Some(Value::Field(self.month as i64)),
            _                                       => None,
        }
    }
}

impl Calendrical for MonthDay {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::MonthDay                      => Some(Value::MonthDay(*self)),
            RuleKind::Field(FieldRule::MonthOfYear) => Some(Value::Field(self.month() as i64)),
            RuleKind::Field(FieldRule::DayOfMonth)  => Some(Value::Field(i64::from(self.day()))),
            _                                       => None,
        }
    }
}
