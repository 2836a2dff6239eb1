//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{Ordering, PartialOrd};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::cal::{DatePiece, TimePiece};
use crate::duration::NANOS_IN_SECOND;
use crate::error::{Error, Result};
use crate::rules::FieldRule;
use crate::util::{checked_add, checked_sub, split_cycles};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.leap_year_calculations().1
    }

    /// The number of days in this year, either 365 or 366.
    pub fn day_count(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(*expiry_date.year, 2017);
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A month-year pair.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Creates a year-month, checking that the year is in range.
    pub fn of(year: i64, month: Month) -> Result<Self> {
        let year = FieldRule::Year.check_value(year)?;
        Ok(Year(year).month(month))
    }

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::Year;
    /// use calendrical::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).day_count(), 29);
    /// assert_eq!(Year(1900).month(February).day_count(), 28);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns a `LocalDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `LocalDate::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<LocalDate> {
        LocalDate::ymd(self.year.0, self.month, day)
    }
}


/// A month-day pair, such as the 29th of February, without a year.
///
/// Any day that exists in at least one year is allowed, so the 29th of
/// February is fine but the 30th isn’t.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct MonthDay {
    month: Month,
    day: i8,
}

impl MonthDay {

    /// Creates a month-day, checking the day against the longest that
    /// month ever gets.
    ///
    /// ```rust
    /// use calendrical::{MonthDay, Month};
    ///
    /// assert!(MonthDay::of(Month::February, 29).is_ok());
    /// assert!(MonthDay::of(Month::April, 31).is_err());
    /// ```
    pub fn of(month: Month, day: i8) -> Result<Self> {
        let max = month.max_days();
        if day < 1 || day > max {
            return Err(Error::InvalidFieldValue {
                rule: FieldRule::DayOfMonth.name(),
                value: i64::from(day),
                min: 1,
                max: i64::from(max),
            });
        }

        Ok(Self { month, day })
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> i8 {
        self.day
    }

    /// Whether this month-day exists in the given year, which is only
    /// ever a problem for the 29th of February.
    pub fn is_valid_year(&self, year: i64) -> bool {
        self.day <= self.month.days_in_month(Year(year).is_leap_year())
    }

    /// Combines this month-day with a year to make a date.
    pub fn at_year(&self, year: i64) -> Result<LocalDate> {
        LocalDate::ymd(year, self.month, self.day)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// Number of days between  **1st January, 1970** and **1st March, 2000**.
///
/// This might seem like an odd number to calculate, instead of using the
/// 1st of January as a reference point, but it turns out that by having the
/// reference point immediately after a possible leap-year day, the maths
/// needed to calculate the day/week/month of an instant comes out a *lot*
/// simpler!
///
/// The Gregorian calendar operates on a 400-year cycle, so the combination
/// of having it on a year that’s a multiple of 400, and having the leap
/// day at the very end of one of these cycles, means that the calculations
/// are reduced to simple division (of course, with a bit of date-shifting
/// to base a date around this reference point).
///
/// The only problem is that many people assume the Unix epoch to be
/// midnight on the 1st January 1970, so this value (and any functions that
/// depend on it) aren’t exposed to users of this library.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March



/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// Instantiate the 20th of July 1969 based on its year,
    /// week-of-year, and weekday.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self> {
        let _ = FieldRule::Year.check_value(year)?;
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(|days| Self::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// Instantiate the 13th of September 2015 based on its year
    /// and day-of-year.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self> {
        let _ = FieldRule::DayOfYear.check_value(yearday)?;
        let days_in_year = i64::from(Year(year).day_count());

        if yearday > days_in_year {
            return Err(Error::InvalidFieldValue {
                rule: FieldRule::DayOfYear.name(),
                value: yearday,
                min: 1,
                max: days_in_year,
            });
        }

        let jan_1 = Self::ymd(year, January, 1)?;
        Ok(Self::from_days_since_epoch(jan_1.to_epoch_day() + yearday - 1 - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date instance from the given year, week-of-year,
    /// and weekday values.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// Instantiate the 11th of September 2015 based on its year,
    /// week-of-year, and weekday.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Weekday, Month, DatePiece};
    ///
    /// let date = LocalDate::ywd(2015, 37, Weekday::Friday).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 11);
    /// assert_eq!(date.weekday(), Weekday::Friday);
    /// ```
    ///
    /// Note that according to the ISO-8601 standard, the year will change
    /// when working with dates early in week 1, or late in week 53:
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Weekday, Month, DatePiece};
    ///
    /// let date = LocalDate::ywd(2009, 1, Weekday::Monday).unwrap();
    /// assert_eq!(date.year(), 2008);
    /// assert_eq!(date.month(), Month::December);
    /// assert_eq!(date.day(), 29);
    ///
    /// let date = LocalDate::ywd(2009, 53, Weekday::Sunday).unwrap();
    /// assert_eq!(date.year(), 2010);
    /// assert_eq!(date.month(), Month::January);
    /// assert_eq!(date.day(), 3);
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self> {
        if week < 1 || week > 53 {
            return Err(Error::InvalidArgument(format!("week-of-year must be between 1 and 53, was {}", week)));
        }

        let jan_4 = Self::ymd(year, January, 4)?;
        let correction = i64::from(jan_4.weekday.value()) + 3;

        let yearday = 7 * week + i64::from(weekday.value()) - correction;

        if yearday <= 0 {
            let days_in_year = i64::from(Year(year - 1).day_count());
            Self::yd(year - 1, days_in_year + yearday)
        }
        else {
            let days_in_year = i64::from(Year(year).day_count());

            if yearday > days_in_year {
                Self::yd(year + 1, yearday - days_in_year)
            }
            else {
                Self::yd(year, yearday)
            }
        }
    }

    /// Creates the date that is the given number of days after the 1st of
    /// January, 1970.
    ///
    /// ```rust
    /// use calendrical::{LocalDate, Month};
    ///
    /// assert_eq!(LocalDate::of_epoch_day(0), LocalDate::ymd(1970, Month::January, 1));
    /// assert_eq!(LocalDate::of_epoch_day(-1), LocalDate::ymd(1969, Month::December, 31));
    /// ```
    pub fn of_epoch_day(days: i64) -> Result<Self> {
        let days = checked_sub(days, EPOCH_DIFFERENCE)?;
        let date = Self::from_days_since_epoch(days);
        let _ = FieldRule::Year.check_value(date.ymd.year)?;
        Ok(date)
    }

    /// The number of days between the 1st of January, 1970, and this date.
    pub fn to_epoch_day(&self) -> i64 {
        self.ymd.days_since_1970()
    }

    /// Returns the date the given number of days later, or earlier if
    /// negative.
    pub fn plus_days(&self, days: i64) -> Result<Self> {
        Self::of_epoch_day(checked_add(self.to_epoch_day(), days)?)
    }

    pub fn year_month(&self) -> YearMonth {
        Year(self.ymd.year).month(self.ymd.month)
    }

    pub fn month_day(&self) -> MonthDay {
        MonthDay { month: self.ymd.month, day: self.ymd.day }
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the EPOCH.
    ///
    /// This is used by all the other constructor functions.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about.
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, and it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl Hash for LocalDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ymd.hash(state)
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight.
    pub fn from_seconds_since_midnight(seconds: i64) -> Result<Self> {
        Self::from_seconds_and_nanos_since_midnight(seconds, 0)
    }

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight, along with the
    /// nanosecond of the second.
    pub fn from_seconds_and_nanos_since_midnight(seconds: i64, nanosecond: i32) -> Result<Self> {
        if seconds < 0 || seconds >= SECONDS_IN_DAY {
            return Err(Error::InvalidArgument(format!("seconds since midnight must be between 0 and {}, was {}", SECONDS_IN_DAY - 1, seconds)));
        }

        Self::hms_nano((seconds / 60 / 60) as i8, (seconds / 60 % 60) as i8, (seconds % 60) as i8, nanosecond)
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0 }
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and nanosecond fields are set to 0.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hm(hour: i8, minute: i8) -> Result<Self> {
        Self::hms_nano(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self> {
        Self::hms_nano(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and nanosecond fields.
    pub fn hms_nano(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self> {
        let _ = FieldRule::HourOfDay.check_value(i64::from(hour))?;
        let _ = FieldRule::MinuteOfHour.check_value(i64::from(minute))?;
        let _ = FieldRule::SecondOfMinute.check_value(i64::from(second))?;
        let _ = FieldRule::NanoOfSecond.check_value(i64::from(nanosecond))?;
        Ok(Self { hour, minute, second, nanosecond })
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring nanoseconds.
    pub fn to_seconds(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// This time with the seconds and nanoseconds zeroed.
    pub fn truncated_to_minute(self) -> Self {
        Self { second: 0, nanosecond: 0, ..self }
    }

    /// This time with the nanoseconds zeroed.
    pub fn truncated_to_second(self) -> Self {
        Self { nanosecond: 0, ..self }
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> i32 { self.nanosecond }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of nanoseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Result<Self> {
        Self::at_nanos(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// nanosecond of that second.
    pub fn at_nanos(seconds_since_1970_epoch: i64, nanosecond: i32) -> Result<Self> {
        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);

        Ok(Self {
            date: LocalDate::of_epoch_day(days)?,
            time: LocalTime::from_seconds_and_nanos_since_midnight(secs, nanosecond)?,
        })
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The number of seconds between midnight on the 1st of January 1970
    /// and this date-time, as though both were in the same zone.
    pub fn to_epoch_second(&self) -> i64 {
        self.date.to_epoch_day() * SECONDS_IN_DAY + self.time.to_seconds()
    }

    /// Moves this date-time by a number of seconds and nanoseconds.
    pub fn plus_nanos(&self, seconds: i64, nanos: i64) -> Result<Self> {
        let total = checked_add(i64::from(self.time.nanosecond), nanos)?;
        let (carry, nanosecond) = split_cycles(total, NANOS_IN_SECOND);
        let seconds = checked_add(checked_add(self.to_epoch_second(), seconds)?, carry)?;
        Self::at_nanos(seconds, nanosecond as i32)
    }

    pub fn truncated_to_minute(&self) -> Self {
        Self::new(self.date, self.time.truncated_to_minute())
    }

    pub fn truncated_to_second(&self) -> Self {
        Self::new(self.date, self.time.truncated_to_second())
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn nanosecond(&self) -> i32 { self.time.nanosecond }
}


/// A **YMD** is an implementation detail of `LocalDate`. It provides
/// helper methods relating to the construction of `LocalDate` instances.
///
/// The main difference is that while all `LocalDate` values get checked
/// for validity before they are used, there is no such check for `YMD`.
/// The interface to `LocalDate` ensures that it should be impossible to
/// create an instance of the 74th of March, for example, but you’re
/// free to create such an instance of `YMD`. For this reason, it is not
/// exposed to implementors of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970, if this datestamp is valid.
    fn to_days_since_epoch(&self) -> Result<i64> {
        let max = self.month.days_in_month(Year(self.year).is_leap_year());

        if self.day < 1 || self.day > max {
            return Err(Error::InvalidFieldValue {
                rule: FieldRule::DayOfMonth.name(),
                value: i64::from(self.day),
                min: 1,
                max: i64::from(max),
            });
        }

        Ok(self.days_since_1970())
    }

    /// The day count itself, which assumes the datestamp is valid.
    fn days_since_1970(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + i64::from(self.month.days_before_start())

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + i64::from(self.day - 1)
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, which is two days after Monday.
    WEEKDAYS[(days + 2).rem_euclid(7) as usize]
}


static MONTHS: [Month; 12] = [
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// The shortest this month can be.
    pub fn min_days(self) -> i8 {
        self.days_in_month(false)
    }

    /// The longest this month can be.
    pub fn max_days(self) -> i8 {
        self.days_in_month(true)
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// The quarter of the year this month is in, from 1 to 4.
    pub fn quarter(self) -> i8 {
        (self.months_from_january() / 3) as i8 + 1
    }

    /// Where this month is in its quarter, from 1 to 3.
    pub fn month_of_quarter(self) -> i8 {
        (self.months_from_january() % 3) as i8 + 1
    }

    /// Returns the month the given number of months after this one,
    /// wrapping round the end of the year in either direction.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::November.plus(3), Month::February);
    /// assert_eq!(Month::January.plus(-1), Month::December);
    /// assert_eq!(Month::March.plus(-25), Month::February);
    /// ```
    pub fn plus(self, months: i64) -> Self {
        let index = (self.months_from_january() as i64 + months.rem_euclid(12)) % 12;
        MONTHS[index as usize]
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calendrical::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i64) -> Result<Self> {
        let month = FieldRule::MonthOfYear.check_value(month)?;
        Ok(MONTHS[month as usize - 1])
    }
}


static WEEKDAYS: [Weekday; 7] = [
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
];

/// A named day of the week.
///
/// Weeks start on Monday, as they do in ISO-8601.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
}

// There’s no Ord instance for weekdays: depending on where you are, Sunday
// either starts or ends the week, and comparing them makes little sense
// without a date attached.

impl Weekday {

    /// The ISO-8601 number of this weekday, with Monday as 1 and Sunday
    /// as 7.
    pub fn value(self) -> i8 {
        self as i8 + 1
    }

    /// Returns the weekday the given number of days after this one.
    pub fn plus(self, days: i64) -> Self {
        let index = (i64::from(self as i8) + days.rem_euclid(7)) % 7;
        WEEKDAYS[index as usize]
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1, and Sunday as Day 7.
    ///
    /// ```rust
    /// use calendrical::Weekday;
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i64) -> Result<Self> {
        let weekday = FieldRule::DayOfWeek.check_value(weekday)?;
        Ok(WEEKDAYS[weekday as usize - 1])
    }
}
