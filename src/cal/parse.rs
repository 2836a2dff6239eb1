//! Reading the calendar values back from ISO-8601 text.

use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::offset::{ZoneOffset, OffsetDateTime};
use crate::error::{Error, Result};


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match iso8601::time(input) {
            Ok(fields)  => fields_to_time(fields),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let fields = iso8601::datetime(input).map_err(Error::Parse)?;

        let date   = fields_to_date(fields.date)?;
        let time   = fields_to_time(fields.time)?;
        let offset = ZoneOffset::of_hours_and_minutes(fields.time.tz_offset_hours, fields.time.tz_offset_minutes)?;
        Ok(Self::new(LocalDateTime::new(date, time), offset))
    }
}

impl FromStr for ZoneOffset {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::of_id(input)
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(i64::from(month))?;
            LocalDate::ymd(i64::from(year), month_variant, day as i8)
        },
        iso8601::Date::Week { year, ww, d } => {
            let weekday_variant = Weekday::from_one(i64::from(d))?;
            LocalDate::ywd(i64::from(year), i64::from(ww), weekday_variant)
        },
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(i64::from(year), i64::from(ddd))
        },
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime> {
    let h  = fields.hour as i8;
    let m  = fields.minute as i8;
    let s  = fields.second as i8;
    let ns = fields.millisecond as i32 * 1_000_000;

    LocalTime::hms_nano(h, m, s, ns)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn date() {
        let date: LocalDate = "2015-06-26".parse().unwrap();
        assert_eq!(date, LocalDate::ymd(2015, Month::June, 26).unwrap());
    }

    #[test]
    fn week_date() {
        let date: LocalDate = "2009-W53-7".parse().unwrap();
        assert_eq!(date, LocalDate::ymd(2010, Month::January, 3).unwrap());
    }

    #[test]
    fn ordinal_date() {
        let date: LocalDate = "2015-256".parse().unwrap();
        assert_eq!(date.day(), 13);
    }

    #[test]
    fn invalid_date() {
        assert!(matches!("2015-02-30".parse::<LocalDate>(), Err(Error::InvalidFieldValue { .. })));
    }

    #[test]
    fn garbage() {
        assert!(matches!("twenty fifteen".parse::<LocalDate>(), Err(Error::Parse(_))));
    }

    #[test]
    fn time_with_millis() {
        let time: LocalTime = "12:34:56.789".parse().unwrap();
        assert_eq!(time.millisecond(), 789);
    }

    #[test]
    fn offset_date_time() {
        let then: OffsetDateTime = "2001-02-03T04:05:06+07:00".parse().unwrap();
        assert_eq!(then.hour(), 4);
        assert_eq!(then.offset().total_seconds(), 7 * 3600);
    }

    #[test]
    fn zone_offset() {
        let offset: ZoneOffset = "-05:30".parse().unwrap();
        assert_eq!(offset.total_seconds(), -19_800);
    }
}
