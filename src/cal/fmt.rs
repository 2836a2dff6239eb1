//! ISO-8601 text for the calendar values.
//!
//! `Display` gives the bare ISO form, such as `2009-02-13T23:31:30+01:00`,
//! and `Debug` wraps that in the type name.

use std::fmt;

use pad::{PadStr, Alignment};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, YearMonth, MonthDay};
use crate::cal::offset::{ZoneOffset, OffsetDate, OffsetTime, OffsetDateTime};
use crate::util::RangeExt;


/// Years outside four digits get an explicit sign, so they can’t be
/// mistaken for anything else.
fn write_year(f: &mut fmt::Formatter, year: i64) -> fmt::Result {
    if year.is_within(0 .. 10000) {
        write!(f, "{:04}", year)
    }
    else {
        write!(f, "{:+05}", year)
    }
}

/// The fractional part of a second, using as few groups of three digits
/// as it takes, or nothing at all for whole seconds.
pub(crate) fn fraction(nanos: i32) -> String {
    let (digits, width) = if nanos % 1_000_000 == 0 { (nanos / 1_000_000, 3) }
                     else if nanos % 1_000 == 0     { (nanos / 1_000, 6) }
                     else                           { (nanos, 9) };

    let digits = digits.to_string().pad(width, '0', Alignment::Right, false);
    format!(".{}", digits)
}


impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_year(f, self.year())?;
        write!(f, "-{:02}-{:02}", self.month() as usize, self.day())
    }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;

        if self.nanosecond() != 0 {
            f.write_str(&fraction(self.nanosecond()))?;
        }

        Ok(())
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_year(f, self.year.0)?;
        write!(f, "-{:02}", self.month as usize)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month() as usize, self.day())
    }
}


impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZoneOffset({})", self.id())
    }
}

impl fmt::Display for OffsetDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.date(), self.offset())
    }
}

impl fmt::Debug for OffsetDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetDate({})", self)
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.time(), self.offset())
    }
}

impl fmt::Debug for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetTime({})", self)
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.local_date_time(), self.offset())
    }
}

impl fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OffsetDateTime({})", self)
    }
}
