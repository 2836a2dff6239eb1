#![crate_name = "calendrical"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! ISO-8601 calendrical values, with rules for getting one field out of
//! another, units of time that convert between each other, and clocks.
//!
//! # Examples
//!
//! ```
//! use calendrical::{ISOChronology, LocalDate, Month, DateTimeFields, FieldRule};
//! use calendrical::rules::DAY_OF_WEEK;
//! use calendrical::clock::{self, Clock};
//!
//! let weeks = ISOChronology::weeks().field(2);
//! assert_eq!(weeks.to_equivalent(&ISOChronology::days()).unwrap().amount(), 14);
//!
//! let date = LocalDate::ymd(2009, Month::February, 13).unwrap();
//! assert_eq!(DAY_OF_WEEK.get_value(&date), Some(5));
//!
//! let friday_13th = DateTimeFields::of_pair(FieldRule::DayOfMonth, 13, FieldRule::DayOfWeek, 5).unwrap();
//! assert!(friday_13th.matches_calendrical(&date));
//!
//! let today = clock::system_utc().today().unwrap();
//! ```

#[macro_use]
mod logging;

mod chronology;
mod duration;
mod error;
mod instant;
mod system;
mod util;

pub mod cal;
pub mod clock;
pub mod period;
pub mod rules;

pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::{Year, YearMonth, MonthDay, LocalDate, LocalTime, LocalDateTime, Month, Weekday};
pub use crate::cal::{ZoneOffset, OffsetDate, OffsetTime, OffsetDateTime, TimeZone, ZonedDateTime};
pub use crate::chronology::ISOChronology;
pub use crate::clock::{Clock, TimeSource};
pub use crate::duration::Duration;
pub use crate::error::{Error, Result};
pub use crate::instant::Instant;
pub use crate::period::{PeriodField, PeriodUnit};
pub use crate::rules::{Calendrical, DateTimeFields, FieldRule, Rule};
