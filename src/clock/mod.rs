//! Clocks, which say what the time is now.
//!
//! A clock only has to know two things: the current instant, from its
//! time source, and which zone it’s in. Everything else, from today’s date
//! to the current zoned date-time, is worked out from those two.
//!
//! ```rust
//! use calendrical::{Instant, TimeZone, Month, DatePiece};
//! use calendrical::clock::{self, Clock};
//!
//! let clock = clock::fixed(Instant::at(1_234_567_890), TimeZone::utc());
//! let today = clock.today().unwrap();
//! assert_eq!(today.month(), Month::February);
//! assert_eq!(clock.tomorrow().unwrap().day(), 14);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::cal::{LocalDate, LocalTime, LocalDateTime, ZoneOffset, OffsetDate, OffsetTime, OffsetDateTime};
use crate::cal::zone::{TimeZone, ZonedDateTime, ZoneResolver, ZoneResolvers};
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::system::sys_local_offset;

pub mod source;

pub use self::source::TimeSource;


/// A **clock** gives the current date and time.
///
/// Only `source` and `zone` need implementing; every other method is
/// worked out from them. A clock that can’t provide one of the two, such
/// as a test clock that only knows what day it is, leaves it out, and the
/// methods that depend on it fail as unsupported.
pub trait Clock: fmt::Debug {

    /// The time source this clock reads the instant from.
    fn source(&self) -> Result<Arc<dyn TimeSource>> {
        Err(Error::Unsupported("Clock::source"))
    }

    /// The zone this clock’s dates and times are in.
    fn zone(&self) -> Result<TimeZone> {
        Err(Error::Unsupported("Clock::zone"))
    }

    /// Returns a copy of this clock reading from a different source.
    fn with_source(&self, _source: Arc<dyn TimeSource>) -> Result<Self>
    where Self: Sized
    {
        Err(Error::Unsupported("Clock::with_source"))
    }

    /// Returns a copy of this clock in a different zone.
    fn with_zone(&self, _zone: TimeZone) -> Result<Self>
    where Self: Sized
    {
        Err(Error::Unsupported("Clock::with_zone"))
    }

    /// The current instant.
    fn instant(&self) -> Result<Instant> {
        self.source()?.instant()
    }

    /// The current date and time, with the zone’s offset at this instant.
    fn offset_date_time(&self) -> Result<OffsetDateTime> {
        let instant = self.instant()?;
        let offset = self.zone()?.rules().offset_at(instant);
        OffsetDateTime::from_instant(instant, offset)
    }

    fn offset_date(&self) -> Result<OffsetDate> {
        Ok(self.offset_date_time()?.to_offset_date())
    }

    fn offset_time(&self) -> Result<OffsetTime> {
        Ok(self.offset_date_time()?.to_offset_time())
    }

    fn date_time(&self) -> Result<LocalDateTime> {
        Ok(self.offset_date_time()?.local_date_time())
    }

    fn today(&self) -> Result<LocalDate> {
        Ok(self.offset_date()?.date())
    }

    fn time(&self) -> Result<LocalTime> {
        Ok(self.offset_time()?.time())
    }

    fn tomorrow(&self) -> Result<LocalDate> {
        self.today()?.plus_days(1)
    }

    fn yesterday(&self) -> Result<LocalDate> {
        self.today()?.plus_days(-1)
    }

    fn time_to_minute(&self) -> Result<LocalTime> {
        Ok(self.time()?.truncated_to_minute())
    }

    fn time_to_second(&self) -> Result<LocalTime> {
        Ok(self.time()?.truncated_to_second())
    }

    fn date_time_to_minute(&self) -> Result<LocalDateTime> {
        Ok(self.date_time()?.truncated_to_minute())
    }

    fn date_time_to_second(&self) -> Result<LocalDateTime> {
        Ok(self.date_time()?.truncated_to_second())
    }

    fn offset_time_to_minute(&self) -> Result<OffsetTime> {
        Ok(self.offset_time()?.truncated_to_minute())
    }

    fn offset_time_to_second(&self) -> Result<OffsetTime> {
        Ok(self.offset_time()?.truncated_to_second())
    }

    fn offset_date_time_to_minute(&self) -> Result<OffsetDateTime> {
        Ok(self.offset_date_time()?.truncated_to_minute())
    }

    fn offset_date_time_to_second(&self) -> Result<OffsetDateTime> {
        Ok(self.offset_date_time()?.truncated_to_second())
    }

    /// The current date and time in this clock’s zone. During an overlap,
    /// this keeps the offset the instant actually has.
    fn zoned_date_time(&self) -> Result<ZonedDateTime> {
        let now = self.offset_date_time()?;
        ZonedDateTime::resolve(now.local_date_time(), self.zone()?, ZoneResolvers::retain_offset(), Some(now.offset()))
    }

    /// The current local date and time placed back into this clock’s zone
    /// by the given resolver.
    fn zoned_date_time_with(&self, resolver: &dyn ZoneResolver) -> Result<ZonedDateTime> {
        ZonedDateTime::of(self.date_time()?, self.zone()?, resolver)
    }
}


/// A clock made from a time source and a zone, either of which can be
/// swapped out for a new clock.
#[derive(Debug, Clone)]
pub struct TimeSourceClock {
    source: Arc<dyn TimeSource>,
    zone: TimeZone,
}

impl TimeSourceClock {
    pub fn new(source: Arc<dyn TimeSource>, zone: TimeZone) -> Self {
        Self { source, zone }
    }
}

impl Clock for TimeSourceClock {
    fn source(&self) -> Result<Arc<dyn TimeSource>> {
        Ok(Arc::clone(&self.source))
    }

    fn zone(&self) -> Result<TimeZone> {
        Ok(self.zone.clone())
    }

    fn with_source(&self, source: Arc<dyn TimeSource>) -> Result<Self> {
        Ok(Self::new(source, self.zone.clone()))
    }

    fn with_zone(&self, zone: TimeZone) -> Result<Self> {
        Ok(Self::new(Arc::clone(&self.source), zone))
    }
}


/// A clock reading the system time in the given zone.
pub fn system(zone: TimeZone) -> TimeSourceClock {
    TimeSourceClock::new(source::system(), zone)
}

/// A clock reading the system time in UTC.
pub fn system_utc() -> TimeSourceClock {
    system(TimeZone::utc())
}

/// A clock reading the system time at the computer’s current offset from
/// UTC, or at UTC if the offset can’t be found out.
pub fn system_default_zone() -> TimeSourceClock {
    let now = Instant::now();

    let zone = match sys_local_offset(now.seconds()).map(ZoneOffset::of_total_seconds) {
        Some(Ok(offset)) => TimeZone::fixed(offset),
        Some(Err(_error)) => {
            debug!("Ignoring system UTC offset: {}", _error);
            TimeZone::utc()
        },
        None => {
            debug!("No system UTC offset available; using UTC");
            TimeZone::utc()
        },
    };

    system(zone)
}

/// A clock stuck at the given instant, for testing.
pub fn fixed(instant: Instant, zone: TimeZone) -> TimeSourceClock {
    TimeSourceClock::new(source::fixed(instant), zone)
}
