//! Offsets from UTC, and the dates and times that carry one.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::rules::{Calendrical, RuleKind, Value};
use crate::util::{checked_add, checked_sub};


/// The furthest an offset can be from UTC, which is eighteen hours.
const MAX_SECONDS: i32 = 18 * 60 * 60;

lazy_static! {
    static ref BY_SECONDS: RwLock<HashMap<i32, ZoneOffset>> = RwLock::new(HashMap::new());
    static ref BY_ID: RwLock<HashMap<String, ZoneOffset>> = RwLock::new(HashMap::new());
}


/// A **zone offset** is a fixed amount of time ahead of or behind UTC,
/// such as `+05:30`, between `-18:00` and `+18:00`.
///
/// Offsets are interned: asking for the same amount twice hands back
/// values that share one ID string, no matter which thread asked.
#[derive(Clone)]
pub struct ZoneOffset {
    total_seconds: i32,
    id: Arc<str>,
}

impl ZoneOffset {

    /// The offset of UTC itself, written as `Z`.
    pub fn utc() -> Self {
        Self::interned(0)
    }

    /// Returns the offset with the given number of seconds ahead of UTC,
    /// or behind it if negative.
    ///
    /// ```rust
    /// use calendrical::ZoneOffset;
    ///
    /// let offset = ZoneOffset::of_total_seconds(-(3 * 3600 + 1800)).unwrap();
    /// assert_eq!(offset.id(), "-03:30");
    /// assert!(ZoneOffset::of_total_seconds(19 * 3600).is_err());
    /// ```
    pub fn of_total_seconds(total_seconds: i32) -> Result<Self> {
        if total_seconds < -MAX_SECONDS || total_seconds > MAX_SECONDS {
            return Err(Error::InvalidArgument(format!("zone offset of {} seconds is not in the range -18:00 to +18:00", total_seconds)));
        }

        Ok(Self::interned(total_seconds))
    }

    /// Returns the offset with the given hours and minutes, which have to
    /// have the same sign.
    pub fn of_hours_and_minutes(hours: i32, minutes: i32) -> Result<Self> {
        Self::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Returns the offset with the given hours, minutes, and seconds. All
    /// three have to have the same sign, though any of them can be zero.
    pub fn of_hours_minutes_seconds(hours: i32, minutes: i32, seconds: i32) -> Result<Self> {
        if hours < -18 || hours > 18 {
            return Err(Error::InvalidArgument(format!("zone offset hours not in valid range: value {} is not in the range -18 to 18", hours)));
        }

        if minutes < -59 || minutes > 59 {
            return Err(Error::InvalidArgument(format!("zone offset minutes not in valid range: value {} is not in the range -59 to 59", minutes)));
        }

        if seconds < -59 || seconds > 59 {
            return Err(Error::InvalidArgument(format!("zone offset seconds not in valid range: value {} is not in the range -59 to 59", seconds)));
        }

        let signs = [hours.signum(), minutes.signum(), seconds.signum()];
        if signs.contains(&1) && signs.contains(&-1) {
            return Err(Error::InvalidArgument(format!("zone offset hours, minutes, and seconds must have the same sign: {}, {}, {}", hours, minutes, seconds)));
        }

        if hours.abs() == 18 && (minutes != 0 || seconds != 0) {
            return Err(Error::InvalidArgument("zone offset not in valid range: -18:00 to +18:00".into()));
        }

        Self::of_total_seconds(hours * 3600 + minutes * 60 + seconds)
    }

    /// Returns the offset with the given ID, which is either `Z` or a sign
    /// followed by `hh`, `hh:mm`, `hhmm`, `hh:mm:ss`, or `hhmmss`.
    ///
    /// ```rust
    /// use calendrical::ZoneOffset;
    ///
    /// assert_eq!(ZoneOffset::of_id("+0530").unwrap().id(), "+05:30");
    /// assert_eq!(ZoneOffset::of_id("Z").unwrap(), ZoneOffset::utc());
    /// assert!(ZoneOffset::of_id("+5:30").is_err());
    /// ```
    pub fn of_id(id: &str) -> Result<Self> {
        {
            let cache = BY_ID.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(offset) = cache.get(id) {
                return Ok(offset.clone());
            }
        }

        let offset = Self::parse_id(id)?;

        let mut cache = BY_ID.write().unwrap_or_else(PoisonError::into_inner);
        let offset = cache.entry(id.to_owned())
                          .or_insert_with(|| {
                              trace!("Caching zone offset ID {:?}", id);
                              offset
                          });
        Ok(offset.clone())
    }

    fn parse_id(id: &str) -> Result<Self> {
        if id == "Z" {
            return Ok(Self::utc());
        }

        let bad_id = || Error::InvalidArgument(format!("zone offset ID {:?} is invalid", id));

        let sign = match id.chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _         => return Err(bad_id()),
        };

        let digits = &id[1..];
        let (hours, minutes, seconds) = match digits.len() {
            2 => (two_digits(digits, 0), Some(0), Some(0)),
            4 => (two_digits(digits, 0), two_digits(digits, 2), Some(0)),
            5 if separated(digits, &[2]) => (two_digits(digits, 0), two_digits(digits, 3), Some(0)),
            6 => (two_digits(digits, 0), two_digits(digits, 2), two_digits(digits, 4)),
            8 if separated(digits, &[2, 5]) => (two_digits(digits, 0), two_digits(digits, 3), two_digits(digits, 6)),
            _ => return Err(bad_id()),
        };

        match (hours, minutes, seconds) {
            (Some(h), Some(m), Some(s)) => Self::of_hours_minutes_seconds(sign * h, sign * m, sign * s),
            _                           => Err(bad_id()),
        }
    }

    /// Fetches the canonical offset for the number of seconds, creating it
    /// if this is the first time it’s been asked for.
    fn interned(total_seconds: i32) -> Self {
        {
            let cache = BY_SECONDS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(offset) = cache.get(&total_seconds) {
                return offset.clone();
            }
        }

        // Another thread may have got here first while the lock was
        // released, in which case its value wins.
        let mut cache = BY_SECONDS.write().unwrap_or_else(PoisonError::into_inner);
        cache.entry(total_seconds)
             .or_insert_with(|| {
                 trace!("Caching zone offset of {} seconds", total_seconds);
                 Self { total_seconds, id: build_id(total_seconds).into() }
             })
             .clone()
    }

    /// The number of seconds ahead of UTC.
    pub fn total_seconds(&self) -> i32 {
        self.total_seconds
    }

    /// The normalised ID, such as `Z`, `+01:00`, or `-00:25:21`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_utc(&self) -> bool {
        self.total_seconds == 0
    }

    pub fn hours(&self) -> i8 {
        (self.total_seconds / 3600) as i8
    }

    pub fn minutes(&self) -> i8 {
        (self.total_seconds / 60 % 60) as i8
    }

    pub fn seconds(&self) -> i8 {
        (self.total_seconds % 60) as i8
    }

    /// Whether both offsets are the very same cached instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.id, &other.id)
    }
}

fn build_id(total_seconds: i32) -> String {
    if total_seconds == 0 {
        return "Z".into();
    }

    let sign = if total_seconds < 0 { '-' } else { '+' };
    let abs = total_seconds.abs();
    let (hours, minutes, seconds) = (abs / 3600, abs / 60 % 60, abs % 60);

    if seconds == 0 {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    }
    else {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}

fn two_digits(input: &str, start: usize) -> Option<i32> {
    let bytes = input.as_bytes();
    match (bytes.get(start), bytes.get(start + 1)) {
        (Some(&a), Some(&b)) if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(i32::from(a - b'0') * 10 + i32::from(b - b'0'))
        },
        _ => None,
    }
}

fn separated(input: &str, colons: &[usize]) -> bool {
    colons.iter().all(|&index| input.as_bytes().get(index) == Some(&b':'))
}

impl PartialEq for ZoneOffset {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds == other.total_seconds
    }
}

impl Eq for ZoneOffset {}

impl Hash for ZoneOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds.hash(state)
    }
}

impl PartialOrd for ZoneOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Offsets further ahead of UTC sort first, because the same wall-clock
/// time happens earliest there.
impl Ord for ZoneOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        other.total_seconds.cmp(&self.total_seconds)
    }
}

impl Calendrical for ZoneOffset {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::ZoneOffset => Some(Value::ZoneOffset(self.clone())),
            _                    => None,
        }
    }
}


/// A date with an offset from UTC, such as `2010-06-30+01:00`.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct OffsetDate {
    date: LocalDate,
    offset: ZoneOffset,
}

impl OffsetDate {
    pub fn new(date: LocalDate, offset: ZoneOffset) -> Self {
        Self { date, offset }
    }

    pub fn date(&self) -> LocalDate {
        self.date
    }

    pub fn offset(&self) -> &ZoneOffset {
        &self.offset
    }

    pub fn plus_days(&self, days: i64) -> Result<Self> {
        Ok(Self::new(self.date.plus_days(days)?, self.offset.clone()))
    }
}

impl DatePiece for OffsetDate {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> i8 { self.date.day() }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl Calendrical for OffsetDate {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::OffsetDate => Some(Value::OffsetDate(self.clone())),
            RuleKind::LocalDate  => Some(Value::LocalDate(self.date)),
            RuleKind::ZoneOffset => Some(Value::ZoneOffset(self.offset.clone())),
            _                    => None,
        }
    }
}


/// A time with an offset from UTC, such as `10:15:30+01:00`.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct OffsetTime {
    time: LocalTime,
    offset: ZoneOffset,
}

impl OffsetTime {
    pub fn new(time: LocalTime, offset: ZoneOffset) -> Self {
        Self { time, offset }
    }

    pub fn time(&self) -> LocalTime {
        self.time
    }

    pub fn offset(&self) -> &ZoneOffset {
        &self.offset
    }

    pub fn truncated_to_minute(&self) -> Self {
        Self::new(self.time.truncated_to_minute(), self.offset.clone())
    }

    pub fn truncated_to_second(&self) -> Self {
        Self::new(self.time.truncated_to_second(), self.offset.clone())
    }
}

impl TimePiece for OffsetTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn nanosecond(&self) -> i32 { self.time.nanosecond() }
}

impl Calendrical for OffsetTime {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::OffsetTime => Some(Value::OffsetTime(self.clone())),
            RuleKind::LocalTime  => Some(Value::LocalTime(self.time)),
            RuleKind::ZoneOffset => Some(Value::ZoneOffset(self.offset.clone())),
            _                    => None,
        }
    }
}


/// A date and time with an offset from UTC, which together pin down one
/// exact instant.
///
/// The local part is the wall-clock time at that offset, so the fields
/// read back are the ones that were put in.
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    pub fn new(local: LocalDateTime, offset: ZoneOffset) -> Self {
        Self { local, offset }
    }

    /// The wall-clock time at the given offset when the instant occurs.
    ///
    /// ```rust
    /// use calendrical::{Instant, OffsetDateTime, ZoneOffset, TimePiece};
    ///
    /// let offset = ZoneOffset::of_hours_and_minutes(2, 0).unwrap();
    /// let then = OffsetDateTime::from_instant(Instant::at(0), offset).unwrap();
    /// assert_eq!(then.hour(), 2);
    /// ```
    pub fn from_instant(instant: Instant, offset: ZoneOffset) -> Result<Self> {
        let seconds = checked_add(instant.seconds(), i64::from(offset.total_seconds))?;
        let local = LocalDateTime::at_nanos(seconds, instant.nanos())?;
        Ok(Self { local, offset })
    }

    /// The exact instant this date-time is at.
    pub fn to_instant(&self) -> Result<Instant> {
        let seconds = checked_sub(self.local.to_epoch_second(), i64::from(self.offset.total_seconds))?;
        Instant::at_nanos(seconds, i64::from(self.local.nanosecond()))
    }

    pub fn local_date_time(&self) -> LocalDateTime {
        self.local
    }

    pub fn date(&self) -> LocalDate {
        self.local.date()
    }

    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    pub fn offset(&self) -> &ZoneOffset {
        &self.offset
    }

    pub fn to_offset_date(&self) -> OffsetDate {
        OffsetDate::new(self.local.date(), self.offset.clone())
    }

    pub fn to_offset_time(&self) -> OffsetTime {
        OffsetTime::new(self.local.time(), self.offset.clone())
    }

    pub fn truncated_to_minute(&self) -> Self {
        Self::new(self.local.truncated_to_minute(), self.offset.clone())
    }

    pub fn truncated_to_second(&self) -> Self {
        Self::new(self.local.truncated_to_second(), self.offset.clone())
    }
}

impl DatePiece for OffsetDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> i8 { self.local.day() }
    fn yearday(&self) -> i16 { self.local.yearday() }
    fn weekday(&self) -> Weekday { self.local.weekday() }
}

impl TimePiece for OffsetDateTime {
    fn hour(&self) -> i8 { self.local.hour() }
    fn minute(&self) -> i8 { self.local.minute() }
    fn second(&self) -> i8 { self.local.second() }
    fn nanosecond(&self) -> i32 { self.local.nanosecond() }
}

impl Calendrical for OffsetDateTime {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::OffsetDateTime => Some(Value::OffsetDateTime(self.clone())),
            RuleKind::LocalDateTime  => Some(Value::LocalDateTime(self.local)),
            RuleKind::ZoneOffset     => Some(Value::ZoneOffset(self.offset.clone())),
            _                        => None,
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::thread;

    mod offsets {
        use super::*;

        #[test]
        fn fixed_seconds() {
            assert!(ZoneOffset::of_total_seconds(1234).is_ok());
        }

        #[test]
        fn fixed_seconds_out_of_range() {
            assert!(ZoneOffset::of_total_seconds(100_000).is_err());
        }

        #[test]
        fn fixed_hm() {
            assert_eq!(ZoneOffset::of_hours_and_minutes(5, 30).unwrap().total_seconds(), 19_800);
        }

        #[test]
        fn fixed_hm_negative() {
            assert_eq!(ZoneOffset::of_hours_and_minutes(-3, -45).unwrap().id(), "-03:45");
        }

        #[test]
        fn fixed_hm_err() {
            assert!(ZoneOffset::of_hours_and_minutes(8, 60).is_err());
        }

        #[test]
        fn fixed_hm_signs() {
            assert!(ZoneOffset::of_hours_and_minutes(-4, 30).is_err());
        }

        #[test]
        fn fixed_hm_signs_zero() {
            assert!(ZoneOffset::of_hours_and_minutes(4, 0).is_ok());
            assert!(ZoneOffset::of_hours_minutes_seconds(0, -30, 0).is_ok());
        }

        #[test]
        fn eighteen_hours_exactly() {
            assert!(ZoneOffset::of_hours_and_minutes(-18, 0).is_ok());
            assert!(ZoneOffset::of_hours_and_minutes(18, 1).is_err());
        }

        #[test]
        fn debug_zulu() {
            assert_eq!(format!("{:?}", ZoneOffset::utc()), "ZoneOffset(Z)");
        }

        #[test]
        fn debug_seconds() {
            let offset = ZoneOffset::of_total_seconds(-25 * 60 - 21).unwrap();
            assert_eq!(format!("{:?}", offset), "ZoneOffset(-00:25:21)");
        }

        #[test]
        fn components() {
            let offset = ZoneOffset::of_total_seconds(-25 * 60 - 21).unwrap();
            assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (0, -25, -21));
        }

        #[test]
        fn ahead_sorts_first() {
            let east = ZoneOffset::of_hours_and_minutes(9, 0).unwrap();
            assert!(east < ZoneOffset::utc());
        }
    }

    mod ids {
        use super::*;

        #[test]
        fn every_shape() {
            assert_eq!(ZoneOffset::of_id("+02").unwrap().total_seconds(), 7200);
            assert_eq!(ZoneOffset::of_id("-02:30").unwrap().total_seconds(), -9000);
            assert_eq!(ZoneOffset::of_id("-0230").unwrap().total_seconds(), -9000);
            assert_eq!(ZoneOffset::of_id("+01:02:03").unwrap().total_seconds(), 3723);
            assert_eq!(ZoneOffset::of_id("+010203").unwrap().total_seconds(), 3723);
        }

        #[test]
        fn normalised() {
            assert_eq!(ZoneOffset::of_id("+0100").unwrap().id(), "+01:00");
            assert_eq!(ZoneOffset::of_id("+00:00").unwrap().id(), "Z");
        }

        #[test]
        fn rejected() {
            for id in &["", "+", "1", "+1", "+01:", "+01-00", "+ab:cd", "+19:00", "+01:60", "UTC"] {
                assert!(ZoneOffset::of_id(id).is_err(), "{:?} should not parse", id);
            }
        }
    }

    mod interning {
        use super::*;

        #[test]
        fn same_seconds_same_instance() {
            let a = ZoneOffset::of_total_seconds(3 * 3600).unwrap();
            let b = ZoneOffset::of_hours_and_minutes(3, 0).unwrap();
            assert!(a.ptr_eq(&b));
        }

        #[test]
        fn id_and_seconds_agree() {
            let a = ZoneOffset::of_id("+0415").unwrap();
            let b = ZoneOffset::of_total_seconds(4 * 3600 + 15 * 60).unwrap();
            assert!(a.ptr_eq(&b));
        }

        #[test]
        fn across_threads() {
            let handles: Vec<_> = (0..8).map(|_| thread::spawn(|| ZoneOffset::of_total_seconds(-7 * 3600).unwrap()))
                                        .collect();

            let offsets: Vec<ZoneOffset> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            for offset in &offsets {
                assert!(offset.ptr_eq(&offsets[0]));
            }
        }
    }

    mod instants {
        use super::*;

        #[test]
        fn wall_time() {
            let offset = ZoneOffset::of_hours_and_minutes(-5, 0).unwrap();
            let then = OffsetDateTime::from_instant(Instant::at(1_234_567_890), offset).unwrap();
            assert_eq!(then.to_string(), "2009-02-13T18:31:30-05:00");
        }

        #[test]
        fn round_trip() {
            let offset = ZoneOffset::of_hours_and_minutes(5, 45).unwrap();
            let instant = Instant::at_nanos(-86_401, 5).unwrap();
            let then = OffsetDateTime::from_instant(instant, offset).unwrap();
            assert_eq!(then.to_instant(), Ok(instant));
        }

        #[test]
        fn projections() {
            let offset = ZoneOffset::of_hours_and_minutes(1, 0).unwrap();
            let then = OffsetDateTime::from_instant(Instant::at(0), offset).unwrap();
            assert_eq!(then.to_offset_date().to_string(), "1970-01-01+01:00");
            assert_eq!(then.to_offset_time().to_string(), "01:00:00+01:00");
        }
    }
}
