use std::sync::Arc;

use calendrical::{Duration, Error, Instant, LocalDate, Month, TimeZone, ZoneOffset};
use calendrical::{DatePiece, TimePiece};
use calendrical::clock::{self, Clock, TimeSource};
use calendrical::clock::source;

use proptest::prelude::*;


fn new_york_winter() -> TimeZone {
    TimeZone::fixed(ZoneOffset::of_hours_and_minutes(-5, 0).unwrap())
}


#[test]
fn today_depends_on_the_zone() {
    let instant = Instant::at(1_234_567_890);

    let utc = clock::fixed(instant, TimeZone::utc());
    let tokyo = clock::fixed(instant, TimeZone::fixed(ZoneOffset::of_hours_and_minutes(9, 0).unwrap()));

    assert_eq!(utc.today(), LocalDate::ymd(2009, Month::February, 13));
    assert_eq!(tokyo.today(), LocalDate::ymd(2009, Month::February, 14));
}

#[test]
fn offset_values_carry_the_offset() {
    let clock = clock::fixed(Instant::at(0), new_york_winter());

    let offset_date = clock.offset_date().unwrap();
    assert_eq!(offset_date.date(), LocalDate::ymd(1969, Month::December, 31).unwrap());
    assert_eq!(offset_date.offset().id(), "-05:00");
    assert_eq!(clock.offset_time().unwrap().to_string(), "19:00:00-05:00");
}

#[test]
fn year_end() {
    let midnight = LocalDate::ymd(2010, Month::December, 31).unwrap().to_epoch_day() * 86_400 + 86_399;
    let clock = clock::fixed(Instant::at(midnight), TimeZone::utc());

    assert_eq!(clock.tomorrow(), LocalDate::ymd(2011, Month::January, 1));
    assert_eq!(clock.time().unwrap().second(), 59);
}

#[test]
fn running_behind() {
    let base = source::fixed(Instant::at(600));
    let clock = clock::system_utc().with_source(source::offset(base, Duration::of(-600))).unwrap();
    assert_eq!(clock.date_time().unwrap().to_epoch_second(), 0);
}

#[test]
fn system_clock_is_recent() {
    let today = clock::system_utc().today().unwrap();
    assert!(today.year() >= 2020);
}

#[test]
fn clock_from_a_user_source() {
    #[derive(Debug)]
    struct Broken;

    impl TimeSource for Broken {
        fn instant(&self) -> calendrical::Result<Instant> {
            Err(Error::Unsupported("Broken::instant"))
        }
    }

    let clock = clock::TimeSourceClock::new(Arc::new(Broken), TimeZone::utc());
    assert_eq!(clock.today(), Err(Error::Unsupported("Broken::instant")));
    assert_eq!(clock.zoned_date_time().map(|_| ()), Err(Error::Unsupported("Broken::instant")));
}


proptest! {
    #[test]
    fn rounded_down(seconds in -10_000_000_000i64 .. 10_000_000_000, nanos in 0i64 .. 1_000_000_000) {
        let clock = clock::fixed(Instant::at_nanos(seconds, nanos).unwrap(), new_york_winter());

        let exact = clock.date_time().unwrap();
        let to_minute = clock.date_time_to_minute().unwrap();
        let to_second = clock.date_time_to_second().unwrap();

        prop_assert!(to_minute <= to_second);
        prop_assert!(to_second <= exact);
        prop_assert_eq!(to_minute.second(), 0);
        prop_assert_eq!(to_second.nanosecond(), 0);
        prop_assert_eq!(exact.to_epoch_second() - to_minute.to_epoch_second(), i64::from(exact.second()));
    }

    #[test]
    fn zoned_round_trip(seconds in -10_000_000_000i64 .. 10_000_000_000) {
        let clock = clock::fixed(Instant::at(seconds), new_york_winter());
        prop_assert_eq!(clock.zoned_date_time().unwrap().to_instant(), Ok(Instant::at(seconds)));
    }

    #[test]
    fn tomorrow_follows_today(seconds in -10_000_000_000i64 .. 10_000_000_000) {
        let clock = clock::fixed(Instant::at(seconds), TimeZone::utc());
        let today = clock.today().unwrap();
        prop_assert_eq!(clock.tomorrow().unwrap().to_epoch_day(), today.to_epoch_day() + 1);
        prop_assert_eq!(clock.yesterday().unwrap().to_epoch_day(), today.to_epoch_day() - 1);
    }
}
