use calendrical::{Instant, LocalDate, LocalDateTime, LocalTime, Month, OffsetDateTime, TimeZone, ZoneOffset, ZonedDateTime};
use calendrical::TimePiece;
use calendrical::cal::zone::{TransitionZoneRules, ZoneOffsetInfo, ZoneResolvers};


fn local(month: Month, day: i8, hour: i8, minute: i8) -> LocalDateTime {
    LocalDateTime::new(LocalDate::ymd(2010, month, day).unwrap(), LocalTime::hm(hour, minute).unwrap())
}

fn bst() -> ZoneOffset {
    ZoneOffset::of_hours_and_minutes(1, 0).unwrap()
}

/// British time for 2010: an hour forward at 01:00 UTC on the 28th of
/// March, and back again at 01:00 UTC on the 31st of October.
fn london() -> TimeZone {
    let spring = Instant::at(local(Month::March, 28, 1, 0).to_epoch_second());
    let autumn = Instant::at(local(Month::October, 31, 1, 0).to_epoch_second());

    let rules = TransitionZoneRules::new(ZoneOffset::utc(), vec![ (spring, bst()), (autumn, ZoneOffset::utc()) ]).unwrap();
    TimeZone::new("Europe/London", rules)
}


mod offsets {
    use super::*;

    #[test]
    fn ids() {
        assert_eq!(ZoneOffset::of_hours_minutes_seconds(-1, -30, -5).unwrap().id(), "-01:30:05");
        assert_eq!(ZoneOffset::of_hours_and_minutes(0, 0).unwrap().id(), "Z");
        assert_eq!(ZoneOffset::of_id("-08").unwrap().total_seconds(), -8 * 3600);
        assert_eq!(ZoneOffset::of_id("+01:02:03").unwrap().total_seconds(), 3723);
    }

    #[test]
    fn mixed_signs() {
        assert!(ZoneOffset::of_hours_and_minutes(1, -30).is_err());
    }

    #[test]
    fn out_of_range() {
        assert!(ZoneOffset::of_hours_and_minutes(18, 1).is_err());
        assert!(ZoneOffset::of_hours_and_minutes(-19, 0).is_err());
        assert!(ZoneOffset::of_id("+19:00").is_err());
    }

    #[test]
    fn shared() {
        let first = ZoneOffset::of_total_seconds(5 * 3600 + 1800).unwrap();
        let second = ZoneOffset::of_id("+05:30").unwrap();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn parts() {
        let offset = ZoneOffset::of_id("-09:45").unwrap();
        assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (-9, -45, 0));
    }
}


mod transitions {
    use super::*;

    #[test]
    fn offsets_at_instants() {
        let rules = london();
        let rules = rules.rules();

        assert_eq!(rules.offset_at(Instant::at(local(Month::January, 1, 0, 0).to_epoch_second())), ZoneOffset::utc());
        assert_eq!(rules.offset_at(Instant::at(local(Month::July, 1, 0, 0).to_epoch_second())), bst());
        assert_eq!(rules.offset_at(Instant::at(local(Month::March, 28, 1, 0).to_epoch_second())), bst());
        assert!(!rules.is_fixed());
    }

    #[test]
    fn offset_info() {
        let zone = london();

        assert_eq!(zone.rules().offset_info(local(Month::March, 28, 0, 59)), ZoneOffsetInfo::Valid(ZoneOffset::utc()));
        assert!(matches!(zone.rules().offset_info(local(Month::March, 28, 1, 30)), ZoneOffsetInfo::Gap { .. }));
        assert!(matches!(zone.rules().offset_info(local(Month::October, 31, 1, 30)), ZoneOffsetInfo::Overlap { .. }));
        assert_eq!(zone.rules().offset_info(local(Month::October, 31, 2, 0)), ZoneOffsetInfo::Valid(ZoneOffset::utc()));
    }

    #[test]
    fn out_of_order() {
        let rules = TransitionZoneRules::new(ZoneOffset::utc(), vec![ (Instant::at(100), bst()), (Instant::at(50), ZoneOffset::utc()) ]);
        assert!(rules.is_err());
    }
}


mod resolving {
    use super::*;

    #[test]
    fn gap_after() {
        let zdt = ZonedDateTime::of(local(Month::March, 28, 1, 30), london(), ZoneResolvers::post_transition()).unwrap();
        assert_eq!((zdt.hour(), zdt.minute()), (2, 0));
        assert_eq!(zdt.offset(), &bst());
    }

    #[test]
    fn gap_before() {
        let zdt = ZonedDateTime::of(local(Month::March, 28, 1, 30), london(), ZoneResolvers::pre_transition()).unwrap();
        assert_eq!((zdt.hour(), zdt.minute(), zdt.second()), (0, 59, 59));
        assert_eq!(zdt.nanosecond(), 999_999_999);
        assert!(zdt.offset().is_utc());
    }

    #[test]
    fn overlap_choices() {
        let time = local(Month::October, 31, 1, 30);

        let earlier = ZonedDateTime::of(time, london(), ZoneResolvers::post_gap_pre_overlap()).unwrap();
        let later = ZonedDateTime::of(time, london(), ZoneResolvers::post_transition()).unwrap();

        assert_eq!(earlier.offset(), &bst());
        assert!(later.offset().is_utc());
        assert_eq!(later.to_instant().unwrap().seconds() - earlier.to_instant().unwrap().seconds(), 3600);
    }

    #[test]
    fn retained() {
        let time = local(Month::October, 31, 1, 30);
        let kept = ZonedDateTime::resolve(time, london(), ZoneResolvers::retain_offset(), Some(&bst())).unwrap();
        let unknown = ZonedDateTime::resolve(time, london(), ZoneResolvers::retain_offset(), None).unwrap();

        assert_eq!(kept.offset(), &bst());
        assert!(unknown.offset().is_utc());
    }

    #[test]
    fn strict() {
        assert!(ZonedDateTime::of(local(Month::March, 28, 1, 30), london(), ZoneResolvers::strict()).is_err());
        assert!(ZonedDateTime::of(local(Month::October, 31, 1, 30), london(), ZoneResolvers::strict()).is_err());
        assert!(ZonedDateTime::of(local(Month::June, 1, 12, 0), london(), ZoneResolvers::strict()).is_ok());
    }

    #[test]
    fn display() {
        let zdt = ZonedDateTime::of(local(Month::June, 1, 12, 0), london(), ZoneResolvers::strict()).unwrap();
        assert_eq!(zdt.to_string(), "2010-06-01T12:00:00+01:00[Europe/London]");
    }
}


mod instants {
    use super::*;

    #[test]
    fn same_instant_different_offsets() {
        let instant = Instant::at(1_234_567_890);
        let utc = OffsetDateTime::from_instant(instant, ZoneOffset::utc()).unwrap();
        let ahead = OffsetDateTime::from_instant(instant, bst()).unwrap();

        assert_eq!(utc.hour() + 1, ahead.hour());
        assert_eq!(utc.to_instant(), ahead.to_instant());
        assert_ne!(utc, ahead);
    }

    #[test]
    fn zoned_from_instant() {
        let summer = Instant::at(local(Month::July, 1, 11, 0).to_epoch_second());
        let zdt = ZonedDateTime::from_instant(summer, london()).unwrap();
        assert_eq!(zdt.hour(), 12);
        assert_eq!(zdt.zone().id(), "Europe/London");
    }
}


#[cfg(feature = "parse")]
mod parsing {
    use super::*;

    #[test]
    fn date_time() {
        let parsed: LocalDateTime = "2001-02-03T04:05:06.789".parse().unwrap();
        assert_eq!(parsed.date(), LocalDate::ymd(2001, Month::February, 3).unwrap());
        assert_eq!(parsed.time(), LocalTime::hms_nano(4, 5, 6, 789_000_000).unwrap());
    }

    #[test]
    fn offset_date_time() {
        let parsed: OffsetDateTime = "2010-06-30T12:00:00+02:00".parse().unwrap();
        assert_eq!(parsed.offset().total_seconds(), 7200);
        assert_eq!(parsed.to_string(), "2010-06-30T12:00:00+02:00");
    }

    #[test]
    fn offsets() {
        let parsed: ZoneOffset = "+0530".parse().unwrap();
        assert_eq!(parsed.id(), "+05:30");
        assert!("05:30".parse::<ZoneOffset>().is_err());
    }

    #[test]
    fn garbage() {
        assert!("not a date".parse::<LocalDate>().is_err());
        assert!("25:00:00".parse::<LocalTime>().is_err());
    }
}
