use calendrical::{LocalDate, LocalDateTime, Month, Weekday, Year, YearMonth, MonthDay};
use calendrical::{DatePiece, TimePiece};


mod leap_years {
    use super::*;

    #[test]
    fn year_1600() {
        assert!(Year(1600).is_leap_year());
    }

    #[test]
    fn year_1900() {
        assert!(!Year(1900).is_leap_year());
    }

    #[test]
    fn year_2000() {
        assert!(Year(2000).is_leap_year());
    }

    #[test]
    fn year_2038() {
        assert!(!Year(2038).is_leap_year());
    }

    #[test]
    fn before_year_zero() {
        assert!(Year(-4).is_leap_year());
        assert!(!Year(-100).is_leap_year());
    }
}


mod ymd {
    use super::*;

    #[test]
    fn the_distant_past() {
        let date = LocalDate::ymd(7, Month::April, 1).unwrap();

        assert_eq!(date.year(),  7);
        assert_eq!(date.month(), Month::April);
        assert_eq!(date.day(),   1);
    }

    #[test]
    fn the_distant_future() {
        let date = LocalDate::ymd(1_048_576, Month::October, 13).unwrap();

        assert_eq!(date.year(),  1_048_576);
        assert_eq!(date.month(), Month::October);
        assert_eq!(date.day(),   13);
    }

    #[test]
    fn too_far_future() {
        assert!(LocalDate::ymd(1_000_000_000, Month::January, 1).is_err());
    }

    #[test]
    fn day_zero() {
        assert!(LocalDate::ymd(2015, Month::March, 0).is_err());
    }

    #[test]
    fn thirty_first_of_april() {
        assert!(LocalDate::ymd(2015, Month::April, 31).is_err());
    }

    #[test]
    fn yeardays() {
        assert_eq!(LocalDate::ymd(2015, Month::January, 1).unwrap().yearday(), 1);
        assert_eq!(LocalDate::ymd(2015, Month::December, 31).unwrap().yearday(), 365);
        assert_eq!(LocalDate::ymd(2016, Month::December, 31).unwrap().yearday(), 366);
    }

    #[test]
    fn month_boundaries() {
        for year in 1 .. 2058 {
            let jan_31 = LocalDate::ymd(year, Month::January, 31).unwrap();
            let feb_1 = LocalDate::ymd(year, Month::February, 1).unwrap();
            assert_eq!(jan_31.yearday() + 1, feb_1.yearday());
            assert_eq!(jan_31.plus_days(1).unwrap(), feb_1);
        }
    }
}


mod yd {
    use super::*;

    #[test]
    fn start_of_year() {
        let date = LocalDate::yd(2015, 1).unwrap();
        assert_eq!(date, LocalDate::ymd(2015, Month::January, 1).unwrap());
    }

    #[test]
    fn same_as_ymd() {
        for date in vec![
            LocalDate::ymd(1971, Month::January,   1).unwrap(),
            LocalDate::ymd(1989, Month::November, 10).unwrap(),
            LocalDate::ymd(1990, Month::July,      8).unwrap(),
            LocalDate::ymd(2001, Month::February,  3).unwrap(),
            LocalDate::ymd(2016, Month::December, 31).unwrap(),
        ] {
            let again = LocalDate::yd(date.year(), i64::from(date.yearday())).unwrap();
            assert_eq!(again, date);
        }
    }

    #[test]
    fn day_366_of_a_common_year() {
        assert!(LocalDate::yd(2015, 366).is_err());
        assert!(LocalDate::yd(2016, 366).is_ok());
    }
}


mod ywd {
    use super::*;

    #[test]
    fn week_one_starts_last_year() {
        let date = LocalDate::ywd(2009, 1, Weekday::Monday).unwrap();
        assert_eq!(date, LocalDate::ymd(2008, Month::December, 29).unwrap());
    }

    #[test]
    fn week_fifty_four() {
        assert!(LocalDate::ywd(2009, 54, Weekday::Monday).is_err());
    }
}


mod epoch_seconds {
    use super::*;

    #[test]
    fn a_long_time_ago() {
        let date = LocalDateTime::at(-1_000_000_000).unwrap();

        assert_eq!(date.year(),   1938);
        assert_eq!(date.month(),  Month::April);
        assert_eq!(date.day(),    24);
        assert_eq!(date.hour(),   22);
        assert_eq!(date.minute(), 13);
        assert_eq!(date.second(), 20);
    }

    #[test]
    fn unix_epoch() {
        let date = LocalDateTime::at(0).unwrap();

        assert_eq!(date.year(),    1970);
        assert_eq!(date.month(),   Month::January);
        assert_eq!(date.day(),     1);
        assert_eq!(date.hour(),    0);
        assert_eq!(date.weekday(), Weekday::Thursday);
    }

    #[test]
    fn billennium() {
        let date = LocalDateTime::at(1_000_000_000).unwrap();

        assert_eq!(date.year(),   2001);
        assert_eq!(date.month(),  Month::September);
        assert_eq!(date.day(),    9);
        assert_eq!(date.hour(),   1);
        assert_eq!(date.minute(), 46);
        assert_eq!(date.second(), 40);
    }

    #[test]
    fn year_2038_problem() {
        let date = LocalDateTime::at(0x7FFF_FFFF).unwrap();

        assert_eq!(date.year(),   2038);
        assert_eq!(date.month(),  Month::January);
        assert_eq!(date.day(),    19);
        assert_eq!(date.hour(),   3);
        assert_eq!(date.minute(), 14);
        assert_eq!(date.second(), 7);
    }

    #[test]
    fn the_end_of_time() {
        assert!(LocalDateTime::at(i64::MAX).is_err());
    }

    #[test]
    fn leap_day() {
        let date = LocalDateTime::at(1_456_704_000).unwrap();

        assert_eq!(date.year(),  2016);
        assert_eq!(date.month(), Month::February);
        assert_eq!(date.day(),   29);
    }

    #[test]
    fn back_again() {
        for seconds in &[ 0, 86_400, 86_400 * 365 * 2, 1_234_567_890, 54_321_234_567_890, -54_321_234_567_890 ] {
            let date = LocalDateTime::at(*seconds).unwrap();
            assert_eq!(date.to_epoch_second(), *seconds);
        }
    }
}


mod partials {
    use super::*;

    #[test]
    fn year_month_days() {
        let february = YearMonth::of(2012, Month::February).unwrap();
        assert_eq!(february.day_count(), 29);
        assert_eq!(february.day(29).unwrap(), LocalDate::ymd(2012, Month::February, 29).unwrap());
        assert!(february.day(30).is_err());
    }

    #[test]
    fn leap_month_day() {
        let leap_day = MonthDay::of(Month::February, 29).unwrap();
        assert!(leap_day.is_valid_year(2012));
        assert!(!leap_day.is_valid_year(2013));
        assert!(leap_day.at_year(2013).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(YearMonth::of(2010, Month::June).unwrap().to_string(), "2010-06");
        assert_eq!(MonthDay::of(Month::February, 29).unwrap().to_string(), "--02-29");
    }
}
