use calendrical::{DateTimeFields, Error, FieldRule, LocalDate, LocalDateTime, LocalTime, Month};
use calendrical::rules::{DAY_OF_WEEK, LOCAL_DATE, YEAR_MONTH};


fn friday_13th() -> DateTimeFields {
    DateTimeFields::of_pair(FieldRule::DayOfMonth, 13, FieldRule::DayOfWeek, 5).unwrap()
}


#[test]
fn matches_dates() {
    let unlucky = LocalDate::ymd(2009, Month::February, 13).unwrap();
    let lucky = LocalDate::ymd(2010, Month::February, 13).unwrap();

    assert!(friday_13th().matches_calendrical(&unlucky));
    assert!(!friday_13th().matches_calendrical(&lucky));
}

#[test]
fn matches_date_times() {
    let unlucky = LocalDateTime::new(LocalDate::ymd(2015, Month::November, 13).unwrap(), LocalTime::hm(23, 59).unwrap());
    assert!(friday_13th().matches_calendrical(&unlucky));
}

#[test]
fn unknown_fields_match_anything() {
    let fields = DateTimeFields::of(FieldRule::HourOfDay, 9).unwrap();
    let date = LocalDate::ymd(2009, Month::February, 13).unwrap();
    assert!(fields.matches_calendrical(&date));
}

#[test]
fn empty_matches_everything() {
    assert!(DateTimeFields::empty().matches_calendrical(&LocalTime::midnight()));
}

#[test]
fn coarsest_first() {
    let fields = DateTimeFields::of_map(vec![
        (FieldRule::NanoOfSecond, 5),
        (FieldRule::DayOfMonth, 30),
        (FieldRule::HourOfDay, 12),
        (FieldRule::Year, 2010),
        (FieldRule::AmPmOfDay, 1),
        (FieldRule::MonthOfYear, 6),
    ]).unwrap();

    let rules: Vec<FieldRule> = fields.field_rules().collect();
    assert_eq!(rules, vec![
        FieldRule::Year, FieldRule::MonthOfYear, FieldRule::DayOfMonth,
        FieldRule::AmPmOfDay, FieldRule::HourOfDay, FieldRule::NanoOfSecond,
    ]);
}

#[test]
fn display() {
    let fields = DateTimeFields::of_pair(FieldRule::MonthOfYear, 6, FieldRule::Year, 2010).unwrap();
    assert_eq!(fields.to_string(), "{Year=2010, MonthOfYear=6}");
    assert_eq!(format!("{:?}", DateTimeFields::empty()), "DateTimeFields({})");
}

#[test]
fn invalid_values() {
    assert_eq!(DateTimeFields::of(FieldRule::DayOfWeek, 0).unwrap_err(),
               Error::InvalidFieldValue { rule: "DayOfWeek", value: 0, min: 1, max: 7 });

    let fields = DateTimeFields::of(FieldRule::Year, 2010).unwrap();
    assert!(fields.with(FieldRule::MinuteOfHour, 60).is_err());
}

#[test]
fn immutable_changes() {
    let original = DateTimeFields::of(FieldRule::Year, 2010).unwrap();
    let changed = original.with(FieldRule::MonthOfYear, 6).unwrap();

    assert_eq!(original.len(), 1);
    assert_eq!(changed.len(), 2);
    assert_eq!(changed.with_field_removed(FieldRule::MonthOfYear), original);
}

#[test]
fn merging() {
    let first = DateTimeFields::of_pair(FieldRule::Year, 2010, FieldRule::MonthOfYear, 6).unwrap();
    let second = DateTimeFields::of_pair(FieldRule::MonthOfYear, 7, FieldRule::DayOfMonth, 1).unwrap();
    let merged = first.with_fields(&second);

    assert_eq!(merged.get_quiet(FieldRule::Year), Some(2010));
    assert_eq!(merged.get_quiet(FieldRule::MonthOfYear), Some(7));
    assert_eq!(merged.get_quiet(FieldRule::DayOfMonth), Some(1));
}

#[test]
fn derived_lookups() {
    let fields = DateTimeFields::of_pair(FieldRule::Year, 2010, FieldRule::MonthOfYear, 6).unwrap();

    assert_eq!(fields.get(FieldRule::QuarterOfYear), Some(2));
    assert_eq!(YEAR_MONTH.get_value(&fields).map(|ym| ym.to_string()), Some("2010-06".to_owned()));
    assert_eq!(LOCAL_DATE.get_value(&fields), None);
    assert_eq!(DAY_OF_WEEK.get_value(&fields), None);
}

#[test]
fn get_int_is_direct_only() {
    let fields = DateTimeFields::of(FieldRule::MonthOfYear, 6).unwrap();
    assert_eq!(fields.get_int(FieldRule::MonthOfYear), Ok(6));

    let error = fields.get_int(FieldRule::QuarterOfYear).unwrap_err();
    assert_eq!(error.to_string(), "rule QuarterOfYear is not supported by {MonthOfYear=6}");
}

#[test]
fn to_map() {
    let fields = friday_13th();
    let map = fields.to_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&FieldRule::DayOfWeek], 5);
}
