//! The ISO-8601 calendar system, and the units of time it is made of.

use std::fmt;

use lazy_static::lazy_static;

use crate::duration::Duration;
use crate::error::Result;
use crate::period::{PeriodField, PeriodUnit};


/// The canonical units, built the first time any of them is asked for.
struct Units {
    nanos: PeriodUnit,
    micros: PeriodUnit,
    millis: PeriodUnit,
    seconds: PeriodUnit,
    minutes: PeriodUnit,
    hours: PeriodUnit,
    twelve_hours: PeriodUnit,
    days: PeriodUnit,
    weeks: PeriodUnit,
    months: PeriodUnit,
    quarters: PeriodUnit,
    years: PeriodUnit,
    decades: PeriodUnit,
    centuries: PeriodUnit,
    millennia: PeriodUnit,
}

/// The average length of a month in the Gregorian 400-year cycle, which
/// is 365.2425 days divided by twelve.
const SECONDS_IN_AVERAGE_MONTH: i64 = 31_556_952 / 12;

impl Units {
    fn build() -> Result<Self> {
        let nanos        = PeriodUnit::base("Nanos", Duration::of_nanos(0, 1)?)?;
        let micros       = PeriodUnit::derived("Micros", PeriodField::of(1000, &nanos))?;
        let millis       = PeriodUnit::derived("Millis", PeriodField::of(1000, &micros))?;
        let seconds      = PeriodUnit::derived("Seconds", PeriodField::of(1000, &millis))?;
        let minutes      = PeriodUnit::derived("Minutes", PeriodField::of(60, &seconds))?;
        let hours        = PeriodUnit::derived("Hours", PeriodField::of(60, &minutes))?;
        let twelve_hours = PeriodUnit::derived("12Hours", PeriodField::of(12, &hours))?;
        let days         = PeriodUnit::derived("Days", PeriodField::of(24, &hours))?;
        let weeks        = PeriodUnit::derived("Weeks", PeriodField::of(7, &days))?;

        // Months have no fixed length, so they start a chain of their own.
        let months       = PeriodUnit::base("Months", Duration::of(SECONDS_IN_AVERAGE_MONTH))?;
        let quarters     = PeriodUnit::derived("Quarters", PeriodField::of(3, &months))?;
        let years        = PeriodUnit::derived("Years", PeriodField::of(12, &months))?;
        let decades      = PeriodUnit::derived("Decades", PeriodField::of(10, &years))?;
        let centuries    = PeriodUnit::derived("Centuries", PeriodField::of(10, &decades))?;
        let millennia    = PeriodUnit::derived("Millennia", PeriodField::of(10, &centuries))?;

        Ok(Self {
            nanos, micros, millis, seconds, minutes, hours, twelve_hours, days, weeks,
            months, quarters, years, decades, centuries, millennia,
        })
    }
}

lazy_static! {
    static ref UNITS: Units = Units::build().expect("the ISO unit table is well-formed");
}


/// The **ISO chronology** is the proleptic ISO-8601 calendar system:
/// Gregorian leap years, applied backwards forever, with weeks that
/// start on Monday.
///
/// This is the only chronology there is, so it’s a unit type that just
/// hands out its period units.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub struct ISOChronology;

impl ISOChronology {

    pub fn name(self) -> &'static str {
        "ISO"
    }

    pub fn nanos() -> PeriodUnit { UNITS.nanos.clone() }
    pub fn micros() -> PeriodUnit { UNITS.micros.clone() }
    pub fn millis() -> PeriodUnit { UNITS.millis.clone() }
    pub fn seconds() -> PeriodUnit { UNITS.seconds.clone() }
    pub fn minutes() -> PeriodUnit { UNITS.minutes.clone() }
    pub fn hours() -> PeriodUnit { UNITS.hours.clone() }

    /// Half a day, which is what the AM/PM field counts in.
    pub fn twelve_hours() -> PeriodUnit { UNITS.twelve_hours.clone() }

    pub fn days() -> PeriodUnit { UNITS.days.clone() }
    pub fn weeks() -> PeriodUnit { UNITS.weeks.clone() }
    pub fn months() -> PeriodUnit { UNITS.months.clone() }
    pub fn quarters() -> PeriodUnit { UNITS.quarters.clone() }
    pub fn years() -> PeriodUnit { UNITS.years.clone() }
    pub fn decades() -> PeriodUnit { UNITS.decades.clone() }
    pub fn centuries() -> PeriodUnit { UNITS.centuries.clone() }
    pub fn millennia() -> PeriodUnit { UNITS.millennia.clone() }
}

impl fmt::Display for ISOChronology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn units_ordered_by_length() {
        let units = [
            ISOChronology::nanos(), ISOChronology::micros(), ISOChronology::millis(),
            ISOChronology::seconds(), ISOChronology::minutes(), ISOChronology::hours(),
            ISOChronology::twelve_hours(), ISOChronology::days(), ISOChronology::weeks(),
            ISOChronology::months(), ISOChronology::quarters(), ISOChronology::years(),
            ISOChronology::decades(), ISOChronology::centuries(), ISOChronology::millennia(),
        ];

        for pair in units.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn seconds_in_a_day() {
        let day = ISOChronology::days();
        assert_eq!(day.equivalent_period(&ISOChronology::seconds()), Some(ISOChronology::seconds().field(86_400)));
        assert_eq!(day.base_unit(), ISOChronology::nanos());
    }

    #[test]
    fn months_in_a_millennium() {
        let millennium = ISOChronology::millennia();
        assert_eq!(millennium.equivalent_period(&ISOChronology::months()), Some(ISOChronology::months().field(12_000)));
        assert!(!millennium.is_convertible_to(&ISOChronology::days()));
    }

    #[test]
    fn year_is_average() {
        assert_eq!(ISOChronology::years().estimated_duration(), Duration::of(31_556_952));
    }
}
