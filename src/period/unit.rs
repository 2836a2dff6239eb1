//! Named units of time, and the equivalences between them.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::period::PeriodField;


/// A **period unit** is a named unit of time, such as “Months” or
/// “Seconds”.
///
/// Every unit carries an estimated duration, which is what units get
/// ordered by, and a list of the periods in *smaller* units that it is
/// equivalent to. A unit only ever knows about units that existed before
/// it was made, so “Minutes” can be converted into “Seconds”, but never
/// the other way around.
///
/// Units are cheap to clone: the name and equivalence list are shared.
#[derive(Clone)]
pub struct PeriodUnit(Arc<Inner>);

struct Inner {
    name: String,
    equivalents: Vec<PeriodField>,
    estimated_duration: Duration,
}

impl PeriodUnit {

    /// Creates a base unit, one with no equivalents, from its name and an
    /// estimate of how long it lasts.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{Duration, PeriodUnit};
    ///
    /// let seconds = PeriodUnit::base("Seconds", Duration::of(1)).unwrap();
    /// assert_eq!(seconds.name(), "Seconds");
    /// assert!(PeriodUnit::base("Never", Duration::zero()).is_err());
    /// ```
    pub fn base(name: &str, estimated_duration: Duration) -> Result<Self> {
        check_name(name)?;

        if estimated_duration.is_negative() || estimated_duration.is_zero() {
            return Err(Error::InvalidArgument(format!("estimated duration of {} must be positive, was {}", name, estimated_duration)));
        }

        Ok(Self::from_parts(name, Vec::new(), estimated_duration))
    }

    /// Creates a unit that is equivalent to a whole number of some other,
    /// smaller, unit.
    ///
    /// The new unit inherits every equivalent of the smaller unit, scaled
    /// up, so a chain such as Hours → Minutes → Seconds gets flattened
    /// here and never has to be walked again.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calendrical::{Duration, PeriodField, PeriodUnit};
    ///
    /// let seconds = PeriodUnit::base("Seconds", Duration::of(1)).unwrap();
    /// let minutes = PeriodUnit::derived("Minutes", PeriodField::of(60, &seconds)).unwrap();
    /// let hours = PeriodUnit::derived("Hours", PeriodField::of(60, &minutes)).unwrap();
    ///
    /// assert_eq!(hours.equivalent_period(&seconds), Some(PeriodField::of(3600, &seconds)));
    /// assert!(!seconds.is_convertible_to(&minutes));
    /// ```
    pub fn derived(name: &str, equivalent: PeriodField) -> Result<Self> {
        check_name(name)?;

        let amount = equivalent.amount();
        if amount <= 0 {
            return Err(Error::InvalidArgument(format!("equivalent period of {} must be positive, was {}", name, equivalent)));
        }

        let estimated_duration = equivalent.to_estimated_duration()?;

        let inherited = equivalent.unit().equivalent_periods();
        let mut equivalents = Vec::with_capacity(inherited.len() + 1);
        for period in inherited {
            equivalents.push(period.multiplied_by(amount)?);
        }
        equivalents.insert(0, equivalent);

        Ok(Self::from_parts(name, equivalents, estimated_duration))
    }

    fn from_parts(name: &str, equivalents: Vec<PeriodField>, estimated_duration: Duration) -> Self {
        PeriodUnit(Arc::new(Inner {
            name: name.to_owned(),
            equivalents,
            estimated_duration,
        }))
    }

    /// The name of this unit, such as “Days”.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// An estimate of how long one of this unit lasts. For units such as
    /// months, which vary in length, this is an average.
    pub fn estimated_duration(&self) -> Duration {
        self.0.estimated_duration
    }

    /// Every period this unit is equivalent to, from the largest unit to
    /// the smallest. The unit itself is never in this list.
    pub fn equivalent_periods(&self) -> &[PeriodField] {
        &self.0.equivalents
    }

    /// Whether one of this unit can be expressed exactly in the other
    /// unit.
    pub fn is_convertible_to(&self, unit: &PeriodUnit) -> bool {
        self == unit || self.0.equivalents.iter().any(|e| e.unit() == unit)
    }

    /// Returns the period, in the required unit, that one of this unit is
    /// equivalent to, if there is one.
    ///
    /// A unit is always equivalent to one of itself.
    pub fn equivalent_period(&self, required: &PeriodUnit) -> Option<PeriodField> {
        match self.0.equivalents.iter().find(|e| e.unit() == required) {
            Some(period)                => Some(period.clone()),
            None if self == required    => Some(PeriodField::of(1, self)),
            None                        => None,
        }
    }

    /// The smallest unit this unit is known to be equivalent to, or this
    /// unit itself if it has no equivalents.
    pub fn base_unit(&self) -> PeriodUnit {
        match self.0.equivalents.last() {
            Some(period) => period.unit().clone(),
            None         => self.clone(),
        }
    }

    /// Creates a period of the given amount of this unit.
    pub fn field(&self, amount: i64) -> PeriodField {
        PeriodField::of(amount, self)
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        Err(Error::InvalidArgument("period unit name must not be empty".into()))
    }
    else {
        Ok(())
    }
}

// Two units are only compared on their first equivalent, rather than the
// whole list. Every other equivalent is a scaled copy of the first unit’s
// own list, so the first one (plus the name and duration) is enough.

impl PartialEq for PeriodUnit {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }

        self.0.name == other.0.name
            && self.0.estimated_duration == other.0.estimated_duration
            && self.0.equivalents.len() == other.0.equivalents.len()
            && self.0.equivalents.first() == other.0.equivalents.first()
    }
}

impl Eq for PeriodUnit {}

impl Hash for PeriodUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
        self.0.estimated_duration.hash(state);
    }
}

impl PartialOrd for PeriodUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.estimated_duration.cmp(&other.0.estimated_duration)
            .then_with(|| self.0.name.cmp(&other.0.name))
            .then_with(|| self.0.equivalents.len().cmp(&other.0.equivalents.len()))
            .then_with(|| self.0.equivalents.first().cmp(&other.0.equivalents.first()))
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PeriodUnit({})", self.0.name)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn seconds() -> PeriodUnit {
        PeriodUnit::base("Seconds", Duration::of(1)).unwrap()
    }

    fn minutes() -> PeriodUnit {
        PeriodUnit::derived("Minutes", PeriodField::of(60, &seconds())).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn base_has_no_equivalents() {
            assert!(seconds().equivalent_periods().is_empty());
        }

        #[test]
        fn negative_duration() {
            assert!(PeriodUnit::base("Backwards", Duration::of(-1)).is_err());
        }

        #[test]
        fn empty_name() {
            assert!(PeriodUnit::base("", Duration::of(1)).is_err());
        }

        #[test]
        fn zero_equivalent() {
            assert!(PeriodUnit::derived("Nothing", PeriodField::of(0, &seconds())).is_err());
        }

        #[test]
        fn negative_equivalent() {
            assert!(PeriodUnit::derived("Less", PeriodField::of(-5, &seconds())).is_err());
        }

        #[test]
        fn derived_duration() {
            assert_eq!(minutes().estimated_duration(), Duration::of(60));
        }

        #[test]
        fn flattened_equivalents() {
            let hours = PeriodUnit::derived("Hours", PeriodField::of(60, &minutes())).unwrap();
            assert_eq!(hours.equivalent_periods(), &[
                PeriodField::of(60, &minutes()),
                PeriodField::of(3600, &seconds()),
            ]);
        }

        #[test]
        fn overflowing_equivalent() {
            let huge = PeriodUnit::derived("Huge", PeriodField::of(i64::MAX, &minutes()));
            assert!(huge.is_err());
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn one_way() {
            assert!(minutes().is_convertible_to(&seconds()));
            assert!(!seconds().is_convertible_to(&minutes()));
        }

        #[test]
        fn to_itself() {
            assert!(seconds().is_convertible_to(&seconds()));
            assert_eq!(seconds().equivalent_period(&seconds()), Some(PeriodField::of(1, &seconds())));
        }

        #[test]
        fn missing() {
            assert_eq!(seconds().equivalent_period(&minutes()), None);
        }

        #[test]
        fn base_unit() {
            let hours = PeriodUnit::derived("Hours", PeriodField::of(60, &minutes())).unwrap();
            assert_eq!(hours.base_unit(), seconds());
            assert_eq!(seconds().base_unit(), seconds());
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn by_duration() {
            let aardvarks = PeriodUnit::base("Aardvarks", Duration::of(100)).unwrap();
            assert!(seconds() < aardvarks);
            assert!(minutes() < aardvarks);
        }

        #[test]
        fn by_name() {
            let a = PeriodUnit::base("A", Duration::of(1)).unwrap();
            let b = PeriodUnit::base("B", Duration::of(1)).unwrap();
            assert!(a < b);
        }

        #[test]
        fn by_equivalents() {
            let plain = PeriodUnit::base("Minutes", Duration::of(60)).unwrap();
            assert!(plain < minutes());
            assert_ne!(plain, minutes());
        }
    }

    #[test]
    fn equal_by_value() {
        assert_eq!(minutes(), minutes());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", minutes()), "PeriodUnit(Minutes)");
    }
}
