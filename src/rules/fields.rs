//! A set of field values, such as the pieces of a partly-parsed date.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::rules::{Calendrical, FieldRule, RuleKind, Value};


lazy_static! {
    static ref EMPTY: DateTimeFields = DateTimeFields { map: Arc::new(BTreeMap::new()) };
}


/// A **date-time fields** value maps field rules to integer values, such
/// as “the year is 2010 and the month is 6”.
///
/// Each value is checked against its own rule’s range on the way in, but
/// nothing checks the fields against each other: the 31st of February can
/// sit there quite happily until something tries to make a date out of it.
///
/// Fields are kept coarsest-first, so the year comes before the month.
/// Nothing is ever changed in place; every operation hands back a new
/// set, or the same one when there was nothing to change.
#[derive(Clone)]
pub struct DateTimeFields {
    map: Arc<BTreeMap<Reverse<FieldRule>, i64>>,
}

impl DateTimeFields {

    /// The set with no fields in it. There is only ever one of these.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// A set holding just the one field.
    ///
    /// ```rust
    /// use calendrical::{DateTimeFields, FieldRule};
    ///
    /// let fields = DateTimeFields::of(FieldRule::Year, 2010).unwrap();
    /// assert_eq!(fields.get_int(FieldRule::Year), Ok(2010));
    ///
    /// assert!(DateTimeFields::of(FieldRule::MonthOfYear, 13).is_err());
    /// ```
    pub fn of(rule: FieldRule, value: i64) -> Result<Self> {
        Self::of_map(vec![ (rule, value) ])
    }

    /// A set holding two fields.
    pub fn of_pair(rule1: FieldRule, value1: i64, rule2: FieldRule, value2: i64) -> Result<Self> {
        Self::of_map(vec![ (rule1, value1), (rule2, value2) ])
    }

    /// A set holding every field in the map, or the empty set if there
    /// aren’t any. If a rule appears twice, the last value wins.
    pub fn of_map<I>(fields: I) -> Result<Self>
    where I: IntoIterator<Item = (FieldRule, i64)>
    {
        let mut map = BTreeMap::new();

        for (rule, value) in fields {
            let value = rule.check_value(value)?;
            let _ = map.insert(Reverse(rule), value);
        }

        Ok(Self::from_map(map))
    }

    fn from_map(map: BTreeMap<Reverse<FieldRule>, i64>) -> Self {
        if map.is_empty() {
            Self::empty()
        }
        else {
            Self { map: Arc::new(map) }
        }
    }

    /// Returns a set with the field added, or replaced if it was already
    /// there.
    pub fn with(&self, rule: FieldRule, value: i64) -> Result<Self> {
        let value = rule.check_value(value)?;

        if self.get_quiet(rule) == Some(value) {
            return Ok(self.clone());
        }

        let mut map = (*self.map).clone();
        let _ = map.insert(Reverse(rule), value);
        Ok(Self::from_map(map))
    }

    /// Returns a set without the field. If it wasn’t there, this is the
    /// very same set.
    ///
    /// ```rust
    /// use calendrical::{DateTimeFields, FieldRule};
    ///
    /// let fields = DateTimeFields::of(FieldRule::Year, 2010).unwrap();
    /// assert!(fields.with_field_removed(FieldRule::DayOfMonth).ptr_eq(&fields));
    /// assert!(fields.with_field_removed(FieldRule::Year).ptr_eq(&DateTimeFields::empty()));
    /// ```
    pub fn with_field_removed(&self, rule: FieldRule) -> Self {
        if !self.contains(rule) {
            return self.clone();
        }

        let mut map = (*self.map).clone();
        let _ = map.remove(&Reverse(rule));
        Self::from_map(map)
    }

    /// Merges in the other set’s fields, which win whenever both sets have
    /// the same rule.
    pub fn with_fields(&self, other: &Self) -> Self {
        if other.is_empty() || self == other {
            return self.clone();
        }

        let mut map = (*self.map).clone();
        map.extend(other.map.iter().map(|(rule, value)| (*rule, *value)));
        Self::from_map(map)
    }

    /// Whether none of these fields disagree with the calendrical. A field
    /// the calendrical has no value for can’t disagree.
    pub fn matches_calendrical(&self, calendrical: &dyn Calendrical) -> bool {
        self.iter().all(|(rule, value)| {
            match rule.rule().get_value(calendrical) {
                Some(actual) => actual == value,
                None         => true,
            }
        })
    }

    /// The value for the rule, deriving it from the other fields if it
    /// isn’t here directly.
    ///
    /// ```rust
    /// use calendrical::{DateTimeFields, FieldRule};
    ///
    /// let fields = DateTimeFields::of(FieldRule::MonthOfYear, 8).unwrap();
    /// assert_eq!(fields.get(FieldRule::QuarterOfYear), Some(3));
    /// assert_eq!(fields.get_quiet(FieldRule::QuarterOfYear), None);
    /// ```
    pub fn get(&self, rule: FieldRule) -> Option<i64> {
        rule.rule().get_value(self)
    }

    /// The value for the rule if it’s here directly, and an error if it
    /// isn’t.
    pub fn get_int(&self, rule: FieldRule) -> Result<i64> {
        self.get_quiet(rule)
            .ok_or_else(|| Error::UnsupportedRule { rule: rule.name(), target: self.to_string() })
    }

    /// The value for the rule if it’s here directly.
    pub fn get_quiet(&self, rule: FieldRule) -> Option<i64> {
        self.map.get(&Reverse(rule)).cloned()
    }

    pub fn contains(&self, rule: FieldRule) -> bool {
        self.map.contains_key(&Reverse(rule))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The fields and their values, coarsest first.
    pub fn iter(&self) -> impl Iterator<Item = (FieldRule, i64)> + '_ {
        self.map.iter().map(|(rule, value)| (rule.0, *value))
    }

    /// The rules, coarsest first.
    pub fn field_rules(&self) -> impl Iterator<Item = FieldRule> + '_ {
        self.map.keys().map(|rule| rule.0)
    }

    pub fn to_map(&self) -> HashMap<FieldRule, i64> {
        self.iter().collect()
    }

    /// Whether both sets share the same storage, which is only ever the
    /// case when one was handed back unchanged from the other.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.map, &other.map)
    }
}

impl PartialEq for DateTimeFields {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.map == other.map
    }
}

impl Eq for DateTimeFields {}

impl fmt::Display for DateTimeFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;

        for (index, (rule, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{}={}", rule, value)?;
        }

        f.write_str("}")
    }
}

impl fmt::Debug for DateTimeFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateTimeFields({})", self)
    }
}

impl Calendrical for DateTimeFields {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::Field(rule) => self.get_quiet(rule).map(Value::Field),
            _                     => None,
        }
    }
}
