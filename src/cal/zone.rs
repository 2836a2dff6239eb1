//! Time zones, their rules, and datetimes that live in them.
//!
//! A zone is an ID paired with a set of **rules** that say what offset is
//! in effect at any instant. Going the other way, from a wall-clock time
//! to an instant, can have zero answers (in a gap, when the clocks go
//! forward) or two (in an overlap, when they go back), so a **resolver**
//! strategy picks one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday};
use crate::cal::offset::{ZoneOffset, OffsetDateTime};
use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::rules::{Calendrical, RuleKind, Value};


/// What a zone says about one particular local date-time.
#[derive(PartialEq, Debug, Clone)]
pub enum ZoneOffsetInfo {

    /// The local date-time happens exactly once, at this offset.
    Valid(ZoneOffset),

    /// The local date-time never happens, because the clocks jumped
    /// forward over it at the transition instant.
    Gap {
        transition: Instant,
        before: ZoneOffset,
        after: ZoneOffset,
    },

    /// The local date-time happens twice, because the clocks went back
    /// over it at the transition instant.
    Overlap {
        transition: Instant,
        earlier: ZoneOffset,
        later: ZoneOffset,
    },
}

impl ZoneOffsetInfo {

    /// Whether the local date-time really does happen at this offset.
    pub fn is_valid_offset(&self, offset: &ZoneOffset) -> bool {
        match self {
            ZoneOffsetInfo::Valid(valid)                    => valid == offset,
            ZoneOffsetInfo::Gap { .. }                      => false,
            ZoneOffsetInfo::Overlap { earlier, later, .. }  => earlier == offset || later == offset,
        }
    }
}


/// The rules of a time zone, which map instants to offsets and back.
pub trait ZoneRules: fmt::Debug + Send + Sync {

    /// The offset in effect at the given instant. There’s always exactly
    /// one of these.
    fn offset_at(&self, instant: Instant) -> ZoneOffset;

    /// The offsets the given wall-clock time could be at.
    fn offset_info(&self, local: LocalDateTime) -> ZoneOffsetInfo;

    /// Whether this zone never changes offset.
    fn is_fixed(&self) -> bool {
        false
    }
}

/// Rules for a zone that is always at the same offset.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedZoneRules {
    offset: ZoneOffset,
}

impl FixedZoneRules {
    pub fn new(offset: ZoneOffset) -> Self {
        Self { offset }
    }
}

impl ZoneRules for FixedZoneRules {
    fn offset_at(&self, _instant: Instant) -> ZoneOffset {
        self.offset.clone()
    }

    fn offset_info(&self, _local: LocalDateTime) -> ZoneOffsetInfo {
        ZoneOffsetInfo::Valid(self.offset.clone())
    }

    fn is_fixed(&self) -> bool {
        true
    }
}


/// Rules made from a list of transitions, separated by the instants at
/// which the offset changes over. There will always be one more offset
/// than transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct TransitionZoneRules {

    /// The offset in effect up until the first transition instant, if
    /// there is one.
    first: ZoneOffset,

    /// Each transition instant, along with the offset that begins there,
    /// in ascending order.
    rest: Vec<(Instant, ZoneOffset)>,
}

impl TransitionZoneRules {

    /// Creates the rules, checking that the transitions are in order.
    pub fn new(first: ZoneOffset, rest: Vec<(Instant, ZoneOffset)>) -> Result<Self> {
        if rest.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(Error::InvalidArgument("zone transitions must be in strictly ascending order".into()));
        }

        Ok(Self { first, rest })
    }
}

impl ZoneRules for TransitionZoneRules {
    fn offset_at(&self, instant: Instant) -> ZoneOffset {
        match self.rest.iter().take_while(|t| t.0 <= instant).last() {
            None     => self.first.clone(),
            Some(zd) => zd.1.clone(),
        }
    }

    fn offset_info(&self, local: LocalDateTime) -> ZoneOffsetInfo {
        let local_seconds = local.to_epoch_second();
        let mut current = &self.first;

        for (transition, next) in &self.rest {
            let before = i64::from(current.total_seconds());
            let after = i64::from(next.total_seconds());

            // The wall clock reads transition+before just as it ends, and
            // transition+after just as the next span starts; anything
            // between the two is either skipped or repeated.
            let start = transition.seconds().saturating_add(before.min(after));
            let end = transition.seconds().saturating_add(before.max(after));

            if local_seconds < start {
                return ZoneOffsetInfo::Valid(current.clone());
            }

            if local_seconds < end {
                return if after > before {
                    ZoneOffsetInfo::Gap { transition: *transition, before: current.clone(), after: next.clone() }
                }
                else {
                    ZoneOffsetInfo::Overlap { transition: *transition, earlier: current.clone(), later: next.clone() }
                };
            }

            current = next;
        }

        ZoneOffsetInfo::Valid(current.clone())
    }

    fn is_fixed(&self) -> bool {
        self.rest.is_empty()
    }
}


/// A **time zone**: an ID, such as `Europe/London` or `+02:00`, along
/// with the rules that go with it.
///
/// Two zones are equal when their IDs are.
#[derive(Clone)]
pub struct TimeZone {
    id: Arc<str>,
    rules: Arc<dyn ZoneRules>,
}

impl TimeZone {
    pub fn new<R: ZoneRules + 'static>(id: &str, rules: R) -> Self {
        Self { id: id.into(), rules: Arc::new(rules) }
    }

    /// The zone that is always at UTC, with the ID `Z`.
    pub fn utc() -> Self {
        Self::fixed(ZoneOffset::utc())
    }

    /// A zone that is always at the given offset, named after it.
    pub fn fixed(offset: ZoneOffset) -> Self {
        Self::new(offset.id(), FixedZoneRules::new(offset.clone()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rules(&self) -> &dyn ZoneRules {
        &*self.rules
    }
}

impl PartialEq for TimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TimeZone {}

impl Hash for TimeZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimeZone({})", self.id)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl Calendrical for TimeZone {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::TimeZone => Some(Value::TimeZone(self.clone())),
            _                  => None,
        }
    }
}


/// A strategy for turning a wall-clock time into an offset date-time when
/// the zone’s rules give no single answer.
pub trait ZoneResolver: fmt::Debug + Send + Sync {

    /// Picks the offset for the local date-time. A valid time always keeps
    /// its only offset; gaps and overlaps are passed on to the handlers.
    ///
    /// The previous offset is the one the date-time was at before it was
    /// adjusted, if there is one.
    fn resolve(&self, local: LocalDateTime, info: &ZoneOffsetInfo, previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        match info {
            ZoneOffsetInfo::Valid(offset) => {
                Ok(OffsetDateTime::new(local, offset.clone()))
            },
            ZoneOffsetInfo::Gap { transition, before, after } => {
                self.handle_gap(local, *transition, before, after)
            },
            ZoneOffsetInfo::Overlap { earlier, later, .. } => {
                self.handle_overlap(local, earlier, later, previous)
            },
        }
    }

    fn handle_gap(&self, local: LocalDateTime, transition: Instant, before: &ZoneOffset, after: &ZoneOffset) -> Result<OffsetDateTime>;

    fn handle_overlap(&self, local: LocalDateTime, earlier: &ZoneOffset, later: &ZoneOffset, previous: Option<&ZoneOffset>) -> Result<OffsetDateTime>;
}

/// The instant just before the transition, at the old offset.
fn last_before(transition: Instant, before: &ZoneOffset) -> Result<OffsetDateTime> {
    let instant = transition.checked_add(Duration::of_nanos(0, -1)?)?;
    OffsetDateTime::from_instant(instant, before.clone())
}

/// The transition instant itself, at the new offset.
fn first_after(transition: Instant, after: &ZoneOffset) -> Result<OffsetDateTime> {
    OffsetDateTime::from_instant(transition, after.clone())
}

#[derive(Debug, Clone, Copy)]
struct Strict;

impl ZoneResolver for Strict {
    fn handle_gap(&self, local: LocalDateTime, _transition: Instant, before: &ZoneOffset, after: &ZoneOffset) -> Result<OffsetDateTime> {
        Err(Error::Resolution(format!("local date-time {} does not exist in the gap between {} and {}", local, before, after)))
    }

    fn handle_overlap(&self, local: LocalDateTime, earlier: &ZoneOffset, later: &ZoneOffset, _previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        Err(Error::Resolution(format!("local date-time {} is ambiguous in the overlap between {} and {}", local, earlier, later)))
    }
}

#[derive(Debug, Clone, Copy)]
struct PreTransition;

impl ZoneResolver for PreTransition {
    fn handle_gap(&self, _local: LocalDateTime, transition: Instant, before: &ZoneOffset, _after: &ZoneOffset) -> Result<OffsetDateTime> {
        last_before(transition, before)
    }

    fn handle_overlap(&self, local: LocalDateTime, earlier: &ZoneOffset, _later: &ZoneOffset, _previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        Ok(OffsetDateTime::new(local, earlier.clone()))
    }
}

#[derive(Debug, Clone, Copy)]
struct PostTransition;

impl ZoneResolver for PostTransition {
    fn handle_gap(&self, _local: LocalDateTime, transition: Instant, _before: &ZoneOffset, after: &ZoneOffset) -> Result<OffsetDateTime> {
        first_after(transition, after)
    }

    fn handle_overlap(&self, local: LocalDateTime, _earlier: &ZoneOffset, later: &ZoneOffset, _previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        Ok(OffsetDateTime::new(local, later.clone()))
    }
}

#[derive(Debug, Clone, Copy)]
struct PostGapPreOverlap;

impl ZoneResolver for PostGapPreOverlap {
    fn handle_gap(&self, _local: LocalDateTime, transition: Instant, _before: &ZoneOffset, after: &ZoneOffset) -> Result<OffsetDateTime> {
        first_after(transition, after)
    }

    fn handle_overlap(&self, local: LocalDateTime, earlier: &ZoneOffset, _later: &ZoneOffset, _previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        Ok(OffsetDateTime::new(local, earlier.clone()))
    }
}

#[derive(Debug, Clone, Copy)]
struct RetainOffset;

impl ZoneResolver for RetainOffset {
    fn handle_gap(&self, _local: LocalDateTime, transition: Instant, _before: &ZoneOffset, after: &ZoneOffset) -> Result<OffsetDateTime> {
        first_after(transition, after)
    }

    fn handle_overlap(&self, local: LocalDateTime, earlier: &ZoneOffset, later: &ZoneOffset, previous: Option<&ZoneOffset>) -> Result<OffsetDateTime> {
        let offset = match previous {
            Some(previous) if previous == earlier => earlier,
            _                                     => later,
        };

        Ok(OffsetDateTime::new(local, offset.clone()))
    }
}

static STRICT: Strict = Strict;
static PRE_TRANSITION: PreTransition = PreTransition;
static POST_TRANSITION: PostTransition = PostTransition;
static POST_GAP_PRE_OVERLAP: PostGapPreOverlap = PostGapPreOverlap;
static RETAIN_OFFSET: RetainOffset = RetainOffset;

/// The built-in resolvers.
#[derive(Debug, Clone, Copy)]
pub struct ZoneResolvers;

impl ZoneResolvers {

    /// Rejects any time in a gap or an overlap.
    pub fn strict() -> &'static dyn ZoneResolver {
        &STRICT
    }

    /// Moves a time in a gap to the instant just before the clocks
    /// changed, and picks the earlier offset in an overlap.
    pub fn pre_transition() -> &'static dyn ZoneResolver {
        &PRE_TRANSITION
    }

    /// Moves a time in a gap to the instant the clocks changed, and picks
    /// the later offset in an overlap.
    pub fn post_transition() -> &'static dyn ZoneResolver {
        &POST_TRANSITION
    }

    /// Moves a time in a gap to the instant the clocks changed, and picks
    /// the earlier offset in an overlap.
    pub fn post_gap_pre_overlap() -> &'static dyn ZoneResolver {
        &POST_GAP_PRE_OVERLAP
    }

    /// Keeps the previous offset in an overlap if it’s one of the two
    /// choices, and otherwise behaves like `post_transition`.
    pub fn retain_offset() -> &'static dyn ZoneResolver {
        &RETAIN_OFFSET
    }
}


/// A date and time in a particular time zone, along with the offset the
/// zone had at that moment.
#[derive(PartialEq, Clone)]
pub struct ZonedDateTime {
    date_time: OffsetDateTime,
    zone: TimeZone,
}

impl ZonedDateTime {

    /// The wall-clock time in the zone when the instant occurs. This never
    /// needs resolving, as every instant has exactly one offset.
    pub fn from_instant(instant: Instant, zone: TimeZone) -> Result<Self> {
        let offset = zone.rules().offset_at(instant);
        let date_time = OffsetDateTime::from_instant(instant, offset)?;
        Ok(Self { date_time, zone })
    }

    /// Places a wall-clock time in the zone, using the resolver if the
    /// time falls in a gap or an overlap.
    pub fn of(local: LocalDateTime, zone: TimeZone, resolver: &dyn ZoneResolver) -> Result<Self> {
        Self::resolve(local, zone, resolver, None)
    }

    /// Like `of`, but passing a previous offset along to the resolver.
    pub fn resolve(local: LocalDateTime, zone: TimeZone, resolver: &dyn ZoneResolver, previous: Option<&ZoneOffset>) -> Result<Self> {
        let info = zone.rules().offset_info(local);
        let date_time = resolver.resolve(local, &info, previous)?;

        if !zone.rules().offset_info(date_time.local_date_time()).is_valid_offset(date_time.offset()) {
            return Err(Error::Resolution(format!("resolver produced {}, which is not valid in zone {}", date_time, zone)));
        }

        Ok(Self { date_time, zone })
    }

    pub fn offset_date_time(&self) -> &OffsetDateTime {
        &self.date_time
    }

    pub fn local_date_time(&self) -> LocalDateTime {
        self.date_time.local_date_time()
    }

    pub fn date(&self) -> LocalDate {
        self.date_time.date()
    }

    pub fn time(&self) -> LocalTime {
        self.date_time.time()
    }

    pub fn offset(&self) -> &ZoneOffset {
        self.date_time.offset()
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    pub fn to_instant(&self) -> Result<Instant> {
        self.date_time.to_instant()
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i64 { self.date_time.year() }
    fn month(&self) -> Month { self.date_time.month() }
    fn day(&self) -> i8 { self.date_time.day() }
    fn yearday(&self) -> i16 { self.date_time.yearday() }
    fn weekday(&self) -> Weekday { self.date_time.weekday() }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i8 { self.date_time.hour() }
    fn minute(&self) -> i8 { self.date_time.minute() }
    fn second(&self) -> i8 { self.date_time.second() }
    fn nanosecond(&self) -> i32 { self.date_time.nanosecond() }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.date_time, self.zone)
    }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ZonedDateTime({})", self)
    }
}

impl Calendrical for ZonedDateTime {
    fn direct_value(&self, kind: RuleKind) -> Option<Value> {
        match kind {
            RuleKind::ZonedDateTime  => Some(Value::ZonedDateTime(self.clone())),
            RuleKind::OffsetDateTime => Some(Value::OffsetDateTime(self.date_time.clone())),
            RuleKind::TimeZone       => Some(Value::TimeZone(self.zone.clone())),
            _                        => None,
        }
    }
}
