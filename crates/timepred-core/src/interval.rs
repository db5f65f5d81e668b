//! Event intervals and the interval relations
//!
//! An [`EventInterval`] is the closed span `[start, end]` between two events.
//! Every relation reduces to one or two point relations on the four boundary
//! instants:
//!
//! ```text
//! after      [--b--]  [--a--]         a.start  >  b.end
//! before     [--a--]  [--b--]         a.end    <  b.start
//! meets      [--a--][--b--]           a.end    == b.start
//! overlaps   [--a--]                  b.start <= a.end <= b.end
//!               [--b--]
//! starts     [--a--]                  a.start  == b.start
//!            [----b----]
//! finishes       [--a--]              a.end    == b.end
//!            [----b----]
//! during       [-a-]                  b.start < a.start, a.end < b.end
//!            [----b----]
//! ```
//!
//! `overlaps` only looks at where `a` ends relative to `b`, so it is not the
//! symmetric textbook relation. [`EventInterval::overlaps_allen`] and
//! [`EventInterval::intersects`] are provided separately for that.
//!
//! # Preconditions
//!
//! Callers should supply `start <= end`. [`EventInterval::new`] does not
//! check this and relations on inverted intervals are evaluated literally.
//! Use [`EventInterval::try_new`] or [`EventInterval::with_policy`] to reject
//! them.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Event, IntervalPolicy, IntervalRelation, Location, RelationSet, TimepredResult, Timestamp,
};

/// A closed interval between two events
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventInterval {
    start: Event,
    end: Event,
}

impl EventInterval {
    /// Build an interval from any pair of events.
    ///
    /// No ordering check is made; see the module docs. This is also the only
    /// way to "change" an interval: build a new value and assign it.
    #[inline]
    pub fn new(start: Event, end: Event) -> Self {
        EventInterval { start, end }
    }

    /// Build an interval, rejecting `start > end`
    pub fn try_new(start: Event, end: Event) -> TimepredResult<Self> {
        Self::with_policy(start, end, &IntervalPolicy::strict())
    }

    /// Build an interval validated against `policy`
    pub fn with_policy(
        start: Event,
        end: Event,
        policy: &IntervalPolicy,
    ) -> TimepredResult<Self> {
        policy.validate(&start, &end)?;
        Ok(EventInterval::new(start, end))
    }

    #[inline]
    pub fn start(&self) -> Event {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Event {
        self.end
    }

    #[inline]
    pub fn start_time(&self) -> Timestamp {
        self.start.time()
    }

    #[inline]
    pub fn end_time(&self) -> Timestamp {
        self.end.time()
    }

    #[inline]
    pub fn start_location(&self) -> Location {
        self.start.location()
    }

    #[inline]
    pub fn end_location(&self) -> Location {
        self.end.location()
    }

    /// Length of the span; zero for inverted intervals
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end_time() - self.start_time()
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start.after(&self.end)
    }

    /// Start and end are the same instant
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start.meets(&self.end)
    }

    /// `t` lies within `[start, end]`, bounds included
    #[inline]
    pub fn contains_instant(&self, t: Timestamp) -> bool {
        !t.is_before(self.start_time()) && !t.is_after(self.end_time())
    }

    /// `self` begins strictly after `other` ends
    #[inline]
    pub fn after(&self, other: &EventInterval) -> bool {
        self.start.after(&other.end)
    }

    /// `self` ends strictly before `other` begins
    #[inline]
    pub fn before(&self, other: &EventInterval) -> bool {
        self.end.before(&other.start)
    }

    /// The end of `self` coincides with the start of `other`
    #[inline]
    pub fn meets(&self, other: &EventInterval) -> bool {
        self.end.meets(&other.start)
    }

    /// The end of `self` lies within `[other.start, other.end]`
    pub fn overlaps(&self, other: &EventInterval) -> bool {
        (self.end.after(&other.start) || self.end.meets(&other.start))
            && (self.end.before(&other.end) || self.end.meets(&other.end))
    }

    /// `self` and `other` begin at the same instant
    #[inline]
    pub fn starts(&self, other: &EventInterval) -> bool {
        self.start.meets(&other.start)
    }

    /// `self` and `other` end at the same instant
    #[inline]
    pub fn finishes(&self, other: &EventInterval) -> bool {
        self.end.meets(&other.end)
    }

    /// `self` lies strictly inside `other`, both bounds exclusive
    pub fn during(&self, other: &EventInterval) -> bool {
        self.start.after(&other.start) && self.end.before(&other.end)
    }

    /// Classical Allen overlap: `self.start < other.start < self.end < other.end`
    pub fn overlaps_allen(&self, other: &EventInterval) -> bool {
        self.start.before(&other.start)
            && other.start.before(&self.end)
            && self.end.before(&other.end)
    }

    /// The closed spans share at least one instant
    pub fn intersects(&self, other: &EventInterval) -> bool {
        !self.before(other) && !self.after(other)
    }

    /// Every relation that holds from `self` to `other`
    pub fn relations(&self, other: &EventInterval) -> RelationSet {
        let set = IntervalRelation::ALL
            .iter()
            .copied()
            .filter(|relation| relation.holds(self, other))
            .collect::<RelationSet>();
        tracing::trace!(a = %self, b = %other, relations = %set, "classified interval pair");
        set
    }
}

impl fmt::Display for EventInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.start, self.end)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_interval_json_roundtrip() {
        let interval = EventInterval::new(
            Event::new(Timestamp::from_nanos(-1_500), Location::new(1.5, -2.0, 3.25, 0.5)),
            Event::new(Timestamp::from_secs(1_700_000_000), Location::ORIGIN),
        );

        let json = serde_json::to_string(&interval).unwrap();
        let back: EventInterval = serde_json::from_str(&json).unwrap();

        assert_eq!(back, interval);
        assert_eq!(back.relations(&interval), interval.relations(&interval));
    }

    #[test]
    fn test_relation_json_roundtrip() {
        for relation in IntervalRelation::ALL {
            let json = serde_json::to_string(&relation).unwrap();
            let back: IntervalRelation = serde_json::from_str(&json).unwrap();
            assert_eq!(back, relation);
        }
    }

    #[test]
    fn test_timestamp_serializes_as_nanos() {
        let json = serde_json::to_string(&Timestamp::from_micros(3)).unwrap();
        assert_eq!(json, "3000");
        assert_eq!(
            serde_json::from_str::<Timestamp>("3000").unwrap(),
            Timestamp::from_nanos(3_000)
        );
    }
}
