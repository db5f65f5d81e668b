//! Event definitions
//!
//! An event is an instantaneous occurrence at a specific time and place.
//! Events are compared on their timestamps only: for any two events exactly
//! one of [`Event::after`], [`Event::before`] and [`Event::meets`] holds.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Location, PointRelation, Timestamp};

/// A timed location
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    t: Timestamp,
    location: Location,
}

impl Event {
    /// Whole-value constructor. Events are never changed in place; replace
    /// one by assigning a freshly built value.
    #[inline]
    pub fn new(t: Timestamp, location: Location) -> Self {
        Event { t, location }
    }

    /// Event at the origin
    #[inline]
    pub fn at(t: Timestamp) -> Self {
        Event::new(t, Location::ORIGIN)
    }

    /// Event stamped with the current wall-clock time
    pub fn now(location: Location) -> Self {
        Event::new(Timestamp::now(), location)
    }

    #[inline]
    pub fn time(&self) -> Timestamp {
        self.t
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// `self` happens strictly after `other`
    #[inline]
    pub fn after(&self, other: &Event) -> bool {
        self.t.is_after(other.t)
    }

    /// `self` happens strictly before `other`
    #[inline]
    pub fn before(&self, other: &Event) -> bool {
        self.t.is_before(other.t)
    }

    /// `self` and `other` happen at the same instant.
    ///
    /// This is point coincidence, not the interval "meets" relation.
    #[inline]
    pub fn meets(&self, other: &Event) -> bool {
        self.t.coincides_with(other.t)
    }

    /// The one point relation that holds from `self` to `other`
    pub fn point_relation(&self, other: &Event) -> PointRelation {
        match self.t.cmp(&other.t) {
            Ordering::Greater => PointRelation::After,
            Ordering::Less => PointRelation::Before,
            Ordering::Equal => PointRelation::Meets,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.t, self.location)
    }
}
