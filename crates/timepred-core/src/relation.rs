//! Relation catalogues
//!
//! Value-level names for the point and interval relations, so they can be
//! enumerated, logged and collected.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EventInterval;

/// The relation between two events. Exactly one holds for any pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointRelation {
    After,
    Before,
    Meets,
}

impl PointRelation {
    pub fn name(self) -> &'static str {
        match self {
            PointRelation::After => "after",
            PointRelation::Before => "before",
            PointRelation::Meets => "meets",
        }
    }

    /// Relation seen from the other operand
    pub fn inverse(self) -> Self {
        match self {
            PointRelation::After => PointRelation::Before,
            PointRelation::Before => PointRelation::After,
            PointRelation::Meets => PointRelation::Meets,
        }
    }
}

impl fmt::Display for PointRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The interval relations implemented by [`EventInterval`]
///
/// These are the literal definitions, which are not mutually exclusive:
/// two identical intervals satisfy `Overlaps`, `Starts` and `Finishes` at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum IntervalRelation {
    After = 0,
    Before = 1,
    Meets = 2,
    Overlaps = 3,
    Starts = 4,
    Finishes = 5,
    During = 6,
}

impl IntervalRelation {
    pub const ALL: [IntervalRelation; 7] = [
        IntervalRelation::After,
        IntervalRelation::Before,
        IntervalRelation::Meets,
        IntervalRelation::Overlaps,
        IntervalRelation::Starts,
        IntervalRelation::Finishes,
        IntervalRelation::During,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntervalRelation::After => "after",
            IntervalRelation::Before => "before",
            IntervalRelation::Meets => "meets",
            IntervalRelation::Overlaps => "overlaps",
            IntervalRelation::Starts => "starts",
            IntervalRelation::Finishes => "finishes",
            IntervalRelation::During => "during",
        }
    }

    /// Short Allen-style symbol
    pub fn code(self) -> char {
        match self {
            IntervalRelation::After => '>',
            IntervalRelation::Before => '<',
            IntervalRelation::Meets => 'm',
            IntervalRelation::Overlaps => 'o',
            IntervalRelation::Starts => 's',
            IntervalRelation::Finishes => 'f',
            IntervalRelation::During => 'd',
        }
    }

    /// Evaluate this relation from `a` to `b`
    pub fn holds(self, a: &EventInterval, b: &EventInterval) -> bool {
        match self {
            IntervalRelation::After => a.after(b),
            IntervalRelation::Before => a.before(b),
            IntervalRelation::Meets => a.meets(b),
            IntervalRelation::Overlaps => a.overlaps(b),
            IntervalRelation::Starts => a.starts(b),
            IntervalRelation::Finishes => a.finishes(b),
            IntervalRelation::During => a.during(b),
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for IntervalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of interval relations
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelationSet(u8);

impl RelationSet {
    pub const EMPTY: RelationSet = RelationSet(0);

    #[inline]
    pub fn insert(&mut self, relation: IntervalRelation) {
        self.0 |= relation.bit();
    }

    #[inline]
    pub fn contains(&self, relation: IntervalRelation) -> bool {
        self.0 & relation.bit() != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in [`IntervalRelation::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = IntervalRelation> + '_ {
        IntervalRelation::ALL
            .into_iter()
            .filter(move |relation| self.contains(*relation))
    }
}

impl FromIterator<IntervalRelation> for RelationSet {
    fn from_iter<I: IntoIterator<Item = IntervalRelation>>(iter: I) -> Self {
        let mut set = RelationSet::EMPTY;
        for relation in iter {
            set.insert(relation);
        }
        set
    }
}

impl fmt::Debug for RelationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for RelationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, relation) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(relation.name())?;
        }
        f.write_str("}")
    }
}
