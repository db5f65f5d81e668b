//! Algebra laws
//!
//! Properties the point and interval relations must satisfy. The relation
//! methods are written so these hold by construction; the checks here exist
//! so tests and the harness can verify them over arbitrary data.
//!
//! # The Five Laws
//!
//! 1. **Point Trichotomy** - exactly one of `after`, `before`, `meets` holds
//! 2. **Point Reflexivity** - an event meets itself and is neither after nor before itself
//! 3. **Point Antisymmetry** - `a.after(b) == b.before(a)`
//! 4. **Interval Before/After Duality** - `a.before(b) == b.after(a)`
//! 5. **Interval Self Relations** - a well-formed, non-degenerate interval
//!    overlaps, starts and finishes itself, and neither meets nor is during itself
//!
//! ```rust
//! use timepred_core::laws::check_point_laws;
//! use timepred_core::{Event, Timestamp};
//!
//! let a = Event::at(Timestamp::from_secs(1));
//! let b = Event::at(Timestamp::from_secs(2));
//! assert!(check_point_laws(&a, &b).is_empty());
//! ```

use std::fmt;

use thiserror::Error;

use crate::{Event, EventInterval};

/// The laws of the relation algebra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Law {
    /// LAW-1: for any two events exactly one point relation holds
    PointTrichotomy = 1,

    /// LAW-2: `a.meets(a)`, and neither `a.after(a)` nor `a.before(a)`
    PointReflexivity = 2,

    /// LAW-3: `a.after(b) == b.before(a)` and `a.before(b) == b.after(a)`
    PointAntisymmetry = 3,

    /// LAW-4: `a.before(b) == b.after(a)` for intervals
    IntervalBeforeAfterDuality = 4,

    /// LAW-5: with `start < end`, `i` overlaps, starts and finishes itself,
    /// does not meet itself and is not during itself
    IntervalSelfRelations = 5,
}

impl Law {
    /// Get the law code (e.g., "LAW-1")
    pub fn code(&self) -> &'static str {
        match self {
            Law::PointTrichotomy => "LAW-1",
            Law::PointReflexivity => "LAW-2",
            Law::PointAntisymmetry => "LAW-3",
            Law::IntervalBeforeAfterDuality => "LAW-4",
            Law::IntervalSelfRelations => "LAW-5",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Law::PointTrichotomy => "Point Trichotomy",
            Law::PointReflexivity => "Point Reflexivity",
            Law::PointAntisymmetry => "Point Antisymmetry",
            Law::IntervalBeforeAfterDuality => "Interval Before/After Duality",
            Law::IntervalSelfRelations => "Interval Self Relations",
        }
    }

    pub fn all() -> &'static [Law] {
        &[
            Law::PointTrichotomy,
            Law::PointReflexivity,
            Law::PointAntisymmetry,
            Law::IntervalBeforeAfterDuality,
            Law::IntervalSelfRelations,
        ]
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.name())
    }
}

/// A law that failed on concrete operands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Relation law violated: {law} - {context}")]
pub struct LawViolation {
    pub law: Law,
    pub context: String,
}

impl LawViolation {
    fn new(law: Law, context: String) -> Self {
        tracing::warn!(law = law.code(), %context, "relation law violated");
        LawViolation { law, context }
    }
}

/// Assert that a law holds, panicking if violated.
///
/// # Panics
///
/// Panics if `check` returns `false`.
#[track_caller]
pub fn assert_law<F>(law: Law, context: &str, check: F)
where
    F: FnOnce() -> bool,
{
    if !check() {
        panic!(
            "{}",
            LawViolation {
                law,
                context: context.to_string(),
            }
        );
    }
}

/// Check laws 1-3 on a pair of events.
///
/// Returns every violation found; empty when all hold.
pub fn check_point_laws(a: &Event, b: &Event) -> Vec<LawViolation> {
    let mut violations = Vec::new();

    let held = [a.after(b), a.before(b), a.meets(b)]
        .iter()
        .filter(|holds| **holds)
        .count();
    if held != 1 {
        violations.push(LawViolation::new(
            Law::PointTrichotomy,
            format!("{} relations hold between {} and {}", held, a, b),
        ));
    }

    for e in [a, b] {
        if !e.meets(e) || e.after(e) || e.before(e) {
            violations.push(LawViolation::new(
                Law::PointReflexivity,
                format!("{} is not reflexive", e),
            ));
        }
    }

    if a.after(b) != b.before(a) || a.before(b) != b.after(a) {
        violations.push(LawViolation::new(
            Law::PointAntisymmetry,
            format!("{} and {} disagree on direction", a, b),
        ));
    }

    violations
}

/// Check laws 4-5 on a pair of intervals.
///
/// Law 5 is only checked on operands with `start < end`; inverted and
/// degenerate intervals are skipped.
pub fn check_interval_laws(a: &EventInterval, b: &EventInterval) -> Vec<LawViolation> {
    let mut violations = Vec::new();

    if a.before(b) != b.after(a) || b.before(a) != a.after(b) {
        violations.push(LawViolation::new(
            Law::IntervalBeforeAfterDuality,
            format!("{} and {} disagree on before/after", a, b),
        ));
    }

    for i in [a, b] {
        if i.is_inverted() || i.is_degenerate() {
            continue;
        }
        if i.meets(i) || !i.overlaps(i) || !i.starts(i) || !i.finishes(i) || i.during(i) {
            violations.push(LawViolation::new(
                Law::IntervalSelfRelations,
                format!("{} relates to itself as {}", i, i.relations(i)),
            ));
        }
    }

    violations
}
