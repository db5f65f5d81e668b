//! Interval construction policy
//!
//! [`EventInterval::new`](crate::EventInterval::new) accepts any pair of
//! events. A policy lets callers opt into validation when building intervals
//! from untrusted input.

use crate::{Event, TimepredError, TimepredResult};

/// Interval construction configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalPolicy {
    /// Accept intervals whose start is after their end
    pub allow_inverted: bool,
    /// Accept intervals whose start and end coincide
    pub allow_degenerate: bool,
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

impl IntervalPolicy {
    /// Accept every pair of events
    pub fn permissive() -> Self {
        IntervalPolicy {
            allow_inverted: true,
            allow_degenerate: true,
        }
    }

    /// Reject inverted intervals, keep single-instant ones
    pub fn strict() -> Self {
        IntervalPolicy {
            allow_inverted: false,
            allow_degenerate: true,
        }
    }

    /// Require `start < end`
    pub fn non_degenerate() -> Self {
        IntervalPolicy {
            allow_inverted: false,
            allow_degenerate: false,
        }
    }

    /// Check a candidate `[start, end]` against this policy
    pub fn validate(&self, start: &Event, end: &Event) -> TimepredResult<()> {
        if !self.allow_inverted && start.after(end) {
            tracing::debug!(start = %start.time(), end = %end.time(), "rejecting inverted interval");
            return Err(TimepredError::InvertedInterval {
                start: start.time(),
                end: end.time(),
            });
        }

        if !self.allow_degenerate && start.meets(end) {
            tracing::debug!(at = %start.time(), "rejecting degenerate interval");
            return Err(TimepredError::DegenerateInterval { at: start.time() });
        }

        Ok(())
    }
}
