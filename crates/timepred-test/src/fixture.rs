//! Canonical event and interval fixtures
//!
//! Four events `e1 < e2 < e3 < e4`, evenly spaced, and the six intervals
//! built from them:
//!
//! ```text
//!        e1    e2    e3    e4
//! ei1    [-----]
//! ei2                [-----]
//! ei3          [-----------]
//! ei4    [-----------------]
//! ei5          [-----]
//! ei6    [-----------]
//! ```

use std::time::Duration;

use timepred_core::{Event, EventInterval, Location, Timestamp};

/// Four evenly spaced events and six intervals over them
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    pub e1: Event,
    pub e2: Event,
    pub e3: Event,
    pub e4: Event,
    /// `[e1, e2]`
    pub ei1: EventInterval,
    /// `[e3, e4]`
    pub ei2: EventInterval,
    /// `[e2, e4]`
    pub ei3: EventInterval,
    /// `[e1, e4]`
    pub ei4: EventInterval,
    /// `[e2, e3]`
    pub ei5: EventInterval,
    /// `[e1, e3]`
    pub ei6: EventInterval,
}

impl Fixture {
    /// Events `step` apart from `base`, all at `location`
    pub fn starting_at(base: Timestamp, step: Duration, location: Location) -> Self {
        let e1 = Event::new(base, location);
        let e2 = Event::new(base + step, location);
        let e3 = Event::new(base + step * 2, location);
        let e4 = Event::new(base + step * 3, location);

        Fixture {
            e1,
            e2,
            e3,
            e4,
            ei1: EventInterval::new(e1, e2),
            ei2: EventInterval::new(e3, e4),
            ei3: EventInterval::new(e2, e4),
            ei4: EventInterval::new(e1, e4),
            ei5: EventInterval::new(e2, e3),
            ei6: EventInterval::new(e1, e3),
        }
    }

    /// One second apart from a fixed instant at the origin
    pub fn one_second_apart() -> Self {
        Self::starting_at(
            Timestamp::from_secs(1_700_000_000),
            Duration::from_secs(1),
            Location::ORIGIN,
        )
    }

    /// One second apart from the current wall-clock time
    pub fn from_now() -> Self {
        Self::starting_at(Timestamp::now(), Duration::from_secs(1), Location::ORIGIN)
    }

    pub fn events(&self) -> [Event; 4] {
        [self.e1, self.e2, self.e3, self.e4]
    }

    pub fn intervals(&self) -> [EventInterval; 6] {
        [self.ei1, self.ei2, self.ei3, self.ei4, self.ei5, self.ei6]
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::one_second_apart()
    }
}
