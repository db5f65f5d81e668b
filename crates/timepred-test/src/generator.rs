//! Seeded random generation of events and intervals

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use timepred_core::{Event, EventInterval, Location, Timestamp};

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Earliest instant generated
    pub origin: Timestamp,
    /// Instants fall in `[origin, origin + horizon]`
    pub horizon: Duration,
    /// Instants are snapped to multiples of this step, so ties occur
    pub resolution: Duration,
    /// Longest interval produced
    pub max_length: Duration,
    /// Probability of swapping start and end (0.0 - 1.0, values outside act as clamped)
    pub inverted_prob: f64,
    /// Probability of a single-instant interval (0.0 - 1.0, values outside act as clamped)
    pub degenerate_prob: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            origin: Timestamp::ZERO,
            horizon: Duration::from_secs(60),
            resolution: Duration::from_secs(1),
            max_length: Duration::from_secs(10),
            inverted_prob: 0.0,
            degenerate_prob: 0.05,
        }
    }
}

impl GeneratorConfig {
    /// Coarse grid with frequent ties and ill-formed intervals
    pub fn hostile() -> Self {
        GeneratorConfig {
            origin: Timestamp::ZERO,
            horizon: Duration::from_secs(8),
            resolution: Duration::from_secs(1),
            max_length: Duration::from_secs(4),
            inverted_prob: 0.2,
            degenerate_prob: 0.2,
        }
    }

    /// Nanosecond grid over one second, ties are rare
    pub fn fine() -> Self {
        GeneratorConfig {
            origin: Timestamp::ZERO,
            horizon: Duration::from_secs(1),
            resolution: Duration::from_nanos(1),
            max_length: Duration::from_millis(100),
            inverted_prob: 0.0,
            degenerate_prob: 0.0,
        }
    }

    fn steps(&self, span: Duration) -> u64 {
        let resolution = self.resolution.as_nanos().max(1);
        (span.as_nanos() / resolution) as u64
    }

    fn span_of(&self, steps: u64) -> Duration {
        let resolution = self.resolution.as_nanos().max(1) as u64;
        Duration::from_nanos(resolution.saturating_mul(steps))
    }
}

/// Reproducible source of events and intervals
pub struct IntervalGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl IntervalGenerator {
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        IntervalGenerator {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorConfig::default(), seed)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Instant on the configured grid
    pub fn timestamp(&mut self) -> Timestamp {
        let steps = self.rng.gen_range(0..=self.config.steps(self.config.horizon));
        self.config.origin + self.config.span_of(steps)
    }

    pub fn location(&mut self) -> Location {
        Location::new(
            self.rng.gen_range(-1000.0..1000.0),
            self.rng.gen_range(-1000.0..1000.0),
            self.rng.gen_range(0.0..500.0),
            self.rng.gen_range(0.0..std::f64::consts::TAU),
        )
    }

    pub fn event(&mut self) -> Event {
        let t = self.timestamp();
        let location = self.location();
        Event::new(t, location)
    }

    pub fn interval(&mut self) -> EventInterval {
        let start = self.event();

        let length = if self.rng.gen::<f64>() < self.config.degenerate_prob {
            Duration::ZERO
        } else {
            let steps = self.rng.gen_range(1..=self.config.steps(self.config.max_length).max(1));
            self.config.span_of(steps)
        };
        let end = Event::new(start.time() + length, self.location());

        if self.rng.gen::<f64>() < self.config.inverted_prob {
            EventInterval::new(end, start)
        } else {
            EventInterval::new(start, end)
        }
    }

    /// `count` interval pairs
    pub fn interval_pairs(&mut self, count: usize) -> Vec<(EventInterval, EventInterval)> {
        (0..count).map(|_| (self.interval(), self.interval())).collect()
    }

    /// `count` event pairs
    pub fn event_pairs(&mut self, count: usize) -> Vec<(Event, Event)> {
        (0..count).map(|_| (self.event(), self.event())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = IntervalGenerator::with_seed(7);
        let mut b = IntervalGenerator::with_seed(7);

        for _ in 0..50 {
            assert_eq!(a.interval(), b.interval());
        }
    }

    #[test]
    fn test_timestamps_within_horizon() {
        let mut generator = IntervalGenerator::with_seed(1);
        let config = generator.config().clone();
        let latest = config.origin + config.horizon;

        for _ in 0..200 {
            let t = generator.timestamp();
            assert!(!t.is_before(config.origin));
            assert!(!t.is_after(latest));
        }
    }

    #[test]
    fn test_default_never_inverted() {
        let mut generator = IntervalGenerator::with_seed(3);
        for _ in 0..200 {
            assert!(!generator.interval().is_inverted());
        }
    }

    #[test]
    fn test_hostile_produces_ill_formed() {
        let mut generator = IntervalGenerator::new(GeneratorConfig::hostile(), 11);
        let intervals: Vec<_> = (0..500).map(|_| generator.interval()).collect();

        assert!(intervals.iter().any(|i| i.is_inverted()));
        assert!(intervals.iter().any(|i| i.is_degenerate()));
    }

    #[test]
    fn test_out_of_range_probabilities_act_as_clamped() {
        let config = GeneratorConfig {
            inverted_prob: 1.5,
            degenerate_prob: -0.1,
            ..GeneratorConfig::default()
        };
        let mut generator = IntervalGenerator::new(config, 1);

        for _ in 0..200 {
            let interval = generator.interval();
            assert!(interval.is_inverted());
            assert!(!interval.is_degenerate());
        }
    }
}
