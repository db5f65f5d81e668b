//! Law sweeps - check every algebra law over generated data

use std::collections::HashMap;

use timepred_core::laws::{check_interval_laws, check_point_laws, LawViolation};
use timepred_core::{IntervalRelation, PointRelation};

use crate::generator::{GeneratorConfig, IntervalGenerator};

/// Sweep parameters
#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub generator: GeneratorConfig,
    pub seed: u64,
    /// Pairs of events and pairs of intervals checked
    pub pairs: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            generator: GeneratorConfig::default(),
            seed: 0,
            pairs: 1_000,
        }
    }
}

/// Runs the law checks and tallies which relations were observed
pub struct LawSweep {
    config: SweepConfig,
}

impl LawSweep {
    pub fn new(config: SweepConfig) -> Self {
        LawSweep { config }
    }

    pub fn run(&self) -> SweepResult {
        let mut generator =
            IntervalGenerator::new(self.config.generator.clone(), self.config.seed);
        let mut result = SweepResult::new();

        for (a, b) in generator.event_pairs(self.config.pairs) {
            result.event_pairs += 1;
            *result.point_relations.entry(a.point_relation(&b)).or_insert(0) += 1;
            result.violations.extend(check_point_laws(&a, &b));
        }

        for (a, b) in generator.interval_pairs(self.config.pairs) {
            result.interval_pairs += 1;
            let relations = a.relations(&b);
            if relations.is_empty() {
                result.unrelated_pairs += 1;
            }
            for relation in relations.iter() {
                *result.interval_relations.entry(relation).or_insert(0) += 1;
            }
            result.violations.extend(check_interval_laws(&a, &b));
        }

        tracing::info!(
            event_pairs = result.event_pairs,
            interval_pairs = result.interval_pairs,
            violations = result.violations.len(),
            "law sweep finished"
        );
        result
    }
}

/// Sweep outcome and statistics
#[derive(Debug, Default)]
pub struct SweepResult {
    pub event_pairs: u64,
    pub interval_pairs: u64,
    /// Interval pairs for which no relation held
    pub unrelated_pairs: u64,
    pub point_relations: HashMap<PointRelation, u64>,
    pub interval_relations: HashMap<IntervalRelation, u64>,
    pub violations: Vec<LawViolation>,
}

impl SweepResult {
    pub fn new() -> Self {
        SweepResult::default()
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn point_count(&self, relation: PointRelation) -> u64 {
        self.point_relations.get(&relation).copied().unwrap_or(0)
    }

    pub fn interval_count(&self, relation: IntervalRelation) -> u64 {
        self.interval_relations.get(&relation).copied().unwrap_or(0)
    }
}
