//! Per-batch matching metrics.
//!
//! [`MatchMetrics`] counts how each extrapolation was resolved, for
//! telemetry and for spotting field or geometry mismatches (a sudden rise
//! in opposite-sense hits or misses).

use muex_propagator::PropagationDirection;

use crate::outcome::StationOutcome;

/// Counters collected over one call to a matcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchMetrics {
    /// Tracks processed.
    pub tracks: u64,
    /// Extrapolations resolved by the along propagator.
    pub along_hits: u64,
    /// Extrapolations resolved by the opposite propagator.
    pub opposite_hits: u64,
    /// Extrapolations that reached nothing.
    pub misses: u64,
    /// Wall-clock time for the whole batch, in microseconds.
    pub total_us: u64,
}

impl MatchMetrics {
    /// Count one station outcome.
    pub fn record(&mut self, outcome: &StationOutcome) {
        match outcome.hit().map(|h| h.resolved_by) {
            Some(PropagationDirection::Along) => self.along_hits += 1,
            Some(PropagationDirection::Opposite) => self.opposite_hits += 1,
            None => self.misses += 1,
        }
    }

    /// Fold another set of counters into this one. `total_us` is left
    /// alone: batch time is measured by the caller.
    pub fn merge(&mut self, other: &MatchMetrics) {
        self.tracks += other.tracks;
        self.along_hits += other.along_hits;
        self.opposite_hits += other.opposite_hits;
        self.misses += other.misses;
    }

    /// Total extrapolations attempted.
    pub fn extrapolations(&self) -> u64 {
        self.along_hits + self.opposite_hits + self.misses
    }

    /// Fraction of extrapolations that reached their station.
    pub fn hit_fraction(&self) -> f64 {
        let total = self.extrapolations();
        if total == 0 {
            return 0.0;
        }
        (self.along_hits + self.opposite_hits) as f64 / total as f64
    }
}
