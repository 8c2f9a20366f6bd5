//! Parallel station matching.
//!
//! Tracks are independent, so a batch is split into contiguous chunks
//! and fanned out over scoped worker threads. Each worker receives chunk
//! ranges via a crossbeam channel, matches them against the shared
//! station surfaces, and sends the results back tagged with the chunk
//! start. The calling thread drains the same queue, so every chunk is
//! matched even when no helper thread could be spawned. Results are
//! reassembled in input order, so the report is identical to the
//! sequential one apart from timing.

use std::ops::Range;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use muex_core::{MagneticField, Track};
use muex_propagator::{Extrapolator, Propagator};
use muex_surface::Surface;

use crate::config::{BatchConfig, ConfigError, StationConfig};
use crate::matcher::{MatchReport, Stations};
use crate::metrics::MatchMetrics;
use crate::outcome::TrackMatch;

/// A finished chunk: its start index, matches, and counters.
type ChunkResult = (usize, Vec<TrackMatch>, MatchMetrics);

/// Station matcher whose capabilities may be shared across threads.
///
/// Same semantics as [`StationMatcher`](crate::StationMatcher), but the
/// field model and both propagators must be `Sync`. A propagator that
/// keeps unsynchronised scratch state belongs in a `StationMatcher`:
///
/// ```compile_fail
/// use std::cell::Cell;
///
/// use muex_core::{FreeTrajectoryState, UniformField};
/// use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};
/// use muex_station::{ParallelMatcher, StationConfig};
/// use muex_surface::Surface;
///
/// struct Tally(Cell<usize>);
///
/// impl Propagator for Tally {
///     fn name(&self) -> &str { "tally" }
///     fn direction(&self) -> PropagationDirection { PropagationDirection::Along }
///     fn propagate(&self, _: &FreeTrajectoryState<'_>, _: &Surface) -> TrajectoryStateOnSurface {
///         self.0.set(self.0.get() + 1);
///         TrajectoryStateOnSurface::Invalid
///     }
/// }
///
/// let field = UniformField::zero();
/// let tally = Tally(Cell::new(0));
/// let _ = ParallelMatcher::new(StationConfig::reference(), &field, &tally, &tally);
/// ```
///
/// # Examples
///
/// ```
/// use muex_core::UniformField;
/// use muex_station::{BatchConfig, ParallelMatcher, StationConfig};
/// use muex_test_utils::{random_tracks, StraightLinePropagator};
///
/// let field = UniformField::zero();
/// let along = StraightLinePropagator::along();
/// let opposite = StraightLinePropagator::opposite();
/// let matcher =
///     ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
///
/// let tracks = random_tracks(7, 500);
/// let report = matcher.match_tracks_parallel(&tracks, &BatchConfig::default());
/// assert_eq!(report.matches, matcher.match_tracks(&tracks).matches);
/// ```
pub struct ParallelMatcher<'a> {
    stations: Stations,
    field: &'a (dyn MagneticField + Sync),
    extrapolator: Extrapolator<'a, dyn Propagator + Sync + 'a>,
}

impl<'a> ParallelMatcher<'a> {
    /// Validate `config`, build its surfaces, and bind the capabilities.
    pub fn new(
        config: StationConfig,
        field: &'a (dyn MagneticField + Sync),
        along: &'a (dyn Propagator + Sync),
        opposite: &'a (dyn Propagator + Sync),
    ) -> Result<Self, ConfigError> {
        let stations = Stations::build(config)?;
        log::debug!(
            "parallel matcher ready: {} stations, propagators '{}' / '{}'",
            stations.surfaces().len(),
            along.name(),
            opposite.name()
        );
        Ok(Self {
            stations,
            field,
            extrapolator: Extrapolator::shared(along, opposite),
        })
    }

    /// The validated station layout.
    pub fn config(&self) -> &StationConfig {
        self.stations.config()
    }

    /// Station surfaces, in outcome order.
    pub fn surfaces(&self) -> &[Surface] {
        self.stations.surfaces()
    }

    /// Extrapolate one track to every station on the calling thread.
    pub fn match_track(&self, track_index: usize, track: &Track) -> TrackMatch {
        self.stations
            .match_track(self.field, &self.extrapolator, track_index, track)
    }

    /// Match every track in order on the calling thread.
    pub fn match_tracks(&self, tracks: &[Track]) -> MatchReport {
        self.stations.match_all(self.field, &self.extrapolator, tracks)
    }

    /// Match every track using a pool of worker threads.
    ///
    /// Runs inline, as [`match_tracks`](Self::match_tracks), when only
    /// one worker would have anything to do. The calling thread counts as
    /// one of the `resolved_worker_count()` workers. A helper thread that
    /// fails to spawn is logged at `warn` level and its share of the work
    /// is picked up by the threads that did start.
    pub fn match_tracks_parallel(&self, tracks: &[Track], batch: &BatchConfig) -> MatchReport {
        let chunk_size = batch.resolved_chunk_size();
        let chunk_count = tracks.len().div_ceil(chunk_size);
        let workers = batch.resolved_worker_count().min(chunk_count);
        if workers <= 1 {
            return self.match_tracks(tracks);
        }

        let started = Instant::now();
        let chunks = self.run_pool(tracks, chunk_size, workers - 1);

        let mut metrics = MatchMetrics::default();
        let mut matches = Vec::with_capacity(tracks.len());
        for (_, chunk, chunk_metrics) in chunks {
            metrics.merge(&chunk_metrics);
            matches.extend(chunk);
        }
        metrics.total_us = started.elapsed().as_micros() as u64;
        log::debug!(
            "parallel match: {} chunks of {} over {} workers",
            chunk_count,
            chunk_size,
            workers
        );
        self.stations.report(matches, metrics)
    }

    /// Match every chunk with up to `helpers` spawned threads plus the
    /// calling thread. Returns the chunks sorted by start index.
    fn run_pool(&self, tracks: &[Track], chunk_size: usize, helpers: usize) -> Vec<ChunkResult> {
        let (task_tx, task_rx) = crossbeam_channel::unbounded::<Range<usize>>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<ChunkResult>();
        for start in (0..tracks.len()).step_by(chunk_size) {
            // The receiver lives until the end of this function.
            let _ = task_tx.send(start..(start + chunk_size).min(tracks.len()));
        }
        drop(task_tx);

        thread::scope(|scope| {
            for worker in 0..helpers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                let spawned = thread::Builder::new()
                    .name(format!("muex-match-{worker}"))
                    .spawn_scoped(scope, move || self.drain(tracks, &task_rx, &result_tx));
                if let Err(e) = spawned {
                    log::warn!(
                        "failed to spawn match worker {worker}: {e}; continuing with {worker} helpers"
                    );
                    break;
                }
            }
            self.drain(tracks, &task_rx, &result_tx);
        });
        drop(result_tx);

        let mut chunks: Vec<ChunkResult> = result_rx.iter().collect();
        chunks.sort_unstable_by_key(|(start, _, _)| *start);
        chunks
    }

    /// Match chunks from `task_rx` until the queue is empty.
    fn drain(
        &self,
        tracks: &[Track],
        task_rx: &Receiver<Range<usize>>,
        result_tx: &Sender<ChunkResult>,
    ) {
        while let Ok(range) = task_rx.recv() {
            let mut metrics = MatchMetrics::default();
            let start = range.start;
            let matches = self.stations.match_range(
                self.field,
                &self.extrapolator,
                start,
                &tracks[range],
                &mut metrics,
            );
            let _ = result_tx.send((start, matches, metrics));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector, UniformField};
    use muex_propagator::{PropagationDirection, TrajectoryStateOnSurface};

    /// Reaches every surface at a position encoding the track's px.
    struct EchoPx(PropagationDirection);

    impl Propagator for EchoPx {
        fn name(&self) -> &str {
            "echo_px"
        }

        fn direction(&self) -> PropagationDirection {
            self.0
        }

        fn propagate(
            &self,
            state: &FreeTrajectoryState<'_>,
            _surface: &Surface,
        ) -> TrajectoryStateOnSurface {
            TrajectoryStateOnSurface::valid(
                GlobalPoint::new(state.momentum().x, 0.0, 0.0),
                state.momentum(),
                state.charge(),
            )
        }
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track::new(GlobalPoint::ZERO, GlobalVector::new(i as f64, 0.0, 1.0), 1))
            .collect()
    }

    fn assert_in_order(matches: &[TrackMatch], n: usize) {
        assert_eq!(matches.len(), n);
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.track_index, i);
            let x = m.outcomes()[0].hit().unwrap().position().x;
            assert_eq!(x, i as f64);
        }
    }

    #[test]
    fn parallel_preserves_order() {
        let field = UniformField::zero();
        let along = EchoPx(PropagationDirection::Along);
        let opposite = EchoPx(PropagationDirection::Opposite);
        let matcher =
            ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let input = tracks(103);
        let batch = BatchConfig {
            worker_count: Some(4),
            chunk_size: 7,
        };
        let report = matcher.match_tracks_parallel(&input, &batch);

        assert_in_order(&report.matches, 103);
        assert_eq!(report.metrics.tracks, 103);
        assert_eq!(report.metrics.along_hits, 309);
    }

    #[test]
    fn calling_thread_finishes_all_chunks_without_helpers() {
        let field = UniformField::zero();
        let along = EchoPx(PropagationDirection::Along);
        let opposite = EchoPx(PropagationDirection::Opposite);
        let matcher =
            ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let input = tracks(50);

        let chunks = matcher.run_pool(&input, 7, 0);
        assert_eq!(chunks.len(), 8);
        let starts: Vec<usize> = chunks.iter().map(|(start, _, _)| *start).collect();
        assert_eq!(starts, [0, 7, 14, 21, 28, 35, 42, 49]);
        let tracks_seen: u64 = chunks.iter().map(|(_, _, m)| m.tracks).sum();
        assert_eq!(tracks_seen, 50);
        let matches: Vec<TrackMatch> = chunks.into_iter().flat_map(|(_, m, _)| m).collect();
        assert_in_order(&matches, 50);
    }

    #[test]
    fn single_chunk_runs_inline() {
        let field = UniformField::zero();
        let along = EchoPx(PropagationDirection::Along);
        let opposite = EchoPx(PropagationDirection::Opposite);
        let matcher =
            ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let input = tracks(5);
        let report = matcher.match_tracks_parallel(&input, &BatchConfig::default());
        let sequential = matcher.match_tracks(&input);
        assert_eq!(report.matches, sequential.matches);
    }

    #[test]
    fn empty_batch() {
        let field = UniformField::zero();
        let along = EchoPx(PropagationDirection::Along);
        let opposite = EchoPx(PropagationDirection::Opposite);
        let matcher =
            ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let report = matcher.match_tracks_parallel(&[], &BatchConfig::default());
        assert!(report.matches.is_empty());
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let field = UniformField::zero();
        let along = EchoPx(PropagationDirection::Along);
        let opposite = EchoPx(PropagationDirection::Opposite);
        let err = ParallelMatcher::new(StationConfig::new(), &field, &along, &opposite).err();
        assert_eq!(err, Some(ConfigError::NoStations));
    }
}
