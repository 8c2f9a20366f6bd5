//! Sequential station matching.

use std::time::Instant;

use muex_core::{FreeTrajectoryState, MagneticField, Track};
use muex_propagator::{Extrapolator, Propagator, TrajectoryStateOnSurface};
use muex_surface::Surface;
use smallvec::SmallVec;

use crate::config::{ConfigError, StationConfig};
use crate::metrics::MatchMetrics;
use crate::outcome::{StationHit, StationOutcome, TrackMatch};

/// Results of matching a sequence of tracks.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchReport {
    /// One entry per input track, in input order.
    pub matches: Vec<TrackMatch>,
    /// Station names, in outcome order.
    pub stations: Vec<String>,
    /// Counters for the batch.
    pub metrics: MatchMetrics,
}

impl MatchReport {
    /// Outcome of track `track_index` at the station called `station`.
    pub fn outcome(&self, track_index: usize, station: &str) -> Option<&StationOutcome> {
        let s = self.stations.iter().position(|n| n == station)?;
        self.matches.get(track_index)?.outcome(s)
    }
}

/// Validated station names and their prebuilt surfaces, plus the
/// per-track matching shared by [`StationMatcher`] and
/// [`ParallelMatcher`](crate::ParallelMatcher).
#[derive(Clone, Debug)]
pub(crate) struct Stations {
    config: StationConfig,
    surfaces: Vec<Surface>,
}

impl Stations {
    /// Validate `config` and build each surface once.
    pub(crate) fn build(config: StationConfig) -> Result<Self, ConfigError> {
        let surfaces = config.build_surfaces()?;
        Ok(Self { config, surfaces })
    }

    pub(crate) fn config(&self) -> &StationConfig {
        &self.config
    }

    pub(crate) fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Build one free state and extrapolate it to every surface in order.
    pub(crate) fn match_track<P: Propagator + ?Sized>(
        &self,
        field: &dyn MagneticField,
        extrapolator: &Extrapolator<'_, P>,
        track_index: usize,
        track: &Track,
    ) -> TrackMatch {
        let state = FreeTrajectoryState::from_track(track, field);
        let outcomes: SmallVec<[StationOutcome; 4]> = self
            .surfaces
            .iter()
            .map(|surface| {
                let ex = extrapolator.extrapolate_traced(&state, surface);
                match (ex.state, ex.resolved_by) {
                    (TrajectoryStateOnSurface::Valid(s), Some(dir)) => {
                        StationOutcome::Hit(StationHit::new(s, dir))
                    }
                    _ => StationOutcome::Missed,
                }
            })
            .collect();
        TrackMatch::new(track_index, outcomes)
    }

    /// Match tracks `start..start + tracks.len()` and fold into `metrics`.
    pub(crate) fn match_range<P: Propagator + ?Sized>(
        &self,
        field: &dyn MagneticField,
        extrapolator: &Extrapolator<'_, P>,
        start: usize,
        tracks: &[Track],
        metrics: &mut MatchMetrics,
    ) -> Vec<TrackMatch> {
        tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let m = self.match_track(field, extrapolator, start + i, track);
                metrics.tracks += 1;
                for outcome in m.outcomes() {
                    metrics.record(outcome);
                }
                m
            })
            .collect()
    }

    /// Match every track in order on the calling thread.
    pub(crate) fn match_all<P: Propagator + ?Sized>(
        &self,
        field: &dyn MagneticField,
        extrapolator: &Extrapolator<'_, P>,
        tracks: &[Track],
    ) -> MatchReport {
        let started = Instant::now();
        let mut metrics = MatchMetrics::default();
        let matches = self.match_range(field, extrapolator, 0, tracks, &mut metrics);
        metrics.total_us = started.elapsed().as_micros() as u64;
        self.report(matches, metrics)
    }

    pub(crate) fn report(&self, matches: Vec<TrackMatch>, metrics: MatchMetrics) -> MatchReport {
        log::info!(
            "matched {} tracks to {} stations: {} along, {} opposite, {} missed in {}us",
            metrics.tracks,
            self.surfaces.len(),
            metrics.along_hits,
            metrics.opposite_hits,
            metrics.misses,
            metrics.total_us
        );
        MatchReport {
            matches,
            stations: self.config.names().map(str::to_owned).collect(),
            metrics,
        }
    }
}

/// Extrapolates tracks to a fixed set of station surfaces.
///
/// The field model and both propagators are borrowed from the caller,
/// who owns their lifecycle. They need not be `Sync`: a propagator with
/// unsynchronised scratch state is fine here, and the matcher only ever
/// calls it from the thread that owns the matcher. For a worker pool use
/// [`ParallelMatcher`](crate::ParallelMatcher).
///
/// # Examples
///
/// ```
/// use muex_core::{GlobalPoint, GlobalVector, Track, UniformField};
/// use muex_station::{StationConfig, StationMatcher};
/// use muex_test_utils::StraightLinePropagator;
///
/// let field = UniformField::zero();
/// let along = StraightLinePropagator::along();
/// let opposite = StraightLinePropagator::opposite();
/// let matcher =
///     StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
///
/// let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1);
/// let m = matcher.match_track(0, &track);
/// assert!(m.outcomes()[0].is_hit());
/// assert!(m.outcomes()[1].is_hit());
/// assert!(!m.outcomes()[2].is_hit());
/// ```
pub struct StationMatcher<'a> {
    stations: Stations,
    field: &'a dyn MagneticField,
    extrapolator: Extrapolator<'a>,
}

impl<'a> StationMatcher<'a> {
    /// Validate `config`, build its surfaces, and bind the capabilities.
    pub fn new(
        config: StationConfig,
        field: &'a dyn MagneticField,
        along: &'a dyn Propagator,
        opposite: &'a dyn Propagator,
    ) -> Result<Self, ConfigError> {
        let stations = Stations::build(config)?;
        log::debug!(
            "station matcher ready: {} stations, propagators '{}' / '{}'",
            stations.surfaces().len(),
            along.name(),
            opposite.name()
        );
        Ok(Self {
            stations,
            field,
            extrapolator: Extrapolator::new(along, opposite),
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

    /// The underlying extrapolator.
    pub fn extrapolator(&self) -> &Extrapolator<'a> {
        &self.extrapolator
    }

    /// Extrapolate one track to every station.
    ///
    /// `track_index` is recorded in the result so that matches can be
    /// traced back to their input. One free state is built and reused,
    /// read-only, for each station.
    pub fn match_track(&self, track_index: usize, track: &Track) -> TrackMatch {
        self.stations
            .match_track(self.field, &self.extrapolator, track_index, track)
    }

    /// Match every track in order on the calling thread.
    pub fn match_tracks(&self, tracks: &[Track]) -> MatchReport {
        self.stations.match_all(self.field, &self.extrapolator, tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceSpec;
    use muex_core::{GlobalPoint, GlobalVector, UniformField};
    use muex_propagator::PropagationDirection;
    use std::cell::Cell;

    /// Straight-line hits on planes only; never reaches cylinders.
    struct PlaneOnly(PropagationDirection);

    impl Propagator for PlaneOnly {
        fn name(&self) -> &str {
            "plane_only"
        }

        fn direction(&self) -> PropagationDirection {
            self.0
        }

        fn propagate(
            &self,
            state: &FreeTrajectoryState<'_>,
            surface: &Surface,
        ) -> TrajectoryStateOnSurface {
            let (Some(plane), Some(dir)) = (surface.as_plane(), state.direction()) else {
                return TrajectoryStateOnSurface::Invalid;
            };
            if dir.z == 0.0 {
                return TrajectoryStateOnSurface::Invalid;
            }
            let s = (plane.position().z - state.position().z) / dir.z;
            if s * self.0.sign() < 0.0 {
                return TrajectoryStateOnSurface::Invalid;
            }
            TrajectoryStateOnSurface::valid(
                state.position() + dir * s,
                state.momentum(),
                state.charge(),
            )
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let field = UniformField::zero();
        let along = PlaneOnly(PropagationDirection::Along);
        let opposite = PlaneOnly(PropagationDirection::Opposite);
        let cfg = StationConfig::new().with_station("mb2", SurfaceSpec::Cylinder { rho: -500.0 });
        let err = StationMatcher::new(cfg, &field, &along, &opposite).err();
        assert!(matches!(err, Some(ConfigError::Surface { .. })));
    }

    #[test]
    fn outcomes_follow_config_order() {
        let field = UniformField::zero();
        let along = PlaneOnly(PropagationDirection::Along);
        let opposite = PlaneOnly(PropagationDirection::Opposite);
        let matcher =
            StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(1.0, 0.0, 1.0), -1);
        let m = matcher.match_track(5, &track);

        assert_eq!(m.track_index, 5);
        let plus = m.outcomes()[0].hit().unwrap();
        assert!(plus.position().abs_diff_eq(GlobalPoint::new(790.0, 0.0, 790.0), 1e-9));
        assert_eq!(plus.resolved_by, PropagationDirection::Along);
        let minus = m.outcomes()[1].hit().unwrap();
        assert!(minus.position().abs_diff_eq(GlobalPoint::new(-790.0, 0.0, -790.0), 1e-9));
        assert_eq!(minus.resolved_by, PropagationDirection::Opposite);
        assert!((minus.coords.phi - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(m.outcomes()[2], StationOutcome::Missed);
    }

    #[test]
    fn report_metrics_and_lookup() {
        let field = UniformField::zero();
        let along = PlaneOnly(PropagationDirection::Along);
        let opposite = PlaneOnly(PropagationDirection::Opposite);
        let matcher =
            StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1);
        let report = matcher.match_tracks(&[track, track]);

        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].outcomes(), report.matches[1].outcomes());
        assert_eq!(report.metrics.tracks, 2);
        assert_eq!(report.metrics.along_hits, 2);
        assert_eq!(report.metrics.opposite_hits, 2);
        assert_eq!(report.metrics.misses, 2);
        assert_eq!(report.stations, ["me2_plus", "me2_minus", "mb2"]);
        assert!(report.outcome(1, "me2_minus").unwrap().is_hit());
        assert!(!report.outcome(1, "mb2").unwrap().is_hit());
        assert!(report.outcome(2, "mb2").is_none());
        assert!(report.outcome(0, "me1").is_none());
    }

    /// Counts calls in a `Cell`; usable only from one thread.
    struct CountingPlaneOnly {
        inner: PlaneOnly,
        calls: Cell<usize>,
    }

    impl Propagator for CountingPlaneOnly {
        fn name(&self) -> &str {
            "counting_plane_only"
        }

        fn direction(&self) -> PropagationDirection {
            self.inner.direction()
        }

        fn propagate(
            &self,
            state: &FreeTrajectoryState<'_>,
            surface: &Surface,
        ) -> TrajectoryStateOnSurface {
            self.calls.set(self.calls.get() + 1);
            self.inner.propagate(state, surface)
        }
    }

    #[test]
    fn stateful_propagators_match_sequentially() {
        let field = UniformField::zero();
        let along = CountingPlaneOnly {
            inner: PlaneOnly(PropagationDirection::Along),
            calls: Cell::new(0),
        };
        let opposite = CountingPlaneOnly {
            inner: PlaneOnly(PropagationDirection::Opposite),
            calls: Cell::new(0),
        };
        let matcher =
            StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1);
        let report = matcher.match_tracks(&[track, track]);

        assert_eq!(report.metrics.along_hits, 2);
        assert_eq!(report.metrics.opposite_hits, 2);
        // Every station is tried along; me2_minus and mb2 fall back.
        assert_eq!(along.calls.get(), 6);
        assert_eq!(opposite.calls.get(), 4);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let field = UniformField::zero();
        let along = PlaneOnly(PropagationDirection::Along);
        let opposite = PlaneOnly(PropagationDirection::Opposite);
        let matcher =
            StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
        let report = matcher.match_tracks(&[]);
        assert!(report.matches.is_empty());
        assert_eq!(report.metrics.extrapolations(), 0);
    }
}
