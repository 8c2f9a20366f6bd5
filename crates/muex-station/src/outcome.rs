//! Per-station and per-track results.

use muex_core::{GlobalPoint, StationCoordinates};
use muex_propagator::{PropagationDirection, SurfaceState};
use smallvec::SmallVec;

/// A successful extrapolation to one station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationHit {
    /// The on-surface state (position and momentum).
    pub state: SurfaceState,
    /// Radius, azimuth and z of the intersection.
    pub coords: StationCoordinates,
    /// Which propagator found the intersection.
    pub resolved_by: PropagationDirection,
}

impl StationHit {
    /// Build a hit from an on-surface state.
    pub fn new(state: SurfaceState, resolved_by: PropagationDirection) -> Self {
        Self {
            coords: StationCoordinates::from_global(state.global_position()),
            state,
            resolved_by,
        }
    }

    /// Global position of the intersection.
    pub fn position(&self) -> GlobalPoint {
        self.state.global_position()
    }
}

/// Outcome of extrapolating one track to one station.
///
/// `Missed` is the explicit "no measurement" value; it never aliases a
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StationOutcome {
    /// The station surface was reached.
    Hit(StationHit),
    /// Neither propagation sense reached the station.
    Missed,
}

impl StationOutcome {
    /// `true` for [`Hit`](Self::Hit).
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// The hit, if any.
    pub fn hit(&self) -> Option<&StationHit> {
        match self {
            Self::Hit(h) => Some(h),
            Self::Missed => None,
        }
    }

    /// Station coordinates of the hit, if any.
    pub fn coords(&self) -> Option<StationCoordinates> {
        self.hit().map(|h| h.coords)
    }
}

/// All station outcomes for one track, in station config order.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackMatch {
    /// Index of the track in the input sequence.
    pub track_index: usize,
    outcomes: SmallVec<[StationOutcome; 4]>,
}

impl TrackMatch {
    pub(crate) fn new(track_index: usize, outcomes: SmallVec<[StationOutcome; 4]>) -> Self {
        Self {
            track_index,
            outcomes,
        }
    }

    /// Outcomes in station order.
    pub fn outcomes(&self) -> &[StationOutcome] {
        &self.outcomes
    }

    /// Outcome for the station at `index`.
    pub fn outcome(&self, index: usize) -> Option<&StationOutcome> {
        self.outcomes.get(index)
    }

    /// Number of stations reached.
    pub fn hit_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_hit()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muex_core::GlobalVector;
    use smallvec::smallvec;

    #[test]
    fn hit_derives_coordinates() {
        let state = SurfaceState::new(GlobalPoint::new(0.0, 500.0, 120.0), GlobalVector::Y, 1);
        let hit = StationHit::new(state, PropagationDirection::Along);
        assert_eq!(hit.coords.r, 500.0);
        assert!((hit.coords.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(hit.coords.z, 120.0);
        assert_eq!(hit.position(), state.global_position());
    }

    #[test]
    fn hit_at_origin_differs_from_miss() {
        let state = SurfaceState::new(GlobalPoint::ZERO, GlobalVector::Z, 1);
        let hit = StationOutcome::Hit(StationHit::new(state, PropagationDirection::Opposite));
        assert!(hit.is_hit());
        assert_ne!(hit, StationOutcome::Missed);
        assert_eq!(StationOutcome::Missed.coords(), None);
    }

    #[test]
    fn track_match_counts_hits() {
        let state = SurfaceState::new(GlobalPoint::new(0.0, 0.0, 790.0), GlobalVector::Z, 1);
        let m = TrackMatch::new(
            3,
            smallvec![
                StationOutcome::Hit(StationHit::new(state, PropagationDirection::Along)),
                StationOutcome::Missed,
                StationOutcome::Missed,
            ],
        );
        assert_eq!(m.track_index, 3);
        assert_eq!(m.hit_count(), 1);
        assert_eq!(m.outcomes().len(), 3);
        assert!(m.outcome(3).is_none());
    }
}
