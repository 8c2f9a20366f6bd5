//! Analytic straight-line propagation.
//!
//! Ignores the field entirely, so results are exact only in a zero
//! field. Good enough to drive the extrapolator end to end.

use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector};
use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};
use muex_surface::Surface;

/// Below this, a direction component counts as zero.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Intersects the line through the state's position along its momentum
/// with the target surface, searching only in one sense of travel.
pub struct StraightLinePropagator {
    name: String,
    direction: PropagationDirection,
}

impl StraightLinePropagator {
    pub fn new(name: impl Into<String>, direction: PropagationDirection) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    pub fn along() -> Self {
        Self::new("straight_line_along", PropagationDirection::Along)
    }

    pub fn opposite() -> Self {
        Self::new("straight_line_opposite", PropagationDirection::Opposite)
    }

    /// Path length to a plane at local z = 0.
    fn plane_path(&self, origin: GlobalPoint, dir: GlobalVector) -> Option<f64> {
        if dir.z.abs() < PARALLEL_EPSILON {
            return None;
        }
        let s = -origin.z / dir.z;
        self.in_sense(s).then_some(s)
    }

    /// Path length to a cylinder of `radius` around the local z axis.
    fn cylinder_path(&self, origin: GlobalPoint, dir: GlobalVector, radius: f64) -> Option<f64> {
        let a = dir.x * dir.x + dir.y * dir.y;
        if a < PARALLEL_EPSILON {
            return None;
        }
        let b = 2.0 * (origin.x * dir.x + origin.y * dir.y);
        let c = origin.x * origin.x + origin.y * origin.y - radius * radius;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let sq = disc.sqrt();
        let near = (-b - sq) / (2.0 * a);
        let far = (-b + sq) / (2.0 * a);
        // Closest root in the searched sense.
        let candidates = match self.direction {
            PropagationDirection::Along => [near, far],
            PropagationDirection::Opposite => [far, near],
        };
        candidates.into_iter().find(|&s| self.in_sense(s))
    }

    fn in_sense(&self, s: f64) -> bool {
        s.is_finite() && s * self.direction.sign() >= 0.0
    }
}

impl Propagator for StraightLinePropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        state: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        let Some(dir) = state.direction() else {
            return TrajectoryStateOnSurface::Invalid;
        };
        let frame = surface.frame();
        let origin = frame.to_local(state.position());
        let local_dir = frame.vector_to_local(dir);
        let path = match surface {
            Surface::Plane(_) => self.plane_path(origin, local_dir),
            Surface::Cylinder(c) => self.cylinder_path(origin, local_dir, c.radius()),
        };
        match path {
            Some(s) => TrajectoryStateOnSurface::valid(
                state.position() + dir * s,
                state.momentum(),
                state.charge(),
            ),
            None => TrajectoryStateOnSurface::Invalid,
        }
    }
}
