//! Results of propagating onto a surface.

use muex_core::{GlobalPoint, GlobalVector};

/// A trajectory state constrained to lie on a target surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    position: GlobalPoint,
    momentum: GlobalVector,
    charge: i32,
}

impl SurfaceState {
    /// Create an on-surface state.
    pub fn new(position: GlobalPoint, momentum: GlobalVector, charge: i32) -> Self {
        Self {
            position,
            momentum,
            charge,
        }
    }

    /// Global position of the intersection.
    pub fn global_position(&self) -> GlobalPoint {
        self.position
    }

    /// Global momentum at the intersection.
    pub fn global_momentum(&self) -> GlobalVector {
        self.momentum
    }

    /// Signed charge.
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Unit direction of travel, or `None` for a zero momentum.
    pub fn global_direction(&self) -> Option<GlobalVector> {
        self.momentum.try_normalize()
    }
}

/// Outcome of propagating a state onto a surface.
///
/// `Invalid` is an ordinary, frequent result (the trajectory never
/// reaches the surface in the propagator's domain). It is kept distinct
/// from any position value, including the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrajectoryStateOnSurface {
    /// The surface was reached.
    Valid(SurfaceState),
    /// No intersection was found.
    Invalid,
}

impl TrajectoryStateOnSurface {
    /// Shorthand for a valid result.
    pub fn valid(position: GlobalPoint, momentum: GlobalVector, charge: i32) -> Self {
        Self::Valid(SurfaceState::new(position, momentum, charge))
    }

    /// `true` for [`Valid`](Self::Valid).
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The on-surface state, if valid.
    pub fn state(&self) -> Option<&SurfaceState> {
        match self {
            Self::Valid(s) => Some(s),
            Self::Invalid => None,
        }
    }

    /// The intersection position, if valid.
    pub fn global_position(&self) -> Option<GlobalPoint> {
        self.state().map(SurfaceState::global_position)
    }

    /// The momentum at the intersection, if valid.
    pub fn global_momentum(&self) -> Option<GlobalVector> {
        self.state().map(SurfaceState::global_momentum)
    }
}

impl From<Option<SurfaceState>> for TrajectoryStateOnSurface {
    fn from(state: Option<SurfaceState>) -> Self {
        match state {
            Some(s) => Self::Valid(s),
            None => Self::Invalid,
        }
    }
}
