//! The free (surface-unconstrained) trajectory state.

use std::fmt;

use crate::field::MagneticField;
use crate::track::Track;
use crate::{GlobalPoint, GlobalVector};

/// A particle's position, momentum and charge, bound to a field model.
///
/// This is the starting point of every extrapolation. It is built once
/// per track and never mutated; the same state is handed to each target
/// surface in turn. Construction is total: degenerate kinematics such
/// as a zero momentum are accepted here and left to the propagator,
/// which reports them as an invalid result.
///
/// # Examples
///
/// ```
/// use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector, Track, UniformField};
///
/// let field = UniformField::solenoid(3.8);
/// let track = Track::new(GlobalPoint::new(1.0, 2.0, 3.0), GlobalVector::new(0.0, 5.0, 5.0), -1);
/// let state = FreeTrajectoryState::from_track(&track, &field);
///
/// assert_eq!(state.position(), track.inner_position);
/// assert_eq!(state.momentum(), track.inner_momentum);
/// assert_eq!(state.charge(), -1);
/// ```
#[derive(Clone, Copy)]
pub struct FreeTrajectoryState<'f> {
    position: GlobalPoint,
    momentum: GlobalVector,
    charge: i32,
    field: &'f dyn MagneticField,
}

impl<'f> FreeTrajectoryState<'f> {
    /// Create a state from explicit kinematics.
    pub fn new(
        position: GlobalPoint,
        momentum: GlobalVector,
        charge: i32,
        field: &'f dyn MagneticField,
    ) -> Self {
        Self {
            position,
            momentum,
            charge,
            field,
        }
    }

    /// Build the starting state of a track: its inner position, inner
    /// momentum and charge, verbatim.
    pub fn from_track(track: &Track, field: &'f dyn MagneticField) -> Self {
        Self::new(
            track.inner_position,
            track.inner_momentum,
            track.charge,
            field,
        )
    }

    /// Global position.
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    /// Global momentum.
    pub fn momentum(&self) -> GlobalVector {
        self.momentum
    }

    /// Signed charge.
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// The field model this state travels through.
    pub fn field(&self) -> &'f dyn MagneticField {
        self.field
    }

    /// Field at the state's position.
    pub fn field_at_position(&self) -> GlobalVector {
        self.field.field_at(self.position)
    }

    /// Unit vector along the momentum, or `None` for a zero (or
    /// non-finite) momentum.
    pub fn direction(&self) -> Option<GlobalVector> {
        self.momentum.try_normalize()
    }

    /// Total momentum `|p|`.
    pub fn momentum_magnitude(&self) -> f64 {
        self.momentum.length()
    }

    /// Transverse momentum `sqrt(px² + py²)`.
    pub fn transverse_momentum(&self) -> f64 {
        self.momentum.truncate().length()
    }
}

impl fmt::Debug for FreeTrajectoryState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeTrajectoryState")
            .field("position", &self.position)
            .field("momentum", &self.momentum)
            .field("charge", &self.charge)
            .finish_non_exhaustive()
    }
}
