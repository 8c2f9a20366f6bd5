//! Input track kinematics.

use crate::{GlobalPoint, GlobalVector};

/// Kinematics of a reconstructed track at its innermost reference point.
///
/// Owned by the caller and read-only to every muex component. Duplicate
/// tracks are legal and are processed independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    /// Position of the innermost measurement.
    pub inner_position: GlobalPoint,
    /// Momentum at the innermost measurement.
    pub inner_momentum: GlobalVector,
    /// Signed charge in units of the elementary charge.
    pub charge: i32,
}

impl Track {
    /// Create a track from its inner position, inner momentum and charge.
    pub fn new(inner_position: GlobalPoint, inner_momentum: GlobalVector, charge: i32) -> Self {
        Self {
            inner_position,
            inner_momentum,
            charge,
        }
    }

    /// Transverse momentum `sqrt(px² + py²)` at the inner point.
    pub fn pt(&self) -> f64 {
        self.inner_momentum.truncate().length()
    }
}
