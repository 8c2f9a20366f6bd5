//! Positioned, oriented reference frames shared by all surfaces.

use muex_core::{GlobalPoint, GlobalVector};

use crate::error::SurfaceError;

/// Orientation of a surface.
///
/// Columns are the surface's local x, y and z axes expressed in the
/// global frame, so `global = position + rotation * local`.
pub type Rotation = glam::DMat3;

/// Tolerance on `RᵀR = I` accepted by [`Frame::new`].
const ORTHONORMAL_TOLERANCE: f64 = 1e-9;

/// A local coordinate frame: an origin plus an orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    position: GlobalPoint,
    rotation: Rotation,
}

impl Frame {
    /// Create a frame, checking that `position` is finite and that
    /// `rotation` is a proper rotation.
    pub fn new(position: GlobalPoint, rotation: Rotation) -> Result<Self, SurfaceError> {
        if !position.is_finite() {
            return Err(SurfaceError::NonFinitePosition);
        }
        let orthonormal = rotation.is_finite()
            && (rotation.transpose() * rotation)
                .abs_diff_eq(Rotation::IDENTITY, ORTHONORMAL_TOLERANCE)
            && rotation.determinant() > 0.0;
        if !orthonormal {
            return Err(SurfaceError::InvalidRotation);
        }
        Ok(Self { position, rotation })
    }

    /// An axis-aligned frame at `position`.
    pub fn aligned(position: GlobalPoint) -> Self {
        Self {
            position,
            rotation: Rotation::IDENTITY,
        }
    }

    /// Origin of the frame.
    pub fn position(&self) -> GlobalPoint {
        self.position
    }

    /// Orientation of the frame.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The local z axis in global coordinates.
    pub fn local_z(&self) -> GlobalVector {
        self.rotation.z_axis
    }

    /// Express a global point in this frame.
    pub fn to_local(&self, point: GlobalPoint) -> GlobalPoint {
        self.rotation.transpose() * (point - self.position)
    }

    /// Express a local point in the global frame.
    pub fn to_global(&self, local: GlobalPoint) -> GlobalPoint {
        self.position + self.rotation * local
    }

    /// Rotate a global vector into this frame (no translation).
    pub fn vector_to_local(&self, v: GlobalVector) -> GlobalVector {
        self.rotation.transpose() * v
    }

    /// Rotate a local vector into the global frame (no translation).
    pub fn vector_to_global(&self, v: GlobalVector) -> GlobalVector {
        self.rotation * v
    }
}
