//! Circular cylinder target surfaces.

use muex_core::{GlobalPoint, GlobalVector};

use crate::error::SurfaceError;
use crate::frame::{Frame, Rotation};

/// An infinitely long circular cylinder around its local z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    frame: Frame,
    radius: f64,
}

impl Cylinder {
    /// Create a cylinder with axis through `position` along the rotated
    /// local z axis.
    ///
    /// Returns `Err(SurfaceError::InvalidArgument)` if `radius` is
    /// negative or not finite.
    pub fn new(position: GlobalPoint, rotation: Rotation, radius: f64) -> Result<Self, SurfaceError> {
        let frame = Frame::new(position, rotation)?;
        Self::from_frame(frame, radius)
    }

    pub(crate) fn from_frame(frame: Frame, radius: f64) -> Result<Self, SurfaceError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SurfaceError::InvalidArgument {
                name: "radius",
                value: radius,
                expected: "a finite value >= 0",
            });
        }
        Ok(Self { frame, radius })
    }

    /// The cylinder's local frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// A point on the axis (the frame origin).
    pub fn position(&self) -> GlobalPoint {
        self.frame.position()
    }

    /// Unit axis direction in global coordinates.
    pub fn axis(&self) -> GlobalVector {
        self.frame.local_z()
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the axis minus the radius: positive outside.
    pub fn signed_distance(&self, point: GlobalPoint) -> f64 {
        self.frame.to_local(point).truncate().length() - self.radius
    }
}
