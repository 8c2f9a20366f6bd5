//! Flat target surfaces.

use muex_core::{GlobalPoint, GlobalVector};

use crate::error::SurfaceError;
use crate::frame::{Frame, Rotation};

/// A plane through a point, normal to its local z axis.
///
/// # Examples
///
/// ```
/// use muex_core::GlobalPoint;
/// use muex_surface::build_plane;
///
/// let plane = build_plane(790.0);
/// assert_eq!(plane.signed_distance(GlobalPoint::new(3.0, -4.0, 790.0)), 0.0);
/// assert_eq!(plane.signed_distance(GlobalPoint::new(0.0, 0.0, 800.0)), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    frame: Frame,
}

impl Plane {
    /// Create a plane through `position` with orientation `rotation`.
    pub fn new(position: GlobalPoint, rotation: Rotation) -> Result<Self, SurfaceError> {
        Ok(Self {
            frame: Frame::new(position, rotation)?,
        })
    }

    pub(crate) fn from_frame(frame: Frame) -> Self {
        Self { frame }
    }

    /// The plane's local frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// A point on the plane (the frame origin).
    pub fn position(&self) -> GlobalPoint {
        self.frame.position()
    }

    /// Unit normal in global coordinates.
    pub fn normal(&self) -> GlobalVector {
        self.frame.local_z()
    }

    /// Signed distance from the plane, positive on the normal side.
    pub fn signed_distance(&self, point: GlobalPoint) -> f64 {
        self.normal().dot(point - self.position())
    }
}
