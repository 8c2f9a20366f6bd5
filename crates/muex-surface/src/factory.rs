//! Detector-axis surfaces used as extrapolation targets.

use muex_core::GlobalPoint;

use crate::cylinder::Cylinder;
use crate::error::SurfaceError;
use crate::frame::Frame;
use crate::plane::Plane;

/// A plane through `(0, 0, z)` with normal along the longitudinal axis.
///
/// Never fails. A non-finite `z` yields a plane no propagator can reach.
pub fn build_plane(z: f64) -> Plane {
    Plane::from_frame(Frame::aligned(GlobalPoint::new(0.0, 0.0, z)))
}

/// A cylinder of radius `rho` around the longitudinal axis.
///
/// Returns `Err(SurfaceError::InvalidArgument)` if `rho` is negative or
/// not finite.
///
/// # Examples
///
/// ```
/// use muex_surface::{build_cylinder, SurfaceError};
///
/// let barrel = build_cylinder(500.0).unwrap();
/// assert_eq!(barrel.radius(), 500.0);
///
/// assert!(matches!(
///     build_cylinder(-1.0),
///     Err(SurfaceError::InvalidArgument { .. })
/// ));
/// ```
pub fn build_cylinder(rho: f64) -> Result<Cylinder, SurfaceError> {
    Cylinder::from_frame(Frame::aligned(GlobalPoint::ZERO), rho)
}
