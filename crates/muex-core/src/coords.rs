//! Cylindrical coordinates of an extrapolated position.
//!
//! Trigger primitives are reported in (r, phi) on endcap planes and in
//! (z, phi) on barrel cylinders, so offline positions are converted the
//! same way before matching.

use std::f64::consts::TAU;

use crate::GlobalPoint;

/// Map an angle into `[0, 2π)`.
///
/// `atan2` already returns values in `(-π, π]`; negative angles get one
/// full turn added.
pub fn normalize_phi(phi: f64) -> f64 {
    let wrapped = phi.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Planar radius, azimuth and longitudinal position of a global point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationCoordinates {
    /// Planar radius `sqrt(x² + y²)`.
    pub r: f64,
    /// Azimuth `atan2(y, x)` in `[0, 2π)`. Zero on the axis.
    pub phi: f64,
    /// Longitudinal coordinate.
    pub z: f64,
}

impl StationCoordinates {
    /// Convert a global position.
    ///
    /// # Examples
    ///
    /// ```
    /// use muex_core::{GlobalPoint, StationCoordinates};
    ///
    /// let c = StationCoordinates::from_global(GlobalPoint::new(0.0, -2.0, 790.0));
    /// assert_eq!(c.r, 2.0);
    /// assert!((c.phi - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    /// assert_eq!(c.z, 790.0);
    /// ```
    pub fn from_global(point: GlobalPoint) -> Self {
        Self {
            r: point.truncate().length(),
            phi: normalize_phi(point.y.atan2(point.x)),
            z: point.z,
        }
    }

    /// Convert back to a global position.
    pub fn to_global(&self) -> GlobalPoint {
        GlobalPoint::new(self.r * self.phi.cos(), self.r * self.phi.sin(), self.z)
    }
}
