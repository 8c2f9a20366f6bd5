//! The polymorphic [`Surface`] handed to propagators.

use std::fmt;

use muex_core::GlobalPoint;

use crate::cylinder::Cylinder;
use crate::frame::Frame;
use crate::plane::Plane;

/// Shape tag of a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// A [`Plane`].
    Plane,
    /// A [`Cylinder`].
    Cylinder,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane => write!(f, "plane"),
            Self::Cylinder => write!(f, "cylinder"),
        }
    }
}

/// A target surface for extrapolation.
///
/// Immutable. Propagators match on the variant to pick the matching
/// intersection solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    /// A flat surface.
    Plane(Plane),
    /// A circular cylinder.
    Cylinder(Cylinder),
}

impl Surface {
    /// Shape of this surface.
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Plane(_) => SurfaceKind::Plane,
            Self::Cylinder(_) => SurfaceKind::Cylinder,
        }
    }

    /// Local frame of the surface.
    pub fn frame(&self) -> &Frame {
        match self {
            Self::Plane(p) => p.frame(),
            Self::Cylinder(c) => c.frame(),
        }
    }

    /// Signed distance of a global point from the surface.
    pub fn signed_distance(&self, point: GlobalPoint) -> f64 {
        match self {
            Self::Plane(p) => p.signed_distance(point),
            Self::Cylinder(c) => c.signed_distance(point),
        }
    }

    /// Whether `point` lies within `tolerance` of the surface.
    pub fn contains(&self, point: GlobalPoint, tolerance: f64) -> bool {
        self.signed_distance(point).abs() <= tolerance
    }

    /// The plane, if this is one.
    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Self::Plane(p) => Some(p),
            Self::Cylinder(_) => None,
        }
    }

    /// The cylinder, if this is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Self::Cylinder(c) => Some(c),
            Self::Plane(_) => None,
        }
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

impl From<Cylinder> for Surface {
    fn from(cylinder: Cylinder) -> Self {
        Self::Cylinder(cylinder)
    }
}
