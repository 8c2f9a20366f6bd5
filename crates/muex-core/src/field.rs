//! The magnetic field capability.

use crate::{GlobalPoint, GlobalVector};

/// A magnetic field model queried by propagators.
///
/// Implementations must be defined over the region spanned by every
/// target surface for extrapolation results to be meaningful. A model
/// that caches lookups in a `Cell` is fine for sequential use; parallel
/// matching takes `&(dyn MagneticField + Sync)`.
pub trait MagneticField: Send {
    /// Field vector at a global point.
    fn field_at(&self, point: GlobalPoint) -> GlobalVector;
}

/// A field with the same value everywhere.
///
/// `UniformField::zero()` is the field-free case; `solenoid(bz)` is the
/// idealised central field of a collider solenoid.
///
/// # Examples
///
/// ```
/// use muex_core::{GlobalPoint, MagneticField, UniformField};
///
/// let field = UniformField::solenoid(3.8);
/// let b = field.field_at(GlobalPoint::new(120.0, -40.0, 300.0));
/// assert_eq!(b.z, 3.8);
/// assert_eq!(b.x, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformField {
    value: GlobalVector,
}

impl UniformField {
    /// A uniform field with the given vector value.
    pub fn new(value: GlobalVector) -> Self {
        Self { value }
    }

    /// No field anywhere.
    pub fn zero() -> Self {
        Self::new(GlobalVector::ZERO)
    }

    /// A field of strength `bz` along the longitudinal axis.
    pub fn solenoid(bz: f64) -> Self {
        Self::new(GlobalVector::new(0.0, 0.0, bz))
    }

    /// The constant field vector.
    pub fn value(&self) -> GlobalVector {
        self.value
    }
}

impl MagneticField for UniformField {
    fn field_at(&self, _point: GlobalPoint) -> GlobalVector {
        self.value
    }
}
