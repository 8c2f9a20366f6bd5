//! Error types for surface construction.

use std::fmt;

/// Errors arising from surface construction.
///
/// Surfaces are static inputs, so these are caller programming errors:
/// they are reported once, at construction, and never coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A scalar parameter is outside its valid domain.
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the parameter must satisfy.
        expected: &'static str,
    },
    /// A surface position has a non-finite component.
    NonFinitePosition,
    /// A rotation matrix is not orthonormal and right-handed.
    InvalidRotation,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                name,
                value,
                expected,
            } => write!(f, "invalid argument {name} = {value}: expected {expected}"),
            Self::NonFinitePosition => write!(f, "surface position must be finite"),
            Self::InvalidRotation => {
                write!(f, "surface rotation must be a proper orthonormal matrix")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
