//! Core types for the muex trajectory extrapolation workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines
//! the values every other crate passes around: detector-frame vectors,
//! input [`Track`]s, the [`MagneticField`] capability, the
//! [`FreeTrajectoryState`] built from a track, and the
//! [`StationCoordinates`] derived from an extrapolated position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coords;
pub mod field;
pub mod state;
pub mod track;

pub use coords::{normalize_phi, StationCoordinates};
pub use field::{MagneticField, UniformField};
pub use state::FreeTrajectoryState;
pub use track::Track;

/// A point in the global detector frame.
///
/// Cartesian, right-handed, with z along the beam (longitudinal) axis.
pub type GlobalPoint = glam::DVec3;

/// A vector (momentum, field, direction) in the global detector frame.
pub type GlobalVector = glam::DVec3;
