//! muex: extrapolation of muon tracks to detector surfaces.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all muex sub-crates. For most users, adding `muex` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use muex::prelude::*;
//!
//! // A propagator that only understands planes, moving in a straight line.
//! struct Straight(PropagationDirection);
//!
//! impl Propagator for Straight {
//!     fn name(&self) -> &str { "straight" }
//!     fn direction(&self) -> PropagationDirection { self.0 }
//!     fn propagate(&self, s: &FreeTrajectoryState<'_>, surface: &Surface) -> TrajectoryStateOnSurface {
//!         let (Some(plane), Some(d)) = (surface.as_plane(), s.direction()) else {
//!             return TrajectoryStateOnSurface::Invalid;
//!         };
//!         let path = (plane.position().z - s.position().z) / d.z;
//!         if !path.is_finite() || path * self.0.sign() < 0.0 {
//!             return TrajectoryStateOnSurface::Invalid;
//!         }
//!         TrajectoryStateOnSurface::valid(s.position() + d * path, s.momentum(), s.charge())
//!     }
//! }
//!
//! let field = UniformField::zero();
//! let along = Straight(PropagationDirection::Along);
//! let opposite = Straight(PropagationDirection::Opposite);
//!
//! let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1);
//! let state = FreeTrajectoryState::from_track(&track, &field);
//! let result = extrapolate(&state, &build_plane(-790.0).into(), &along, &opposite);
//! assert_eq!(result.global_position(), Some(GlobalPoint::new(0.0, 0.0, -790.0)));
//!
//! let matcher = StationMatcher::new(StationConfig::reference(), &field, &along, &opposite).unwrap();
//! let report = matcher.match_tracks(&[track]);
//! assert!(report.outcome(0, "me2_plus").unwrap().is_hit());
//! assert!(!report.outcome(0, "mb2").unwrap().is_hit());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `muex-core` | tracks, field model, free trajectory state, station coordinates |
//! | [`surface`] | `muex-surface` | planes, cylinders, surface factory |
//! | [`propagator`] | `muex-propagator` | propagator trait and extrapolation engine |
//! | [`station`] | `muex-station` | reference station matching |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`muex-core`).
pub use muex_core as types;

/// Target surfaces (`muex-surface`).
pub use muex_surface as surface;

/// Propagator trait and extrapolation engine (`muex-propagator`).
pub use muex_propagator as propagator;

/// Station matching (`muex-station`).
pub use muex_station as station;

/// Common imports for muex users.
///
/// ```rust
/// use muex::prelude::*;
/// ```
pub mod prelude {
    pub use muex_core::{
        FreeTrajectoryState, GlobalPoint, GlobalVector, MagneticField, StationCoordinates, Track,
        UniformField,
    };
    pub use muex_propagator::{
        extrapolate, Extrapolator, PropagationDirection, Propagator, SurfaceState,
        TrajectoryStateOnSurface,
    };
    pub use muex_station::{
        BatchConfig, ConfigError, MatchReport, ParallelMatcher, StationConfig, StationMatcher,
        StationOutcome, SurfaceSpec,
    };
    pub use muex_surface::{build_cylinder, build_plane, Cylinder, Plane, Surface, SurfaceError};
}
