//! Target surfaces for trajectory extrapolation.
//!
//! This crate defines the [`Surface`] enum (the shape a propagator is
//! asked to reach) along with its two variants and the factory used by
//! the station matcher.
//!
//! # Variants
//!
//! - [`Plane`]: a flat surface; its normal is the local z axis.
//! - [`Cylinder`]: a circular cylinder; its axis is the local z axis.
//!
//! # Factory
//!
//! [`build_plane`] and [`build_cylinder`] produce surfaces centred on the
//! detector axis with identity orientation. Both are cheap enough to call
//! per query.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cylinder;
pub mod error;
pub mod factory;
pub mod frame;
pub mod plane;
pub mod surface;

pub use cylinder::Cylinder;
pub use error::SurfaceError;
pub use factory::{build_cylinder, build_plane};
pub use frame::{Frame, Rotation};
pub use plane::Plane;
pub use surface::{Surface, SurfaceKind};
