//! Propagator trait and extrapolation engine for muex.
//!
//! A [`Propagator`] moves a free trajectory state onto a target surface
//! in one sense of travel. The [`Extrapolator`] pairs an along-momentum
//! and an opposite-momentum propagator and tries them in that order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod extrapolate;
pub mod on_surface;
pub mod propagator;

pub use extrapolate::{extrapolate, Extrapolation, Extrapolator};
pub use on_surface::{SurfaceState, TrajectoryStateOnSurface};
pub use propagator::{PropagationDirection, Propagator};
