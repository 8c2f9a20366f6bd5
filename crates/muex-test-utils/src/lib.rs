//! Test utilities and stub propagators for muex development.
//!
//! Provides a [`StraightLinePropagator`] for field-free scenarios,
//! scripted stubs for exercising the extrapolator's fallback order, and
//! deterministic track fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod straight_line;
pub mod tracks;

pub use fixtures::{CountingPropagator, FixedPropagator, InvalidPropagator, PanickingPropagator};
pub use straight_line::StraightLinePropagator;
pub use tracks::{longitudinal_track, random_tracks};
