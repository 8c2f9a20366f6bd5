//! The [`Propagator`] trait and [`PropagationDirection`] enum.
//!
//! Propagators are injected capabilities. muex never steps a trajectory
//! through a field itself; it only decides which propagator to ask and
//! in what order.

use std::fmt;

use muex_core::FreeTrajectoryState;
use muex_surface::Surface;

use crate::on_surface::TrajectoryStateOnSurface;

/// Sense of travel along a trajectory relative to its stored momentum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropagationDirection {
    /// Forward, following the momentum.
    Along,
    /// Backward, against the momentum.
    Opposite,
}

impl PropagationDirection {
    /// The other sense of travel.
    pub fn reversed(self) -> Self {
        match self {
            Self::Along => Self::Opposite,
            Self::Opposite => Self::Along,
        }
    }

    /// `+1.0` for along, `-1.0` for opposite.
    pub fn sign(self) -> f64 {
        match self {
            Self::Along => 1.0,
            Self::Opposite => -1.0,
        }
    }
}

impl fmt::Display for PropagationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Along => write!(f, "along"),
            Self::Opposite => write!(f, "opposite"),
        }
    }
}

/// Moves a free trajectory state onto a target surface.
///
/// # Contract
///
/// - `propagate()` MUST be deterministic: same state and surface give
///   the same result.
/// - Failure to reach the surface is returned as
///   [`TrajectoryStateOnSurface::Invalid`], never as a panic. A field
///   model that cannot be evaluated also folds into `Invalid`.
/// - `&self`: one instance serves every track and surface. A propagator
///   may keep scratch state behind interior mutability (`Cell`,
///   `RefCell`); it is then not `Sync`, and the caller serialises
///   access. Only parallel matching requires `Propagator + Sync`.
///
/// # Object safety
///
/// This trait is object-safe; the extrapolator holds `&dyn Propagator`
/// (or `&(dyn Propagator + Sync)` when shared across threads).
///
/// # Examples
///
/// A propagator that never reaches anything:
///
/// ```
/// use muex_core::FreeTrajectoryState;
/// use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};
/// use muex_surface::Surface;
///
/// struct Nowhere;
///
/// impl Propagator for Nowhere {
///     fn name(&self) -> &str { "nowhere" }
///
///     fn direction(&self) -> PropagationDirection { PropagationDirection::Along }
///
///     fn propagate(&self, _: &FreeTrajectoryState<'_>, _: &Surface) -> TrajectoryStateOnSurface {
///         TrajectoryStateOnSurface::Invalid
///     }
/// }
///
/// assert_eq!(Nowhere.name(), "nowhere");
/// ```
pub trait Propagator: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// The sense of travel this propagator searches in.
    fn direction(&self) -> PropagationDirection;

    /// Propagate `state` onto `surface`.
    fn propagate(&self, state: &FreeTrajectoryState<'_>, surface: &Surface)
        -> TrajectoryStateOnSurface;
}
