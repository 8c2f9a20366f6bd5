//! Dual-direction extrapolation.
//!
//! A helix can meet a plane or cylinder while travelling in either sense
//! relative to its stored momentum. The engine asks the along-momentum
//! propagator first and only falls back to the opposite one when that
//! fails: two attempts, in order, with no retry loop and no caching.

use muex_core::FreeTrajectoryState;
use muex_surface::Surface;

use crate::on_surface::TrajectoryStateOnSurface;
use crate::propagator::{PropagationDirection, Propagator};

/// Result of [`Extrapolator::extrapolate_traced`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrapolation {
    /// The on-surface result.
    pub state: TrajectoryStateOnSurface,
    /// Which propagator produced a valid result, or `None` if neither did.
    pub resolved_by: Option<PropagationDirection>,
}

/// Pairs an along-momentum and an opposite-momentum propagator.
///
/// Holds only shared references, so it is `Copy`. The default
/// `Extrapolator<'p>` borrows `dyn Propagator` and suits single-threaded
/// use, including propagators with unsynchronised scratch state.
/// `Extrapolator<'p, dyn Propagator + Sync>` is itself `Sync` and may be
/// shared across worker threads.
///
/// # Examples
///
/// ```
/// use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector, UniformField};
/// use muex_propagator::{
///     Extrapolator, PropagationDirection, Propagator, TrajectoryStateOnSurface,
/// };
/// use muex_surface::{build_plane, Surface};
///
/// struct Fixed(PropagationDirection, Option<f64>);
///
/// impl Propagator for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn direction(&self) -> PropagationDirection { self.0 }
///     fn propagate(&self, s: &FreeTrajectoryState<'_>, _: &Surface) -> TrajectoryStateOnSurface {
///         match self.1 {
///             Some(z) => TrajectoryStateOnSurface::valid(
///                 GlobalPoint::new(0.0, 0.0, z), s.momentum(), s.charge()),
///             None => TrajectoryStateOnSurface::Invalid,
///         }
///     }
/// }
///
/// let along = Fixed(PropagationDirection::Along, None);
/// let opposite = Fixed(PropagationDirection::Opposite, Some(-790.0));
/// let field = UniformField::zero();
/// let state = FreeTrajectoryState::new(GlobalPoint::ZERO, GlobalVector::Z, 1, &field);
///
/// let result = Extrapolator::new(&along, &opposite)
///     .extrapolate(&state, &build_plane(-790.0).into());
/// assert_eq!(result.global_position(), Some(GlobalPoint::new(0.0, 0.0, -790.0)));
/// ```
pub struct Extrapolator<'p, P: ?Sized = dyn Propagator + 'p> {
    along: &'p P,
    opposite: &'p P,
}

impl<P: ?Sized> Clone for Extrapolator<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Extrapolator<'_, P> {}

impl<'p> Extrapolator<'p> {
    /// Pair two propagators.
    ///
    /// The order of the arguments is the order of the attempts. A
    /// propagator whose [`direction`](Propagator::direction) does not
    /// match its slot is accepted but logged at `warn` level.
    pub fn new(along: &'p dyn Propagator, opposite: &'p dyn Propagator) -> Self {
        Self::paired(along, opposite)
    }
}

impl<'p> Extrapolator<'p, dyn Propagator + Sync + 'p> {
    /// Pair two thread-safe propagators. Same checks as
    /// [`new`](Extrapolator::new).
    pub fn shared(
        along: &'p (dyn Propagator + Sync),
        opposite: &'p (dyn Propagator + Sync),
    ) -> Self {
        Self::paired(along, opposite)
    }
}

impl<'p, P: Propagator + ?Sized> Extrapolator<'p, P> {
    fn paired(along: &'p P, opposite: &'p P) -> Self {
        if along.direction() != PropagationDirection::Along {
            log::warn!(
                "propagator '{}' used in the along slot reports direction {}",
                along.name(),
                along.direction()
            );
        }
        if opposite.direction() != PropagationDirection::Opposite {
            log::warn!(
                "propagator '{}' used in the opposite slot reports direction {}",
                opposite.name(),
                opposite.direction()
            );
        }
        Self { along, opposite }
    }

    /// The first propagator tried.
    pub fn along(&self) -> &'p P {
        self.along
    }

    /// The fallback propagator.
    pub fn opposite(&self) -> &'p P {
        self.opposite
    }

    /// Propagate `state` onto `surface`, falling back to the opposite
    /// sense when the along sense finds no intersection.
    pub fn extrapolate(
        &self,
        state: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        self.extrapolate_traced(state, surface).state
    }

    /// Like [`extrapolate`](Self::extrapolate), also reporting which
    /// propagator produced the result.
    pub fn extrapolate_traced(
        &self,
        state: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> Extrapolation {
        let forward = self.along.propagate(state, surface);
        if forward.is_valid() {
            return Extrapolation {
                state: forward,
                resolved_by: Some(PropagationDirection::Along),
            };
        }

        log::debug!(
            "'{}' found no {} intersection, retrying with '{}'",
            self.along.name(),
            surface.kind(),
            self.opposite.name()
        );
        let backward = self.opposite.propagate(state, surface);
        let resolved_by = backward
            .is_valid()
            .then_some(PropagationDirection::Opposite);
        Extrapolation {
            state: backward,
            resolved_by,
        }
    }
}

/// One-shot form of [`Extrapolator::extrapolate`].
pub fn extrapolate(
    state: &FreeTrajectoryState<'_>,
    surface: &Surface,
    along: &dyn Propagator,
    opposite: &dyn Propagator,
) -> TrajectoryStateOnSurface {
    Extrapolator::new(along, opposite).extrapolate(state, surface)
}
