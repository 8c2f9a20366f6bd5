//! Scripted propagator fixtures.
//!
//! - [`FixedPropagator`]: always reaches the surface at a fixed position.
//! - [`InvalidPropagator`]: never reaches anything.
//! - [`PanickingPropagator`]: panics if invoked at all.
//! - [`CountingPropagator`]: wraps another propagator and counts calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use muex_core::{FreeTrajectoryState, GlobalPoint};
use muex_propagator::{PropagationDirection, Propagator, TrajectoryStateOnSurface};
use muex_surface::Surface;

/// Returns `Valid` at a fixed position, carrying the input momentum.
pub struct FixedPropagator {
    pub direction: PropagationDirection,
    pub position: GlobalPoint,
}

impl FixedPropagator {
    pub fn new(direction: PropagationDirection, position: GlobalPoint) -> Self {
        Self {
            direction,
            position,
        }
    }
}

impl Propagator for FixedPropagator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        state: &FreeTrajectoryState<'_>,
        _surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        TrajectoryStateOnSurface::valid(self.position, state.momentum(), state.charge())
    }
}

/// Always returns `Invalid`.
pub struct InvalidPropagator {
    pub direction: PropagationDirection,
}

impl InvalidPropagator {
    pub fn new(direction: PropagationDirection) -> Self {
        Self { direction }
    }
}

impl Propagator for InvalidPropagator {
    fn name(&self) -> &str {
        "invalid"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        _state: &FreeTrajectoryState<'_>,
        _surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        TrajectoryStateOnSurface::Invalid
    }
}

/// Panics on any call to `propagate`.
///
/// Placed in the opposite slot to prove the along result short-circuits.
pub struct PanickingPropagator {
    pub direction: PropagationDirection,
}

impl PanickingPropagator {
    pub fn new(direction: PropagationDirection) -> Self {
        Self { direction }
    }
}

impl Propagator for PanickingPropagator {
    fn name(&self) -> &str {
        "panicking"
    }

    fn direction(&self) -> PropagationDirection {
        self.direction
    }

    fn propagate(
        &self,
        _state: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        panic!("PanickingPropagator invoked on a {}", surface.kind());
    }
}

/// Forwards to an inner propagator and counts the calls.
pub struct CountingPropagator<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P: Propagator> CountingPropagator<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `propagate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Propagator> Propagator for CountingPropagator<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn direction(&self) -> PropagationDirection {
        self.inner.direction()
    }

    fn propagate(
        &self,
        state: &FreeTrajectoryState<'_>,
        surface: &Surface,
    ) -> TrajectoryStateOnSurface {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.propagate(state, surface)
    }
}
