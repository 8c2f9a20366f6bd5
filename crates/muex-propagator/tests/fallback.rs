//! Integration test: along/opposite fallback order of the extrapolator.
//!
//! Drives [`Extrapolator`] with scripted stubs and with straight-line
//! propagators in a zero field, covering the short-circuit, the
//! fallback, the double miss, and repeatability.

use muex_core::{FreeTrajectoryState, GlobalPoint, GlobalVector, Track, UniformField};
use muex_propagator::{
    extrapolate, Extrapolator, PropagationDirection, TrajectoryStateOnSurface,
};
use muex_surface::{build_cylinder, build_plane, Surface};
use muex_test_utils::{
    longitudinal_track, random_tracks, CountingPropagator, FixedPropagator, InvalidPropagator,
    PanickingPropagator, StraightLinePropagator,
};
use proptest::prelude::*;

fn reference_surfaces() -> [Surface; 3] {
    [
        build_plane(790.0).into(),
        build_plane(-790.0).into(),
        build_cylinder(500.0).unwrap().into(),
    ]
}

// ── Scripted stubs ──────────────────────────────────────────────────

#[test]
fn invalid_along_valid_opposite_returns_opposite() {
    let p = GlobalPoint::new(12.0, -3.0, -790.0);
    let along = InvalidPropagator::new(PropagationDirection::Along);
    let opposite = FixedPropagator::new(PropagationDirection::Opposite, p);
    let field = UniformField::solenoid(3.8);
    let state = FreeTrajectoryState::from_track(&longitudinal_track(), &field);

    let out = extrapolate(&state, &build_plane(-790.0).into(), &along, &opposite);
    assert_eq!(out.global_position(), Some(p));
    assert_eq!(out.global_momentum(), Some(state.momentum()));
}

#[test]
fn both_invalid_returns_invalid() {
    let along = InvalidPropagator::new(PropagationDirection::Along);
    let opposite = InvalidPropagator::new(PropagationDirection::Opposite);
    let field = UniformField::zero();
    let state = FreeTrajectoryState::from_track(&longitudinal_track(), &field);

    for surface in reference_surfaces() {
        let out = extrapolate(&state, &surface, &along, &opposite);
        assert_eq!(out, TrajectoryStateOnSurface::Invalid);
    }
}

#[test]
fn valid_along_never_touches_opposite() {
    let q = GlobalPoint::new(0.0, 1.0, 790.0);
    let along = FixedPropagator::new(PropagationDirection::Along, q);
    let opposite = PanickingPropagator::new(PropagationDirection::Opposite);
    let field = UniformField::zero();
    let state = FreeTrajectoryState::from_track(&longitudinal_track(), &field);

    for surface in reference_surfaces() {
        let out = extrapolate(&state, &surface, &along, &opposite);
        assert_eq!(out.global_position(), Some(q));
    }
}

#[test]
#[should_panic(expected = "PanickingPropagator invoked")]
fn invalid_along_does_reach_opposite() {
    let along = InvalidPropagator::new(PropagationDirection::Along);
    let opposite = PanickingPropagator::new(PropagationDirection::Opposite);
    let field = UniformField::zero();
    let state = FreeTrajectoryState::from_track(&longitudinal_track(), &field);
    let _ = extrapolate(&state, &build_plane(790.0).into(), &along, &opposite);
}

#[test]
fn each_call_is_one_or_two_attempts() {
    let along = CountingPropagator::new(StraightLinePropagator::along());
    let opposite = CountingPropagator::new(StraightLinePropagator::opposite());
    let ex = Extrapolator::new(&along, &opposite);
    let field = UniformField::zero();
    let state = FreeTrajectoryState::from_track(&longitudinal_track(), &field);
    let [plus, minus, barrel] = reference_surfaces();

    // Resolved forward: one call.
    assert!(ex.extrapolate(&state, &plus).is_valid());
    assert_eq!((along.calls(), opposite.calls()), (1, 0));

    // Resolved backward: one more of each.
    assert!(ex.extrapolate(&state, &minus).is_valid());
    assert_eq!((along.calls(), opposite.calls()), (2, 1));

    // Missed: still exactly one more of each.
    assert!(!ex.extrapolate(&state, &barrel).is_valid());
    assert_eq!((along.calls(), opposite.calls()), (3, 2));
}

// ── End to end with straight lines ──────────────────────────────────

#[test]
fn longitudinal_track_end_to_end() {
    let along = StraightLinePropagator::along();
    let opposite = StraightLinePropagator::opposite();
    let field = UniformField::zero();
    let track = Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1);
    let state = FreeTrajectoryState::from_track(&track, &field);
    let ex = Extrapolator::new(&along, &opposite);

    let plus = ex.extrapolate_traced(&state, &build_plane(790.0).into());
    assert_eq!(plus.state.global_position(), Some(GlobalPoint::new(0.0, 0.0, 790.0)));
    assert_eq!(plus.resolved_by, Some(PropagationDirection::Along));

    let minus = ex.extrapolate_traced(&state, &build_plane(-790.0).into());
    assert_eq!(minus.state.global_position(), Some(GlobalPoint::new(0.0, 0.0, -790.0)));
    assert_eq!(minus.resolved_by, Some(PropagationDirection::Opposite));

    let barrel = ex.extrapolate_traced(&state, &build_cylinder(500.0).unwrap().into());
    assert_eq!(barrel.state, TrajectoryStateOnSurface::Invalid);
    assert_eq!(barrel.resolved_by, None);
}

#[test]
fn interleaved_order_gives_same_results() {
    let along = StraightLinePropagator::along();
    let opposite = StraightLinePropagator::opposite();
    let ex = Extrapolator::new(&along, &opposite);
    let field = UniformField::zero();
    let tracks = random_tracks(42, 2);
    let surfaces = reference_surfaces();

    let mut sequential = Vec::new();
    for track in &tracks {
        let state = FreeTrajectoryState::from_track(track, &field);
        for surface in &surfaces {
            sequential.push(ex.extrapolate(&state, surface));
        }
    }

    // Surface-major, tracks alternating, built fresh each time.
    let mut interleaved = vec![TrajectoryStateOnSurface::Invalid; sequential.len()];
    for (s, surface) in surfaces.iter().enumerate().rev() {
        for (t, track) in tracks.iter().enumerate().rev() {
            let state = FreeTrajectoryState::from_track(track, &field);
            interleaved[t * surfaces.len() + s] = ex.extrapolate(&state, surface);
        }
    }

    assert_eq!(sequential, interleaved);
}

proptest! {
    #[test]
    fn extrapolation_is_deterministic(seed in any::<u64>()) {
        let along = StraightLinePropagator::along();
        let opposite = StraightLinePropagator::opposite();
        let ex = Extrapolator::new(&along, &opposite);
        let field = UniformField::zero();
        let track = random_tracks(seed, 1)[0];
        let state = FreeTrajectoryState::from_track(&track, &field);
        for surface in reference_surfaces() {
            let first = ex.extrapolate(&state, &surface);
            let second = ex.extrapolate(&state, &surface);
            prop_assert_eq!(first, second);
            if let Some(p) = first.global_position() {
                prop_assert!(surface.contains(p, 1e-6));
            }
        }
    }

    #[test]
    fn non_longitudinal_tracks_reach_every_surface(seed in any::<u64>()) {
        // Every random track starts inside the barrel with pT > 0 and
        // finite eta, so straight lines cross all three surfaces in one
        // sense or the other.
        let along = StraightLinePropagator::along();
        let opposite = StraightLinePropagator::opposite();
        let ex = Extrapolator::new(&along, &opposite);
        let field = UniformField::zero();
        let track = random_tracks(seed, 1)[0];
        let state = FreeTrajectoryState::from_track(&track, &field);
        for surface in reference_surfaces() {
            prop_assert!(ex.extrapolate(&state, &surface).is_valid());
        }
    }
}
