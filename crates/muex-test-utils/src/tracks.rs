//! Deterministic track fixtures.

use muex_core::{GlobalPoint, GlobalVector, Track};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A purely longitudinal positive track from the origin:
/// position (0, 0, 0), momentum (0, 0, 10), charge +1.
pub fn longitudinal_track() -> Track {
    Track::new(GlobalPoint::ZERO, GlobalVector::new(0.0, 0.0, 10.0), 1)
}

/// `n` muon-like tracks drawn from a seeded ChaCha8 RNG.
///
/// Inner points sit near the beam spot; pT in [3, 100), |eta| < 2.4,
/// charge ±1. Identical seeds give identical tracks.
pub fn random_tracks(seed: u64, n: usize) -> Vec<Track> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let position = GlobalPoint::new(
                rng.random_range(-0.5..0.5),
                rng.random_range(-0.5..0.5),
                rng.random_range(-10.0..10.0),
            );
            let pt: f64 = rng.random_range(3.0..100.0);
            let eta: f64 = rng.random_range(-2.4..2.4);
            let phi: f64 = rng.random_range(0.0..std::f64::consts::TAU);
            let momentum = GlobalVector::new(pt * phi.cos(), pt * phi.sin(), pt * eta.sinh());
            let charge = if rng.random::<bool>() { 1 } else { -1 };
            Track::new(position, momentum, charge)
        })
        .collect()
}
