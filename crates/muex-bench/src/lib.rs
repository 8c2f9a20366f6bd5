//! Benchmark profiles for the muex extrapolation workspace.
//!
//! - [`reference_tracks`]: 10K muon-like tracks from a fixed seed
//! - [`stress_tracks`]: 100K tracks for worker-pool scaling
//! - [`layered_config`]: the reference stations plus the other endcap
//!   and barrel layers, for wider per-track fan-out

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use muex_core::Track;
use muex_station::{StationConfig, SurfaceSpec};
use muex_test_utils::random_tracks;

/// Seed shared by all benchmark profiles.
pub const BENCH_SEED: u64 = 0x6d75_6578;

/// 10K tracks.
pub fn reference_tracks() -> Vec<Track> {
    random_tracks(BENCH_SEED, 10_000)
}

/// 100K tracks.
pub fn stress_tracks() -> Vec<Track> {
    random_tracks(BENCH_SEED, 100_000)
}

/// Four endcap planes per side and four barrel cylinders.
pub fn layered_config() -> StationConfig {
    let mut cfg = StationConfig::reference();
    for (i, z) in [600.0, 790.0, 920.0, 1030.0].into_iter().enumerate() {
        cfg.insert(format!("me{}_plus", i + 1), SurfaceSpec::Plane { z });
        cfg.insert(format!("me{}_minus", i + 1), SurfaceSpec::Plane { z: -z });
    }
    for (i, rho) in [420.0, 500.0, 600.0, 710.0].into_iter().enumerate() {
        cfg.insert(format!("mb{}", i + 1), SurfaceSpec::Cylinder { rho });
    }
    cfg
}
