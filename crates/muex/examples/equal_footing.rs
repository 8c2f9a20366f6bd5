//! Extrapolate a handful of tracks to the reference muon stations and
//! print the trigger-style coordinates of each hit.
//!
//! Uses straight-line propagators, which are exact in a zero field.
//!
//! Run with: `cargo run -p muex --example equal_footing`

use muex::prelude::*;
use muex_test_utils::{random_tracks, StraightLinePropagator};

fn main() -> Result<(), ConfigError> {
    let field = UniformField::zero();
    let along = StraightLinePropagator::along();
    let opposite = StraightLinePropagator::opposite();
    let matcher = ParallelMatcher::new(StationConfig::reference(), &field, &along, &opposite)?;

    let tracks = random_tracks(7, 5);
    let report = matcher.match_tracks_parallel(&tracks, &BatchConfig::default());

    for m in &report.matches {
        let t = &tracks[m.track_index];
        println!("track {} (pT {:.1}, q {:+})", m.track_index, t.pt(), t.charge);
        for (name, outcome) in report.stations.iter().zip(m.outcomes()) {
            match outcome {
                StationOutcome::Hit(hit) => println!(
                    "  {name:>9}: r {:8.2}  phi {:6.4}  z {:8.2}  ({})",
                    hit.coords.r, hit.coords.phi, hit.coords.z, hit.resolved_by
                ),
                StationOutcome::Missed => println!("  {name:>9}: no intersection"),
            }
        }
    }

    let m = &report.metrics;
    println!(
        "{} extrapolations: {} along, {} opposite, {} missed",
        m.extrapolations(),
        m.along_hits,
        m.opposite_hits,
        m.misses
    );
    Ok(())
}
