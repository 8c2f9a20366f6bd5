//! Extrapolation of tracks to muon stations.
//!
//! Trigger-level muons are measured at the muon stations, while offline
//! tracks are reconstructed at the inner tracker. To compare them on an
//! equal footing, each offline track is extrapolated to the station
//! surfaces and converted to the coordinates the trigger reports.
//!
//! [`StationConfig::reference()`] describes the standard layout: the
//! second endcap station on both sides (planes at z = ±790) and the
//! second barrel station (cylinder at r = 500). A [`StationMatcher`]
//! applies a config to a sequence of tracks on the calling thread and
//! reports one [`StationOutcome`] per station per track. A
//! [`ParallelMatcher`] does the same with a worker pool, given a field
//! model and propagators that are `Sync`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod matcher;
pub mod metrics;
pub mod outcome;

pub use batch::ParallelMatcher;
pub use config::{BatchConfig, ConfigError, StationConfig, SurfaceSpec};
pub use matcher::{MatchReport, StationMatcher};
pub use metrics::MatchMetrics;
pub use outcome::{StationHit, StationOutcome, TrackMatch};
