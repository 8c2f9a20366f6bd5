//! Station layout, batch settings, and configuration errors.
//!
//! [`StationConfig`] is the builder input for a [`StationMatcher`](crate::StationMatcher).
//! [`validate()`](StationConfig::validate) checks every surface once at
//! construction, so malformed stations are rejected before any track is
//! processed.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use muex_surface::{build_cylinder, build_plane, Surface, SurfaceError};

/// Longitudinal position of the positive-side second endcap station.
pub const ME2_PLUS_Z: f64 = 790.0;
/// Longitudinal position of the negative-side second endcap station.
pub const ME2_MINUS_Z: f64 = -790.0;
/// Radius of the second barrel station.
pub const MB2_RADIUS: f64 = 500.0;

// ── SurfaceSpec ───────────────────────────────────────────────────

/// Configuration-level description of a station surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceSpec {
    /// A plane through (0, 0, z), normal along the beam axis.
    Plane {
        /// Longitudinal position.
        z: f64,
    },
    /// A cylinder of radius `rho` around the beam axis.
    Cylinder {
        /// Radius.
        rho: f64,
    },
}

impl SurfaceSpec {
    /// Build the surface through the surface factory.
    pub fn build(&self) -> Result<Surface, SurfaceError> {
        match *self {
            Self::Plane { z } => Ok(build_plane(z).into()),
            Self::Cylinder { rho } => Ok(build_cylinder(rho)?.into()),
        }
    }
}

// ── StationConfig ─────────────────────────────────────────────────

/// Ordered set of named station surfaces.
///
/// Insertion order is the order outcomes appear in every
/// [`TrackMatch`](crate::TrackMatch). Re-inserting a name replaces its
/// surface in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StationConfig {
    stations: IndexMap<String, SurfaceSpec>,
}

impl StationConfig {
    /// An empty config. Fails validation until a station is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard layout: `me2_plus`, `me2_minus`, `mb2`.
    pub fn reference() -> Self {
        Self::new()
            .with_station("me2_plus", SurfaceSpec::Plane { z: ME2_PLUS_Z })
            .with_station("me2_minus", SurfaceSpec::Plane { z: ME2_MINUS_Z })
            .with_station("mb2", SurfaceSpec::Cylinder { rho: MB2_RADIUS })
    }

    /// Add or replace a station, builder style.
    pub fn with_station(mut self, name: impl Into<String>, spec: SurfaceSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Add or replace a station, returning the previous spec for `name`.
    pub fn insert(&mut self, name: impl Into<String>, spec: SurfaceSpec) -> Option<SurfaceSpec> {
        self.stations.insert(name.into(), spec)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// `true` if no station is configured.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Surface spec for a station.
    pub fn get(&self, name: &str) -> Option<&SurfaceSpec> {
        self.stations.get(name)
    }

    /// Position of a station in the outcome order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.stations.get_index_of(name)
    }

    /// Station names in outcome order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.keys().map(String::as_str)
    }

    /// Stations in outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SurfaceSpec)> {
        self.stations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_surfaces().map(drop)
    }

    /// Validate while building every surface once, in outcome order.
    pub(crate) fn build_surfaces(&self) -> Result<Vec<Surface>, ConfigError> {
        if self.stations.is_empty() {
            return Err(ConfigError::NoStations);
        }
        self.stations
            .iter()
            .map(|(name, spec)| {
                if let SurfaceSpec::Plane { z } = *spec {
                    if !z.is_finite() {
                        return Err(ConfigError::InvalidPlane {
                            station: name.clone(),
                            z,
                        });
                    }
                }
                spec.build().map_err(|source| ConfigError::Surface {
                    station: name.clone(),
                    source,
                })
            })
            .collect()
    }
}

// ── BatchConfig ───────────────────────────────────────────────────

/// Settings for [`ParallelMatcher::match_tracks_parallel`](crate::ParallelMatcher::match_tracks_parallel).
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
    /// Tracks handed to a worker per task. Default: 64.
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            chunk_size: 64,
        }
    }
}

impl BatchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }

    /// Chunk size, never zero.
    pub fn resolved_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while setting up station matching.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No stations configured.
    NoStations,
    /// A plane station has a non-finite z.
    InvalidPlane {
        /// Station name.
        station: String,
        /// The rejected position.
        z: f64,
    },
    /// A station surface could not be built.
    Surface {
        /// Station name.
        station: String,
        /// The underlying construction error.
        source: SurfaceError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStations => write!(f, "no stations configured"),
            Self::InvalidPlane { station, z } => {
                write!(f, "station '{station}': plane z must be finite, got {z}")
            }
            Self::Surface { station, source } => write!(f, "station '{station}': {source}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface { source, .. } => Some(source),
            _ => None,
        }
    }
}
