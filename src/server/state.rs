//! Server shared state

use crate::quake::EarthquakeSource;
use std::time::Instant;

/// Shared state for the HTTP server
///
/// Read-only after construction; the source carries its own credential.
pub struct AppState<S> {
    /// Where queries are forwarded
    pub source: S,

    /// Upstream base URL, for status output
    pub upstream: String,

    started: Instant,
}

impl<S: EarthquakeSource> AppState<S> {
    /// Create new application state
    pub fn new(source: S, upstream: impl Into<String>) -> Self {
        Self {
            source,
            upstream: upstream.into(),
            started: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
