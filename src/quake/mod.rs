//! Earthquake query proxy
//!
//! Forwards the two read queries (`recent`, `around`) to the backing
//! seismic-data REST API with the API key attached, and hands the response
//! body back untouched.
//!
//! ## Flex Point
//! Anything that can answer the two queries implements [`EarthquakeSource`].
//! [`client::QuakeClient`] is the HTTP implementation.

pub mod client;
pub mod credential;
pub mod query;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::Result;
use serde_json::value::RawValue;

pub use client::QuakeClient;
pub use credential::ApiKey;
pub use query::{AroundQuery, RecentQuery};

/// An opaque JSON document exactly as the backing API returned it
pub type Document = Box<RawValue>;

/// Trait for earthquake data sources
pub trait EarthquakeSource: Send + Sync {
    /// Short name for status output
    fn name(&self) -> &str;

    /// Earthquakes within the lookback window, above the magnitude floor
    fn recent(
        &self,
        query: &RecentQuery,
    ) -> impl std::future::Future<Output = Result<Document>> + Send;

    /// Earthquakes within `radius_km` of a coordinate
    fn around(
        &self,
        query: &AroundQuery,
    ) -> impl std::future::Future<Output = Result<Document>> + Send;
}
