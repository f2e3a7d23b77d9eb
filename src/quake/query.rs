//! Query parameters for the two earthquake endpoints
//!
//! Both structs deserialize with their defaults from any serde source (HTTP
//! query strings, tool-call arguments) and serialize in field order into the
//! outbound query string.

use crate::config::defaults::{
    DEFAULT_HOURS, DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE, DEFAULT_RADIUS_KM,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the recent-activity query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentQuery {
    /// Minimum magnitude
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    /// Lookback window in hours
    #[serde(default = "default_hours")]
    pub hours: i64,
    /// Maximum number of events
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Parameters for the radius-around-point query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AroundQuery {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Search radius in kilometres
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    /// Minimum magnitude
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    /// Maximum number of events
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_min_magnitude() -> f64 {
    DEFAULT_MIN_MAGNITUDE
}
fn default_hours() -> i64 {
    DEFAULT_HOURS
}
fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

impl Default for RecentQuery {
    fn default() -> Self {
        Self {
            min_magnitude: default_min_magnitude(),
            hours: default_hours(),
            limit: default_limit(),
        }
    }
}

impl RecentQuery {
    /// Check the documented ranges locally
    ///
    /// The proxy itself never calls this; the backing API is authoritative.
    pub fn validate(&self) -> Result<()> {
        check_min_magnitude(self.min_magnitude)?;
        if self.hours <= 0 {
            return Err(Error::InvalidQuery(format!(
                "hours must be positive, got {}",
                self.hours
            )));
        }
        check_limit(self.limit)
    }
}

impl AroundQuery {
    /// Query around a point with default radius, magnitude and limit
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            radius_km: default_radius_km(),
            min_magnitude: default_min_magnitude(),
            limit: default_limit(),
        }
    }

    /// Check the documented ranges locally
    ///
    /// Coordinates are range-checked here too, unlike in the forwarded request.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidQuery(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::InvalidQuery(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        if self.radius_km.is_nan() || self.radius_km < 0.0 {
            return Err(Error::InvalidQuery(format!(
                "radius_km must not be negative, got {}",
                self.radius_km
            )));
        }
        check_min_magnitude(self.min_magnitude)?;
        check_limit(self.limit)
    }
}

fn check_min_magnitude(value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(Error::InvalidQuery(format!(
            "min_magnitude must not be negative, got {}",
            value
        )));
    }
    Ok(())
}

fn check_limit(value: i64) -> Result<()> {
    if value <= 0 {
        return Err(Error::InvalidQuery(format!(
            "limit must be positive, got {}",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recent_defaults_from_empty_object() {
        let query: RecentQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query, RecentQuery::default());
        assert_eq!(query.min_magnitude, 0.0);
        assert_eq!(query.hours, 24);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_around_requires_coordinates() {
        assert!(serde_json::from_value::<AroundQuery>(json!({ "lat": 1.0 })).is_err());
        assert!(serde_json::from_value::<AroundQuery>(json!({ "lon": 1.0 })).is_err());
    }

    #[test]
    fn test_around_defaults() {
        let query: AroundQuery =
            serde_json::from_value(json!({ "lat": 34.05, "lon": -118.25 })).unwrap();
        assert_eq!(query, AroundQuery::new(34.05, -118.25));
        assert_eq!(query.radius_km, 300.0);
        assert_eq!(query.min_magnitude, 0.0);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_out_of_range_values_deserialize() {
        let query: AroundQuery = serde_json::from_value(json!({
            "lat": 123.0,
            "lon": -500.0,
            "radius_km": -1.0,
            "limit": 0
        }))
        .unwrap();
        assert_eq!(query.radius_km, -1.0);
        assert_eq!(query.limit, 0);

        let query: RecentQuery = serde_json::from_value(json!({ "hours": -3 })).unwrap();
        assert_eq!(query.hours, -3);
    }

    #[test]
    fn test_recent_validate() {
        assert!(RecentQuery::default().validate().is_ok());

        let query = RecentQuery { hours: 0, ..Default::default() };
        assert!(matches!(query.validate(), Err(Error::InvalidQuery(_))));

        let query = RecentQuery { min_magnitude: -0.5, ..Default::default() };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_around_validate() {
        assert!(AroundQuery::new(34.05, -118.25).validate().is_ok());
        assert!(AroundQuery::new(91.0, 0.0).validate().is_err());
        assert!(AroundQuery::new(0.0, 181.0).validate().is_err());

        let query = AroundQuery { radius_km: -10.0, ..AroundQuery::new(0.0, 0.0) };
        assert!(query.validate().is_err());

        let query = AroundQuery { limit: 0, ..AroundQuery::new(0.0, 0.0) };
        assert!(query.validate().is_err());
    }
}
