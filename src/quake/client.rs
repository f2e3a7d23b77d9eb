//! HTTP client for the backing earthquake API
//!
//! One outbound GET per call. Non-2xx responses become [`Error::Upstream`],
//! transport failures [`Error::Http`]. Nothing is retried.

use crate::config::Config;
use crate::constants::api::{API_KEY_HEADER, AROUND_PATH, RECENT_PATH, USER_AGENT};
use crate::error::{Error, Result};
use crate::quake::{AroundQuery, ApiKey, Document, EarthquakeSource, RecentQuery};
use serde::Serialize;
use serde_json::value::RawValue;
use tracing::{debug, warn};

/// Earthquake API client
#[derive(Debug, Clone)]
pub struct QuakeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl QuakeClient {
    /// Create a client for `base_url` authenticating with `api_key`
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Result<Self> {
        // Reject keys that can't be sent before the first request
        api_key.header_value()?;

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Create a client from the upstream section of the config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.upstream.base_url.clone(), config.api_key()?)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Document> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "forwarding earthquake query");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.header_value()?)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "earthquake API unreachable");
                Error::Http(e)
            })?;

        let status = response.status();
        // Raw bytes: no charset sniffing or lossy replacement of the body
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "earthquake API returned an error");
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let body = String::from_utf8(bytes.to_vec()).map_err(|e| {
            warn!(%url, "earthquake API returned a non-UTF-8 body");
            Error::Utf8(e)
        })?;

        Ok(RawValue::from_string(body)?)
    }
}

impl EarthquakeSource for QuakeClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn recent(&self, query: &RecentQuery) -> Result<Document> {
        self.fetch(RECENT_PATH, query).await
    }

    async fn around(&self, query: &AroundQuery) -> Result<Document> {
        self.fetch(AROUND_PATH, query).await
    }
}
