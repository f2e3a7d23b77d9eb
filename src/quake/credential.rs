//! API key credential for the backing API

use crate::error::{Error, Result};
use reqwest::header::HeaderValue;

/// Static API key attached to every outbound request
///
/// Passed explicitly to [`QuakeClient`](super::client::QuakeClient); never read
/// from ambient state. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header value marked sensitive so it is masked in client debug output
    pub fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.0).map_err(|_| {
            Error::Config("API key contains characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
