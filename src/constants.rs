//! Centralized constants for the quake-proxy crate

/// Backing earthquake REST API
pub mod api {
    /// Default base URL of the backing seismic-data API
    pub const DEFAULT_BASE_URL: &str = "https://earthquake-ce5c9a0f9ec7.herokuapp.com";

    /// Recent-activity endpoint path
    pub const RECENT_PATH: &str = "/earthquakes/recent";

    /// Radius-around-point endpoint path
    pub const AROUND_PATH: &str = "/earthquakes/around";

    /// Header carrying the API key on every outbound request
    pub const API_KEY_HEADER: &str = "X-API-Key";

    /// User agent sent to the backing API
    pub const USER_AGENT: &str = concat!("quake-proxy/", env!("CARGO_PKG_VERSION"));
}

/// Environment variables read at startup
pub mod env {
    /// API key for the backing API
    pub const API_KEY: &str = "API_KEY";

    /// Port override for the HTTP server
    pub const PORT: &str = "PORT";
}
