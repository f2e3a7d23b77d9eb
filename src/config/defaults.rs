//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default minimum magnitude for both queries
pub const DEFAULT_MIN_MAGNITUDE: f64 = 0.0;

/// Default lookback window for recent queries, in hours
pub const DEFAULT_HOURS: i64 = 24;

/// Default maximum number of returned events
pub const DEFAULT_LIMIT: i64 = 100;

/// Default search radius for around queries, in kilometres
pub const DEFAULT_RADIUS_KM: f64 = 300.0;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8000;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "quake-proxy";
