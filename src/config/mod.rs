//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/quake-proxy/config.toml
//!
//! After the file is read, `API_KEY` and `PORT` from the process environment
//! override the corresponding file values.

pub mod defaults;

use crate::constants::{api::DEFAULT_BASE_URL, env as env_vars};
use crate::error::{Error, Result};
use crate::quake::ApiKey;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backing API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Backing earthquake API settings
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the backing API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `X-API-Key`
    #[serde(default)]
    pub api_key: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path and apply environment overrides
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides
    ///
    /// Writes a default config to `path` if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides using a custom variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(env_vars::API_KEY).filter(|k| !k.is_empty()) {
            self.upstream.api_key = key;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            self.server.port = port.trim().parse().map_err(|_| {
                Error::Config(format!("Invalid {} value: {}", env_vars::PORT, port))
            })?;
        }
        Ok(())
    }

    /// The configured API key
    ///
    /// Fails when no key is configured, so the proxy never sends unauthenticated requests.
    pub fn api_key(&self) -> Result<ApiKey> {
        if self.upstream.api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "No API key configured (set {} or upstream.api_key)",
                env_vars::API_KEY
            )));
        }
        Ok(ApiKey::new(self.upstream.api_key.trim()))
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["upstream", "base_url"] => Some(self.upstream.base_url.clone()),
            ["upstream", "api_key"] => Some(self.upstream.api_key.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["upstream", "base_url"] => {
                self.upstream.base_url = value.trim_end_matches('/').to_string();
            }
            ["upstream", "api_key"] => {
                self.upstream.api_key = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "upstream.base_url",
            "upstream.api_key",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
        assert!(config.upstream.api_key.is_empty());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        config.set("upstream.base_url", "http://localhost:9000/").unwrap();
        assert_eq!(
            config.get("upstream.base_url"),
            Some("http://localhost:9000".to_string())
        );

        config.set("server.port", "9999").unwrap();
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_port").is_err());
    }

    #[test]
    fn test_api_key_missing() {
        let config = Config::default();
        assert!(matches!(config.api_key(), Err(Error::Config(_))));
    }

    #[test]
    fn test_api_key_present() {
        let mut config = Config::default();
        config.upstream.api_key = " secret ".to_string();
        assert_eq!(config.api_key().unwrap().as_str(), "secret");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_with(lookup_from(&[("API_KEY", "from-env"), ("PORT", "10000")]))
            .unwrap();

        assert_eq!(config.upstream.api_key, "from-env");
        assert_eq!(config.server.port, 10000);
    }

    #[test]
    fn test_env_empty_api_key_keeps_file_value() {
        let mut config = Config::default();
        config.upstream.api_key = "from-file".to_string();
        config.apply_env_with(lookup_from(&[("API_KEY", "")])).unwrap();

        assert_eq!(config.upstream.api_key, "from-file");
    }

    #[test]
    fn test_env_invalid_port() {
        let mut config = Config::default();
        let result = config.apply_env_with(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.upstream.base_url = "http://localhost:9000".to_string();
        config.upstream.api_key = "k".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.upstream.base_url, "http://localhost:9000");
        assert_eq!(loaded.upstream.api_key, "k");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 1234\n").unwrap();
        assert_eq!(config.server.port, 1234);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_serialization_format() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml.contains("[upstream]"));
        assert!(toml.contains("[server]"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = Config::default();
        config.upstream.api_key = "super-secret".to_string();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8000");
    }
}
