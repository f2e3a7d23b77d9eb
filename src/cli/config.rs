//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "upstream.base_url")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
///
/// Reads and writes the file only; environment overrides are not applied here.
pub fn run(args: ConfigArgs) -> Result<()> {
    let path = Config::config_path()?;

    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save_to(&path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(&path)?;

    match (&args.key, &args.value) {
        (None, None) => {
            show_all_config(&config);
        }

        (Some(key), None) => match config.get(key) {
            Some(value) if key == "upstream.api_key" => println!("{}", mask(&value)),
            Some(value) => println!("{}", value),
            None => {
                return Err(Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::available_keys().join(", ")
                )));
            }
        },

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(&path)?;
            if key == "upstream.api_key" {
                println!("{} = {}", key, mask(value));
            } else {
                println!("{} = {}", key, value);
            }
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        "\"\" # not configured"
    } else {
        "\"***\" # configured"
    }
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[upstream]");
    println!("base_url = \"{}\"", config.upstream.base_url);
    println!("api_key = {}", mask(&config.upstream.api_key));
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert!(mask("").contains("not configured"));
        assert!(!mask("secret").contains("secret"));
    }
}
