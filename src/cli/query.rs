//! Recent/around command handlers
//!
//! One-shot queries against the backing API, printed to stdout.

use crate::config::defaults::{
    DEFAULT_HOURS, DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE, DEFAULT_RADIUS_KM,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::quake::{AroundQuery, Document, EarthquakeSource, QuakeClient, RecentQuery};
use clap::Args;

/// Options shared by both query commands
#[derive(Args)]
pub struct OutputArgs {
    /// Output format (json, raw)
    #[arg(long, short = 'f', default_value = "json")]
    pub format: String,

    /// Override the upstream base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Check parameter ranges locally before forwarding
    #[arg(long)]
    pub strict: bool,
}

/// Recent command arguments
#[derive(Args)]
pub struct RecentArgs {
    /// Minimum magnitude
    #[arg(long, short = 'm', default_value_t = DEFAULT_MIN_MAGNITUDE, allow_negative_numbers = true)]
    pub min_magnitude: f64,

    /// Lookback window in hours
    #[arg(long, default_value_t = DEFAULT_HOURS, allow_negative_numbers = true)]
    pub hours: i64,

    /// Maximum number of earthquakes
    #[arg(long, short = 'l', default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Around command arguments
#[derive(Args)]
pub struct AroundArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Search radius in kilometres
    #[arg(long, short = 'r', default_value_t = DEFAULT_RADIUS_KM, allow_negative_numbers = true)]
    pub radius_km: f64,

    /// Minimum magnitude
    #[arg(long, short = 'm', default_value_t = DEFAULT_MIN_MAGNITUDE, allow_negative_numbers = true)]
    pub min_magnitude: f64,

    /// Maximum number of earthquakes
    #[arg(long, short = 'l', default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl From<&RecentArgs> for RecentQuery {
    fn from(args: &RecentArgs) -> Self {
        RecentQuery {
            min_magnitude: args.min_magnitude,
            hours: args.hours,
            limit: args.limit,
        }
    }
}

impl From<&AroundArgs> for AroundQuery {
    fn from(args: &AroundArgs) -> Self {
        AroundQuery {
            lat: args.lat,
            lon: args.lon,
            radius_km: args.radius_km,
            min_magnitude: args.min_magnitude,
            limit: args.limit,
        }
    }
}

/// Run the recent command
pub async fn run_recent(args: RecentArgs) -> Result<()> {
    crate::cli::init_logging("warn");

    let query = RecentQuery::from(&args);
    if args.output.strict {
        query.validate()?;
    }

    let client = client_for(&args.output)?;
    let doc = client.recent(&query).await?;
    print_document(&doc, &args.output.format)
}

/// Run the around command
pub async fn run_around(args: AroundArgs) -> Result<()> {
    crate::cli::init_logging("warn");

    let query = AroundQuery::from(&args);
    if args.output.strict {
        query.validate()?;
    }

    let client = client_for(&args.output)?;
    let doc = client.around(&query).await?;
    print_document(&doc, &args.output.format)
}

fn client_for(output: &OutputArgs) -> Result<QuakeClient> {
    // Fail on an unknown format before spending a request
    resolve_format(&output.format)?;

    let mut config = Config::load()?;
    if let Some(base_url) = &output.base_url {
        config.set("upstream.base_url", base_url)?;
    }
    QuakeClient::from_config(&config)
}

fn resolve_format(name: &str) -> Result<Box<dyn crate::format::OutputFormatter>> {
    get_formatter(name).ok_or_else(|| {
        let names: Vec<String> = available_formats().into_iter().map(|f| f.name).collect();
        Error::Config(format!(
            "Unknown format '{}' (available: {})",
            name,
            names.join(", ")
        ))
    })
}

fn print_document(doc: &Document, format: &str) -> Result<()> {
    let formatter = resolve_format(format)?;
    println!("{}", formatter.format(doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: crate::cli::Commands,
    }

    #[test]
    fn test_recent_defaults() {
        let cli = TestCli::try_parse_from(["quake-proxy", "recent"]).unwrap();
        let crate::cli::Commands::Recent(args) = cli.command else {
            panic!("expected recent");
        };
        assert_eq!(RecentQuery::from(&args), RecentQuery::default());
        assert_eq!(args.output.format, "json");
        assert!(!args.output.strict);
    }

    #[test]
    fn test_around_negative_longitude() {
        let cli = TestCli::try_parse_from([
            "quake-proxy",
            "around",
            "--lat",
            "34.05",
            "--lon",
            "-118.25",
            "--limit",
            "5",
        ])
        .unwrap();
        let crate::cli::Commands::Around(args) = cli.command else {
            panic!("expected around");
        };
        assert_eq!(
            AroundQuery::from(&args),
            AroundQuery {
                limit: 5,
                ..AroundQuery::new(34.05, -118.25)
            }
        );
    }

    #[test]
    fn test_around_requires_coordinates() {
        assert!(TestCli::try_parse_from(["quake-proxy", "around", "--lat", "1"]).is_err());
    }

    #[test]
    fn test_unknown_format() {
        assert!(matches!(resolve_format("gpx"), Err(Error::Config(_))));
        assert!(resolve_format("raw").is_ok());
    }
}
