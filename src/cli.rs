//! CLI argument parsing module for eol-timeline

use crate::api::{ApiFlavor, DEFAULT_BASE_URL};
use crate::error::ConfigError;
use crate::fetcher::FallbackPolicy;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

/// Narrowest terminal timeline that still shows a year axis
pub const MIN_WIDTH: usize = 40;

/// Widest terminal timeline accepted
pub const MAX_WIDTH: usize = 1000;

/// Default terminal timeline width
pub const DEFAULT_WIDTH: usize = 80;

/// Parse a date in YYYY-MM-DD format
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    s.trim().parse::<NaiveDate>().map_err(|_| {
        ConfigError::InvalidDate {
            value: s.to_string(),
        }
        .to_string()
    })
}

/// Parse a timeline width in columns
fn parse_width(s: &str) -> Result<usize, String> {
    let invalid = || {
        ConfigError::InvalidWidth {
            value: s.to_string(),
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        }
        .to_string()
    };

    let width: usize = s.trim().parse().map_err(|_| invalid())?;
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(invalid());
    }
    Ok(width)
}

/// Release support timelines from endoflife.date
#[derive(Parser, Debug, Clone)]
#[command(
    name = "eol-timeline",
    version,
    about = "Release support timelines from endoflife.date"
)]
pub struct CliArgs {
    /// Product id or page hash (e.g., ubuntu, #nodejs, #home)
    #[arg(default_value = "ubuntu")]
    pub target: String,

    /// Product manifest file (.json or .toml); defaults to the built-in list
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// List the products of the manifest instead of charting
    #[arg(short, long)]
    pub list: bool,

    // Output options
    /// Output the chart configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit single-line JSON
    #[arg(long, requires = "json")]
    pub compact: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Terminal timeline width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_width)]
    pub width: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Data options
    /// What to render when the lifecycle API cannot be used
    #[arg(long, value_enum, default_value_t = FallbackPolicy::Static)]
    pub fallback: FallbackPolicy,

    /// Do not contact the lifecycle API; use the fallback directly
    #[arg(long)]
    pub offline: bool,

    /// Reference date for filtering and the "today" marker (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Lifecycle API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Lifecycle API endpoint flavor
    #[arg(long, value_enum, default_value_t = ApiFlavor::V1)]
    pub api: ApiFlavor,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retries for failed requests (exponential backoff)
    #[arg(long, default_value_t = 0)]
    pub retries: u32,
}

impl CliArgs {
    /// Reference date, defaulting to the local calendar date
    pub fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Whether a progress spinner should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json && !self.offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["eol-timeline"]);
        assert_eq!(args.target, "ubuntu");
        assert!(args.manifest.is_none());
        assert!(!args.list);
        assert!(!args.json);
        assert!(!args.compact);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert!(!args.no_color);
        assert_eq!(args.fallback, FallbackPolicy::Static);
        assert!(!args.offline);
        assert!(args.today.is_none());
        assert_eq!(args.api_url, DEFAULT_BASE_URL);
        assert_eq!(args.api, ApiFlavor::V1);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.retries, 0);
    }

    #[test]
    fn test_target_argument() {
        let args = CliArgs::parse_from(["eol-timeline", "#nodejs"]);
        assert_eq!(args.target, "#nodejs");
    }

    #[test]
    fn test_fallback_values() {
        let args = CliArgs::parse_from(["eol-timeline", "--fallback", "empty"]);
        assert_eq!(args.fallback, FallbackPolicy::Empty);

        let args = CliArgs::parse_from(["eol-timeline", "--fallback", "error"]);
        assert_eq!(args.fallback, FallbackPolicy::Error);

        assert!(CliArgs::try_parse_from(["eol-timeline", "--fallback", "maybe"]).is_err());
    }

    #[test]
    fn test_today_flag() {
        let args = CliArgs::parse_from(["eol-timeline", "--today", "2024-04-25"]);
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 4, 25));
        assert_eq!(
            args.reference_date(),
            NaiveDate::from_ymd_opt(2024, 4, 25).unwrap()
        );
    }

    #[test]
    fn test_today_invalid() {
        assert!(CliArgs::try_parse_from(["eol-timeline", "--today", "tomorrow"]).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2025-01-31 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("120").unwrap(), 120);
        assert!(parse_width("10").is_err());
        assert!(parse_width("wide").is_err());
    }

    #[test]
    fn test_parse_width_upper_bound() {
        assert_eq!(parse_width("1000").unwrap(), MAX_WIDTH);
        assert!(parse_width("1001").is_err());
        let err = parse_width("100000000000000").unwrap_err();
        assert!(err.contains("between 40 and 1000"));
    }

    #[test]
    fn test_api_flavor() {
        let args = CliArgs::parse_from(["eol-timeline", "--api", "legacy"]);
        assert_eq!(args.api, ApiFlavor::Legacy);
    }

    #[test]
    fn test_compact_requires_json() {
        assert!(CliArgs::try_parse_from(["eol-timeline", "--compact"]).is_err());
        let args = CliArgs::parse_from(["eol-timeline", "--json", "--compact"]);
        assert!(args.compact);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["eol-timeline", "--verbose", "-q"]).is_err());
    }

    #[test]
    fn test_show_progress() {
        let args = CliArgs::parse_from(["eol-timeline"]);
        assert!(args.show_progress());

        let args = CliArgs::parse_from(["eol-timeline", "--json"]);
        assert!(!args.show_progress());

        let args = CliArgs::parse_from(["eol-timeline", "--offline"]);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "eol-timeline",
            "debian",
            "--offline",
            "--fallback",
            "empty",
            "--today",
            "2025-06-01",
            "--json",
            "--api-url",
            "http://localhost:9000",
        ]);
        assert_eq!(args.target, "debian");
        assert!(args.offline);
        assert_eq!(args.fallback, FallbackPolicy::Empty);
        assert!(args.json);
        assert_eq!(args.api_url, "http://localhost:9000");
    }
}
