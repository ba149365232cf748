use std::{env, path::PathBuf, time::Duration};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use derive_getters::Getters;
use log::LevelFilter;

pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_URL_VAR: &str = "PORTFOLIO_TRACKER_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "portfolio-tracker.log";

#[derive(Debug, Parser)]
#[command(name = "portfolio-tracker", version, about = "A terminal-based stock portfolio tracker")]
pub struct Cli {
    /// Alpha Vantage API key (falls back to ALPHA_VANTAGE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Quote service base URL (falls back to PORTFOLIO_TRACKER_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout for quote lookups, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// File that receives log output while the terminal UI is running
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current price for a single symbol and exit
    Quote { symbol: String },
}

#[derive(Clone, Debug, Getters)]
pub struct Config {
    api_key: Option<String>,
    base_url: String,
    request_timeout: Duration,
    log_file: PathBuf,
    log_level: LevelFilter,
}

impl Config {
    /// Merges CLI flags over the process environment. A `.env` file, if
    /// present, is loaded into the environment before this is called.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = cli.api_key.clone().or_else(|| env::var(API_KEY_VAR).ok());
        let base_url = cli
            .base_url
            .clone()
            .or_else(|| env::var(BASE_URL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(
            api_key,
            base_url,
            Duration::from_secs(cli.timeout_secs),
            cli.log_file.clone(),
            parse_level(&cli.log_level)?,
        ))
    }

    pub fn new(
        api_key: Option<String>,
        base_url: String,
        request_timeout: Duration,
        log_file: PathBuf,
        log_level: LevelFilter,
    ) -> Self {
        Self {
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            base_url,
            request_timeout,
            log_file,
            log_level,
        }
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(anyhow!("Unknown log level '{}'", other)),
    }
}
