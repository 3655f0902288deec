//! Command-line arguments.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `serve` | Serve the chart page and the `/data` endpoint |
//! | `fetch` | Fetch one symbol and print it to stdout |
//!
//! Global options (`--provider-url`, `--start`, `--end`, `--timeout-ms`)
//! configure the fetcher for either command.
//!
//! ```bash
//! pricechart serve --addr 127.0.0.1:8080
//! pricechart --start 2021-01-01 --end 2021-06-30 fetch MSFT --format csv
//! ```

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricechart_core::{parse_date, DEFAULT_PROVIDER_URL};
use time::Date;

#[derive(Debug, Parser)]
#[command(
    name = "pricechart",
    author,
    version,
    about = "Daily price and volume charts from the Yahoo! Finance CSV download"
)]
pub struct Cli {
    /// Base URL of the CSV download endpoint; the symbol is appended as a path segment.
    #[arg(long, global = true, default_value = DEFAULT_PROVIDER_URL)]
    pub provider_url: String,

    /// First day of the range (YYYY-MM-DD). Defaults to 2021-01-01.
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub start: Option<Date>,

    /// Last day of the range (YYYY-MM-DD). Defaults to 2021-12-31.
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub end: Option<Date>,

    /// Per-request timeout for the provider. No timeout when omitted.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the chart page and the /data endpoint.
    Serve(ServeArgs),
    /// Fetch one symbol and print it.
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Ticker symbol, e.g. MSFT.
    pub symbol: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Chart)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chart description as served by `/data`.
    Chart,
    /// `Date,Close,Volume` rows.
    Csv,
    /// The series' aligned columns as JSON.
    Json,
}

fn parse_date_arg(value: &str) -> Result<Date, String> {
    parse_date(value).map_err(|error| error.to_string())
}
