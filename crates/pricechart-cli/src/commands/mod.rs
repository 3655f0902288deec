mod fetch;
mod serve;

use std::sync::Arc;
use std::time::Duration;

use pricechart_core::{DateRange, QuoteFetcher, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let fetcher = build_fetcher(cli);
    let range = build_range(cli);

    match &cli.command {
        Command::Serve(args) => serve::run(args, fetcher, range).await,
        Command::Fetch(args) => fetch::run(args, &fetcher, range).await,
    }
}

fn build_fetcher(cli: &Cli) -> QuoteFetcher {
    QuoteFetcher::new(Arc::new(ReqwestHttpClient::new()))
        .with_base_url(cli.provider_url.as_str())
        .with_timeout(cli.timeout_ms.map(Duration::from_millis))
}

fn build_range(cli: &Cli) -> DateRange {
    let mut range = DateRange::default();
    if let Some(start) = cli.start {
        range = range.with_start(start);
    }
    if let Some(end) = cli.end {
        range = range.with_end(end);
    }
    range
}
