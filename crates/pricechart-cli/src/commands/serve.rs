use pricechart_core::{DateRange, QuoteFetcher};
use pricechart_web::{app, AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::cli::ServeArgs;
use crate::error::CliError;

pub async fn run(args: &ServeArgs, fetcher: QuoteFetcher, range: DateRange) -> Result<(), CliError> {
    let listener = TcpListener::bind(args.addr).await?;
    info!(
        addr = %listener.local_addr()?,
        provider = fetcher.base_url(),
        start = %range.start(),
        end = %range.end(),
        "serving pricechart"
    );

    axum::serve(listener, app(AppState::new(fetcher, range))).await?;
    Ok(())
}
