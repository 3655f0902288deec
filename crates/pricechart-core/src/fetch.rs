//! Fetch orchestrator.
//!
//! One call to [`QuoteFetcher::fetch_series`] is one outbound GET: build the
//! URL, send it, check for `200`, decode the body and fold it into a
//! [`Series`]. There is no retry. Unless a timeout is configured the
//! transport default applies, so an unresponsive provider holds the caller
//! until the connection gives up.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::request::{build_request_url, DEFAULT_PROVIDER_URL};
use crate::{decode_rows, DateRange, FetchError, Series, Symbol};

/// Fetches daily history for a symbol from the quote provider.
///
/// Holds only immutable configuration, so clones can be shared across tasks
/// and called concurrently.
#[derive(Clone)]
pub struct QuoteFetcher {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout: Option<Duration>,
}

impl QuoteFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: DEFAULT_PROVIDER_URL.to_owned(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Fetch and assemble the series for `symbol` over `range`.
    pub async fn fetch_series(
        &self,
        symbol: &Symbol,
        range: DateRange,
    ) -> Result<Series, FetchError> {
        let url = build_request_url(&self.base_url, symbol, range);
        debug!(%symbol, %url, "requesting daily history");

        let request = HttpRequest::get(url)
            .with_header("accept", "text/csv")
            .with_timeout(self.timeout);

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(%symbol, %error, "history request failed in transport");
            FetchError::Transport(error)
        })?;

        if !response.is_ok() {
            let status = response.status_text();
            warn!(%symbol, %status, "provider rejected history request");
            return Err(FetchError::Provider { status });
        }

        let series = Series::try_assemble(decode_rows(response.body.as_slice())).map_err(|error| {
            warn!(%symbol, %error, "history body could not be decoded");
            FetchError::Decode(error)
        })?;

        info!(%symbol, rows = series.len(), "fetched daily history");
        Ok(series)
    }

    /// Like [`fetch_series`](Self::fetch_series) for a raw symbol string; a
    /// blank symbol fails without touching the network.
    pub async fn fetch_series_for(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<Series, FetchError> {
        let symbol = Symbol::parse(symbol)?;
        self.fetch_series(&symbol, range).await
    }
}

impl Default for QuoteFetcher {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

impl Debug for QuoteFetcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteFetcher")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
