//! # Pricechart Core
//!
//! Fetch-decode-project pipeline for daily price history.
//!
//! ## Overview
//!
//! This crate turns a ticker symbol and a date range into a columnar time
//! series, and that series into a chart description a browser can plot:
//!
//! - **Request builder** for the provider's CSV download endpoint
//! - **Row decoder** that lazily turns a CSV byte stream into typed records
//! - **Series assembler** that folds records into aligned columns
//! - **Fetch orchestrator** that ties the above to one HTTP round-trip
//! - **Chart adapter** that projects a series into price and volume traces
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Chart description (traces, layout) built from a series |
//! | [`decode`] | CSV row decoder |
//! | [`domain`] | Domain models (Symbol, DateRange, Record, Series) |
//! | [`error`] | Validation, decode and fetch errors |
//! | [`fetch`] | Fetch orchestrator |
//! | [`http_client`] | HTTP client abstraction |
//! | [`request`] | Provider request URL builder |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pricechart_core::{ChartSpec, DateRange, QuoteFetcher, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = QuoteFetcher::default();
//!     let symbol = Symbol::parse("MSFT")?;
//!
//!     let series = fetcher.fetch_series(&symbol, DateRange::default()).await?;
//!     let chart = ChartSpec::from_series(&symbol, &series);
//!
//!     println!("{}", chart.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Quote Fetcher   │────▶│ Request Builder  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HTTP Client     │
//! │ (reqwest/stub)  │
//! └────────┬────────┘
//!          │ CSV body
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Row Decoder     │────▶│ Series Assembler │
//! └─────────────────┘     └────────┬─────────┘
//!                                  │
//!                                  ▼
//!                         ┌──────────────────┐
//!                         │ Chart Adapter    │
//!                         └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every failure of a fetch surfaces as a single [`FetchError`]; callers
//! branch on [`FetchError::kind`] instead of parsing messages:
//!
//! ```rust
//! use pricechart_core::{FetchError, FetchErrorKind};
//!
//! fn status_for(error: &FetchError) -> u16 {
//!     match error.kind() {
//!         FetchErrorKind::Input => 400,
//!         FetchErrorKind::Transport | FetchErrorKind::Provider | FetchErrorKind::Decode => 500,
//!     }
//! }
//! ```
//!
//! Decoding is all-or-nothing: a single malformed row fails the whole fetch
//! and no partial series is ever returned.

pub mod chart;
pub mod decode;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod request;

// Chart projection
pub use chart::{ChartSpec, Grid, Layout, Trace, TraceKind};

// Decoding
pub use decode::{decode_rows, RowDecoder};

// Domain models
pub use domain::{parse_date, DateRange, Record, Series, Symbol};

// Error types
pub use error::{DecodeError, DecodeErrorKind, FetchError, FetchErrorKind, ValidationError};

// Fetch orchestration
pub use fetch::QuoteFetcher;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

// Request building
pub use request::{build_request_url, DEFAULT_PROVIDER_URL};
