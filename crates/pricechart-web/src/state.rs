use std::sync::Arc;

use pricechart_core::{parse_date, DateRange, QuoteFetcher, ValidationError};

use crate::error::ApiError;

/// Process-wide request context, built once before serving and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    fetcher: QuoteFetcher,
    default_range: DateRange,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(fetcher: QuoteFetcher, default_range: DateRange) -> Self {
        Self {
            fetcher,
            default_range,
        }
    }

    pub fn fetcher(&self) -> &QuoteFetcher {
        &self.fetcher
    }

    pub const fn default_range(&self) -> DateRange {
        self.default_range
    }

    /// The default range with either end replaced by a query value.
    /// Blank values count as absent.
    pub fn range_for(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<DateRange, ApiError> {
        let mut range = self.default_range;
        if let Some(start) = present(start) {
            range = range.with_start(parse_date(start).map_err(invalid_bound("start"))?);
        }
        if let Some(end) = present(end) {
            range = range.with_end(parse_date(end).map_err(invalid_bound("end"))?);
        }
        Ok(range)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn invalid_bound(bound: &'static str) -> impl FnOnce(ValidationError) -> ApiError {
    move |source| ApiError::InvalidBound { bound, source }
}
