use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pricechart_core::{FetchError, ValidationError};
use thiserror::Error;

const FETCH_FAILED: &str = "can't fetch data";

/// Handler error mapped to a terse client response.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// A `start` or `end` query value that is not `YYYY-MM-DD`; the raw
    /// value stays out of the response.
    #[error("invalid {bound} date")]
    InvalidBound {
        bound: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidBound { .. } | Self::Fetch(FetchError::Input(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::InvalidInput(error) | Self::Fetch(FetchError::Input(error)) => {
                (status, error.to_string()).into_response()
            }
            Self::InvalidBound { .. } => (status, self.to_string()).into_response(),
            Self::Fetch(_) => (status, FETCH_FAILED).into_response(),
        }
    }
}
