use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// Caller input errors, rejected before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty symbol")]
    EmptySymbol,

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

/// Why a CSV row (or the header) could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("missing required column")]
    MissingColumn,

    #[error("malformed csv: {0}")]
    Csv(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("value must be non-negative")]
    NegativeValue,

    #[error("value must be finite")]
    NonFiniteValue,
}

/// Decode failure with the offending line and column.
///
/// `line` is the 1-based line of the CSV input (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    line: u64,
    field: Option<&'static str>,
    kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(line: u64, field: Option<&'static str>, kind: DecodeErrorKind) -> Self {
        Self { line, field, kind }
    }

    pub fn field_error(line: u64, field: &'static str, kind: DecodeErrorKind) -> Self {
        Self::new(line, Some(field), kind)
    }

    pub fn from_csv(error: &csv::Error) -> Self {
        let line = error.position().map_or(0, csv::Position::line);
        Self::new(line, None, DecodeErrorKind::Csv(error.to_string()))
    }

    pub const fn line(&self) -> u64 {
        self.line
    }

    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub const fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.field {
            Some(field) => write!(f, "line {}, column '{}': {}", self.line, field, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Fetch failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Input,
    Transport,
    Provider,
    Decode,
}

/// Unified error of the fetch orchestrator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Input(#[from] ValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("provider returned {status}")]
    Provider { status: String },

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl FetchError {
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Input(_) => FetchErrorKind::Input,
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::Provider { .. } => FetchErrorKind::Provider,
            Self::Decode(_) => FetchErrorKind::Decode,
        }
    }
}
