use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] pricechart_core::ValidationError),

    #[error(transparent)]
    Fetch(#[from] pricechart_core::FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Fetch(pricechart_core::FetchError::Input(_)) => 2,
            Self::Fetch(_) => 3,
            Self::Serialization(_) | Self::Csv(_) | Self::Io(_) => 4,
        }
    }
}
