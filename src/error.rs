use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HubError {
    #[error("invalid search parameters: {0}")]
    InvalidSearchParameters(String),
    #[error("assignment requested against an empty facility set")]
    EmptyFacilitySet,
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidSearchParameters(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
