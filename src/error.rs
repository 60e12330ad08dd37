use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("No data found for ticker '{0}'")]
    UnknownTicker(String),

    #[error("Malformed provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AssessmentError {
    pub fn provider_error(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
