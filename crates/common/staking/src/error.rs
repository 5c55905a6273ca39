use thiserror::Error;

#[derive(Debug, Error)]
pub enum StakingError {
    #[error("{env_var} not configured")]
    MissingApiKey { env_var: &'static str },

    #[error("Invalid Kiln API key")]
    InvalidApiKey,

    #[error("Kiln API error: {status_code} - {message}")]
    RequestFailedWithMessage {
        status_code: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
