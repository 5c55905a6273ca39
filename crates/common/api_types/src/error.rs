use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use egress_staking::error::StakingError;
use egress_transactions::error::TransactionError;
use egress_withdrawal::error::{CodecError, WithdrawalError};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalError(String),

    /// The staking provider answered with an error we pass through.
    #[error("{message}")]
    Upstream { status: u16, message: String },
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl From<WithdrawalError> for ApiError {
    fn from(err: WithdrawalError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StakingError> for ApiError {
    fn from(err: StakingError) -> Self {
        match &err {
            StakingError::MissingApiKey { .. } | StakingError::InvalidApiKey => {
                ApiError::InternalError(err.to_string())
            }
            StakingError::RequestFailedWithMessage {
                status_code,
                message,
            } => ApiError::Upstream {
                status: status_code.as_u16(),
                message: format!(
                    "Kiln API error: {} - {message}",
                    status_code.canonical_reason().unwrap_or("Unknown")
                ),
            },
            StakingError::HttpClientError(_)
            | StakingError::UrlParseError(_)
            | StakingError::Anyhow(_) => {
                error!("Failed to fetch validators: {err:?}");
                ApiError::InternalError(format!(
                    "Failed to fetch validators from Kiln API: {err}"
                ))
            }
        }
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TransactionError::AlreadyRecorded(_) | TransactionError::InvalidTransition { .. } => {
                ApiError::Conflict(err.to_string())
            }
        }
    }
}
