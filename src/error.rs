use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database connection error: {0}")]
    Connection(#[from] tokio_rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Invalid opportunity type: {0}")]
    InvalidOpportunityType(String),

    #[error("Line {line}: invalid `{field}`: {reason}")]
    InvalidRecord {
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidOpportunityType(ref raw) => {
                tracing::debug!("rejected opportunity type {:?}", raw);
                (StatusCode::NOT_FOUND, "Invalid opportunity type").into_response()
            }
            AppError::SourceUnavailable(_) | AppError::Http(_) => {
                tracing::warn!("record source failed: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Opportunity listings are temporarily unavailable",
                )
                    .into_response()
            }
            other => {
                tracing::error!("request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
