use axum::http::StatusCode;
use thiserror::Error;

/// Terminal, request-scoped failures of a report computation.
///
/// Nothing here is retried; a failed request returns an error body and no
/// partial rows.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The data fetch exceeded the cooperative deadline. Distinct from
    /// `Upstream` so a slow connection is never reported as "no data".
    #[error("data source did not respond within {elapsed_ms}ms, the connection is slow")]
    Timeout { elapsed_ms: u64 },

    #[error("data source error after {elapsed_ms}ms: {message}")]
    Upstream { message: String, elapsed_ms: u64 },
}

impl ReportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::MissingParameter(_) | ReportError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ReportError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            ReportError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Elapsed time the request spent before failing, if any was spent on
    /// the data fetch.
    pub fn elapsed_ms(&self) -> u64 {
        match self {
            ReportError::Timeout { elapsed_ms } | ReportError::Upstream { elapsed_ms, .. } => {
                *elapsed_ms
            }
            _ => 0,
        }
    }
}
