pub mod d500_commission;
pub mod d501_outstanding;

use axum::http::StatusCode;
use axum::Json;
use contracts::shared::api_error::ApiErrorBody;

use crate::shared::error::ReportError;

/// Map a failed report computation to its status code and JSON error body.
/// No partial rows ever accompany an error.
pub(crate) fn error_response(
    context: &'static str,
    err: ReportError,
) -> (StatusCode, Json<ApiErrorBody>) {
    (
        err.status_code(),
        Json(ApiErrorBody {
            error: context.to_string(),
            message: err.to_string(),
            duration_ms: err.elapsed_ms(),
        }),
    )
}
