use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d501_outstanding::{OutstandingRequest, OutstandingRow};
use contracts::shared::api_error::ApiErrorBody;

use super::error_response;
use crate::dashboards::d501_outstanding::service;

/// GET /api/outstanding?year=2024
pub async fn summary(
    Query(request): Query<OutstandingRequest>,
) -> Result<Json<Vec<OutstandingRow>>, (StatusCode, Json<ApiErrorBody>)> {
    match service::outstanding_summary(request).await {
        Ok(rows) => {
            tracing::info!("D501 Outstanding: returning {} roster rows", rows.len());
            Ok(Json(rows))
        }
        Err(e) => {
            tracing::error!("D501 Outstanding: summary failed: {}", e);
            Err(error_response("Failed to fetch outstanding data", e))
        }
    }
}
