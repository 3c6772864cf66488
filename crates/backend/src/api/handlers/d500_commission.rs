use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d500_commission::{
    CommissionDetailRow, CommissionDetailsRequest, CommissionReportRequest, CommissionRow,
    ReportYear,
};
use contracts::shared::api_error::ApiErrorBody;

use super::error_response;
use crate::dashboards::d500_commission::service;

/// GET /api/commission?year=2024&dimension=...
pub async fn summary(
    Query(request): Query<CommissionReportRequest>,
) -> Result<Json<Vec<CommissionRow>>, (StatusCode, Json<ApiErrorBody>)> {
    match service::commission_summary(request).await {
        Ok(rows) => {
            tracing::info!("D500 Commission: returning {} roster rows", rows.len());
            Ok(Json(rows))
        }
        Err(e) => {
            tracing::error!("D500 Commission: summary failed: {}", e);
            Err(error_response("Failed to fetch commission data", e))
        }
    }
}

/// GET /api/commission/details?employee_code=Y130016&year=2024
pub async fn details(
    Query(request): Query<CommissionDetailsRequest>,
) -> Result<Json<Vec<CommissionDetailRow>>, (StatusCode, Json<ApiErrorBody>)> {
    match service::commission_details(request).await {
        Ok(rows) => {
            tracing::info!("D500 Commission: returning {} detail rows", rows.len());
            Ok(Json(rows))
        }
        Err(e) => {
            tracing::error!("D500 Commission: details failed: {}", e);
            Err(error_response("Failed to fetch commission details", e))
        }
    }
}

/// GET /api/commission/years
pub async fn available_years(
) -> Result<Json<Vec<ReportYear>>, (StatusCode, Json<ApiErrorBody>)> {
    match service::available_years().await {
        Ok(years) => {
            tracing::info!("D500 Commission: returning {} report years", years.len());
            Ok(Json(years))
        }
        Err(e) => {
            tracing::error!("D500 Commission: years lookup failed: {}", e);
            Err(error_response("Failed to fetch report years", e))
        }
    }
}
