use axum::{routing::get, Router};

use crate::api;

/// All application routes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D500 commission dashboard
        .route("/api/commission", get(api::handlers::d500_commission::summary))
        .route(
            "/api/commission/details",
            get(api::handlers::d500_commission::details),
        )
        .route(
            "/api/commission/years",
            get(api::handlers::d500_commission::available_years),
        )
        // D501 outstanding balances
        .route(
            "/api/outstanding",
            get(api::handlers::d501_outstanding::summary),
        )
}
