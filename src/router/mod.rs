//! Router configuration module.
//!
//! Route paths mirror the shipped dashboard frontend (`/api/okx/*` names
//! survive from an earlier integration and are kept for compatibility).

use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::handlers::{alerts, approvals, gas, health, markets, metrics, security};
use crate::middleware;
use crate::openapi::ApiDoc;

/// Build the application router with all dashboard endpoints.
pub fn build_router(app_state: AppState) -> Router {
    let request_timeout = Duration::from_secs(app_state.config.request_timeout);

    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::get_prometheus_metrics))
        // Gas tracking
        .route("/api/okx/gas", get(gas::get_gas_prices))
        // Alerts
        .route("/api/alerts", get(alerts::get_alerts))
        .route("/api/alerts/{id}/dismiss", post(alerts::dismiss_alert))
        .route("/api/alerts/{id}/action", post(alerts::alert_action))
        // Token approvals
        .route("/api/okx/approvals", get(approvals::get_approvals))
        .route("/api/approvals/revoke", post(approvals::revoke_approval))
        // Contract security
        .route("/api/okx/security", get(security::get_security_report))
        // Markets
        .route("/api/markets", get(markets::get_markets))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(endpoint_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::metrics_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                // The dashboard frontend is served from another origin
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn endpoint_not_found() -> ApiError {
    ApiError::not_found("Endpoint")
}
