// Metrics endpoint for Prometheus

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

/// Prometheus metrics endpoint
///
/// Exposes request counters plus the gas oracle failure counters scraped by
/// the operator dashboards.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain")
    )
)]
pub async fn get_prometheus_metrics(State(state): State<AppState>) -> Response {
    let metrics_text = state.metrics_handle.render();

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics_text,
    )
        .into_response()
}
