use axum::{
    extract::Path,
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ApiError, Result};
use crate::handlers::response::ApiResponse;
use crate::models::alert::{Alert, AlertPriority, AlertType};

/// Request body for taking an action on an alert
#[derive(Debug, Deserialize, ToSchema)]
pub struct AlertActionRequest {
    pub action: Option<String>,
}

/// The alert feed is a static table for now; timestamps are stamped at
/// request time so the dashboard shows them as fresh.
fn alert_table() -> Vec<Alert> {
    let now = chrono::Utc::now();
    vec![
        Alert {
            id: 1,
            alert_type: AlertType::Warning,
            title: "High Gas Fees".to_string(),
            description: "Gas prices are currently high. Consider waiting for lower fees."
                .to_string(),
            timestamp: now,
            priority: AlertPriority::Medium,
        },
        Alert {
            id: 2,
            alert_type: AlertType::Security,
            title: "Suspicious Contract Detected".to_string(),
            description: "A contract you're about to interact with has security concerns."
                .to_string(),
            timestamp: now,
            priority: AlertPriority::High,
        },
    ]
}

/// List active alerts
/// GET /api/alerts
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = "alerts",
    responses(
        (status = 200, description = "Active alerts for the connected wallet")
    )
)]
pub async fn get_alerts() -> Json<ApiResponse<Vec<Alert>>> {
    Json(ApiResponse::success(alert_table()))
}

/// Dismiss an alert
/// POST /api/alerts/{id}/dismiss
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/dismiss",
    tag = "alerts",
    params(("id" = u32, Path, description = "Alert identifier")),
    responses(
        (status = 200, description = "Alert dismissed")
    )
)]
pub async fn dismiss_alert(Path(id): Path<u32>) -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(format!("Alert {} dismissed", id)))
}

/// Take an action on an alert
/// POST /api/alerts/{id}/action
#[utoipa::path(
    post,
    path = "/api/alerts/{id}/action",
    tag = "alerts",
    params(("id" = u32, Path, description = "Alert identifier")),
    request_body = AlertActionRequest,
    responses(
        (status = 200, description = "Action taken"),
        (status = 400, description = "Missing action field")
    )
)]
pub async fn alert_action(
    Path(id): Path<u32>,
    Json(payload): Json<AlertActionRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let action = payload
        .action
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| ApiError::missing_field("action"))?;

    Ok(Json(ApiResponse::message(format!(
        "Action {} taken for alert {}",
        action, id
    ))))
}
