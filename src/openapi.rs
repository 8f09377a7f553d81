//! OpenAPI documentation for the dashboard API surface.

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GasGuard Backend API",
        description = "Gas price aggregation and Web3 security dashboard endpoints"
    ),
    paths(
        handlers::health::service_info,
        handlers::health::health_check,
        handlers::gas::get_gas_prices,
        handlers::alerts::get_alerts,
        handlers::alerts::dismiss_alert,
        handlers::alerts::alert_action,
        handlers::approvals::get_approvals,
        handlers::approvals::revoke_approval,
        handlers::security::get_security_report,
        handlers::markets::get_markets,
        handlers::metrics::get_prometheus_metrics,
    ),
    components(schemas(
        models::gas::GasSnapshot,
        models::gas::GasSource,
        models::alert::Alert,
        models::alert::AlertType,
        models::alert::AlertPriority,
        models::approval::TokenApproval,
        models::security::SecurityReport,
        models::security::SecurityChecks,
        models::market::Market,
        handlers::health::HealthStatus,
        handlers::health::ServiceInfo,
        handlers::alerts::AlertActionRequest,
        handlers::approvals::ApprovalListResponse,
        handlers::approvals::RevokeApprovalRequest,
        handlers::approvals::RevokeApprovalResponse,
        handlers::approvals::TransactionData,
    )),
    tags(
        (name = "health", description = "Service health and banner"),
        (name = "gas", description = "Gas price tracking"),
        (name = "alerts", description = "Dashboard alerts"),
        (name = "approvals", description = "Token approval management"),
        (name = "security", description = "Contract security scans"),
        (name = "markets", description = "Market overview"),
        (name = "metrics", description = "Operational metrics")
    )
)]
pub struct ApiDoc;
