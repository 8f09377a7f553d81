use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a contract security scan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub contract_address: String,
    /// 0-100, higher is safer
    pub security_score: u8,
    pub risk_level: String,
    pub checks: SecurityChecks,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityChecks {
    pub verified: bool,
    pub has_proxy: bool,
    pub has_timelock: bool,
    pub has_multisig: bool,
}
