use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provenance marker for a gas snapshot.
///
/// `Fallback` means no live upstream data was obtained and the static
/// defaults were served instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GasSource {
    Primary,
    #[serde(rename = "fallback")]
    Fallback,
}

/// Point-in-time gas price reading, in gwei-equivalent integer tiers.
///
/// Immutable once constructed; a fresh snapshot is produced per resolution
/// call and nothing here is cached. `low <= standard <= high` usually holds
/// for upstream data but is deliberately not enforced - tiers are a
/// passthrough of whatever the oracle reported.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GasSnapshot {
    /// Suggested price for non-urgent transactions
    pub low: u64,
    /// Suggested mid-tier price
    pub standard: u64,
    /// Suggested urgent-tier price
    pub high: u64,
    #[serde(rename = "lastUpdated")]
    pub retrieved_at: DateTime<Utc>,
    pub source: GasSource,
}
