use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Market overview entry shown on the dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Pair identifier, e.g. "ETH-USDT"
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    /// Abbreviated 24h volume, e.g. "1.2B"
    pub volume: String,
}
