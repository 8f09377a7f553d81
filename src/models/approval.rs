use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ERC-20 allowance granted by a wallet to a spender contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenApproval {
    pub id: String,
    pub token_name: String,
    pub token_symbol: String,
    pub token_address: String,
    /// Human-readable spender label, e.g. "Uniswap V3"
    pub spender: String,
    pub spender_address: String,
    /// Granted allowance, "Unlimited" or a decimal amount string
    pub allowance: String,
    pub last_used: String,
    pub risk_level: String,
}
