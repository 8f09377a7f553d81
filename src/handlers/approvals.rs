use axum::{extract::Query, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, Result};
use crate::models::approval::TokenApproval;
use crate::utils::is_eth_address;

#[derive(Debug, Deserialize)]
pub struct ApprovalsQuery {
    pub address: Option<String>,
}

/// Approval listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApprovalListResponse {
    pub approvals: Vec<TokenApproval>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

/// Request to prepare an approval revocation
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevokeApprovalRequest {
    pub token_address: Option<String>,
    pub spender_address: Option<String>,
    pub user_address: Option<String>,
}

/// Revocation response with the prepared transaction passthrough
#[derive(Debug, Serialize, ToSchema)]
pub struct RevokeApprovalResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "transactionData")]
    pub transaction_data: TransactionData,
}

/// Opaque transaction fields handed back to the wallet; this service does not
/// construct calldata.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionData {
    pub to: String,
    pub data: String,
    #[serde(rename = "gasLimit")]
    pub gas_limit: String,
}

fn approval_table() -> Vec<TokenApproval> {
    vec![TokenApproval {
        id: "1".to_string(),
        token_name: "USDC".to_string(),
        token_symbol: "USDC".to_string(),
        token_address: "0xa0b86a33e6ba3c0e9439c4bb9ad09c9b93e7b6b2".to_string(),
        spender: "Uniswap V3".to_string(),
        spender_address: "0xe592427a0aece92de3edee1f18e0157c05861564".to_string(),
        allowance: "Unlimited".to_string(),
        last_used: "2024-01-15".to_string(),
        risk_level: "medium".to_string(),
    }]
}

/// List token approvals for a wallet
/// GET /api/okx/approvals?address=0x...
#[utoipa::path(
    get,
    path = "/api/okx/approvals",
    tag = "approvals",
    params(("address" = String, Query, description = "Wallet address to list approvals for")),
    responses(
        (status = 200, description = "Token approvals for the wallet", body = ApprovalListResponse),
        (status = 400, description = "Missing or malformed address")
    )
)]
pub async fn get_approvals(
    Query(query): Query<ApprovalsQuery>,
) -> Result<Json<ApprovalListResponse>> {
    let address = query
        .address
        .ok_or_else(|| ApiError::missing_field("address"))?;
    if !is_eth_address(&address) {
        return Err(ApiError::invalid_address("address"));
    }

    let approvals = approval_table();
    Ok(Json(ApprovalListResponse {
        total_count: approvals.len(),
        approvals,
    }))
}

/// Prepare a transaction revoking an approval
/// POST /api/approvals/revoke
#[utoipa::path(
    post,
    path = "/api/approvals/revoke",
    tag = "approvals",
    request_body = RevokeApprovalRequest,
    responses(
        (status = 200, description = "Revoke transaction prepared", body = RevokeApprovalResponse),
        (status = 400, description = "Missing or malformed address fields")
    )
)]
pub async fn revoke_approval(
    Json(payload): Json<RevokeApprovalRequest>,
) -> Result<Json<RevokeApprovalResponse>> {
    let token_address = require_address(payload.token_address, "tokenAddress")?;
    require_address(payload.spender_address, "spenderAddress")?;
    require_address(payload.user_address, "userAddress")?;

    Ok(Json(RevokeApprovalResponse {
        success: true,
        message: "Approval revoke transaction prepared".to_string(),
        transaction_data: TransactionData {
            to: token_address,
            data: "0x".to_string(),
            gas_limit: "21000".to_string(),
        },
    }))
}

fn require_address(value: Option<String>, field: &str) -> Result<String> {
    let value = value.ok_or_else(|| ApiError::missing_field(field))?;
    if !is_eth_address(&value) {
        return Err(ApiError::invalid_address(field));
    }
    Ok(value)
}
