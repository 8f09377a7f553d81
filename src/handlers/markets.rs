use axum::response::Json;

use crate::handlers::response::ApiResponse;
use crate::models::market::Market;

fn market_table() -> Vec<Market> {
    vec![
        Market {
            id: "ETH-USDT".to_string(),
            name: "Ethereum".to_string(),
            price: 2245.67,
            change_24h: 2.45,
            volume: "1.2B".to_string(),
        },
        Market {
            id: "BTC-USDT".to_string(),
            name: "Bitcoin".to_string(),
            price: 43521.89,
            change_24h: -1.23,
            volume: "2.8B".to_string(),
        },
    ]
}

/// Market overview
/// GET /api/markets
#[utoipa::path(
    get,
    path = "/api/markets",
    tag = "markets",
    responses(
        (status = 200, description = "Tracked markets overview")
    )
)]
pub async fn get_markets() -> Json<ApiResponse<Vec<Market>>> {
    Json(ApiResponse::success(market_table()))
}
