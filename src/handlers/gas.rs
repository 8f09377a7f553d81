use axum::{extract::State, response::Json};

use crate::app_state::AppState;
use crate::models::gas::GasSnapshot;

/// Get current gas price tiers
/// GET /api/okx/gas
///
/// Always answers 200: the resolver degrades to static fallback prices when
/// the upstream oracle is unreachable, marked by the `source` field.
#[utoipa::path(
    get,
    path = "/api/okx/gas",
    tag = "gas",
    responses(
        (status = 200, description = "Current gas price snapshot", body = GasSnapshot)
    )
)]
pub async fn get_gas_prices(State(state): State<AppState>) -> Json<GasSnapshot> {
    Json(state.gas_resolver.resolve().await)
}
