//! Analysis endpoints

use axum::{extract::State, Json};

use crate::society::analysis::NormativeInflationResponse;
use crate::society::{NormativeInflation, Statistics};
use crate::AppState;

/// GET /api/get_statistics
pub async fn get_statistics(State(state): State<AppState>) -> Json<Statistics> {
    let society = state.shared.society.read().await;
    Json(Statistics::compute(&society))
}

/// GET /api/get_normative_inflation
pub async fn get_normative_inflation(
    State(state): State<AppState>,
) -> Json<NormativeInflationResponse> {
    let society = state.shared.society.read().await;
    Json(NormativeInflation::compute(&society).to_response())
}
