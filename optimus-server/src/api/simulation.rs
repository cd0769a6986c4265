//! Day cycle endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::progress::DayProgressTracker;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SimulateDayResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DayProgressResponse {
    pub iteration: u64,
    pub day_complete: bool,
    pub actions: DayProgressTracker,
}

/// POST /api/simulate_day
///
/// Advances the society by one day once both actions are done, clearing
/// the progress flags for the next day.
pub async fn simulate_day(State(state): State<AppState>) -> ApiResult<Json<SimulateDayResponse>> {
    let day = {
        let mut progress = state.shared.progress.write().await;
        if !progress.is_day_complete() {
            return Err(ApiError::BadRequest(
                "Both actions must be completed to pass the day".to_string(),
            ));
        }
        progress.reset_day();
        state.shared.society.write().await.advance_day()
    };

    state
        .shared
        .record_activity(format!("Day {} progressed successfully!", day))
        .await;

    Ok(Json(SimulateDayResponse {
        message: format!("Day {} simulated successfully!", day),
    }))
}

/// GET /api/get_day_progress
pub async fn get_day_progress(State(state): State<AppState>) -> Json<DayProgressResponse> {
    let actions = state.shared.progress().await;
    let iteration = state.shared.society.read().await.iteration;
    Json(DayProgressResponse {
        iteration,
        day_complete: actions.is_day_complete(),
        actions,
    })
}

/// GET /api/get_activities
pub async fn get_activities(State(state): State<AppState>) -> Json<ActivitiesResponse> {
    Json(ActivitiesResponse {
        activities: state.shared.activities().await,
    })
}
