//! Citizen case endpoints

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use optimus_common::SocietyEvent;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::society::{Case, Decision};
use crate::AppState;

/// Query parameters for POST /api/solve_case/:case_id
#[derive(Debug, Deserialize)]
pub struct SolveCaseQuery {
    /// `Accepted` (default) or `Rejected`
    pub decision: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratedCasesResponse {
    pub message: String,
    pub cases: Vec<Case>,
}

#[derive(Debug, Serialize)]
pub struct PendingCasesResponse {
    pub total: usize,
    pub pending_cases: Vec<Case>,
}

#[derive(Debug, Serialize)]
pub struct SolvedCasesResponse {
    pub total: usize,
    pub solved_cases: Vec<Case>,
}

#[derive(Debug, Serialize)]
pub struct AllCasesResponse {
    pub total: usize,
    pub cases: Vec<Case>,
}

#[derive(Debug, Serialize)]
pub struct SolveCaseResponse {
    pub message: String,
    pub case: Case,
}

/// POST /api/generate_citizen_cases
pub async fn generate_citizen_cases(State(state): State<AppState>) -> Json<GeneratedCasesResponse> {
    let cases = state.shared.society.write().await.generate_citizen_cases();

    let message = if cases.is_empty() {
        "No valid norm to generate case.".to_string()
    } else {
        format!("Generated {} citizen pressure cases", cases.len())
    };
    state.shared.record_activity(message.clone()).await;

    Json(GeneratedCasesResponse { message, cases })
}

/// GET /api/get_pending_cases
pub async fn get_pending_cases(State(state): State<AppState>) -> Json<PendingCasesResponse> {
    let society = state.shared.society.read().await;
    let pending_cases: Vec<Case> = society.judicial_system.pending_cases().cloned().collect();
    Json(PendingCasesResponse {
        total: pending_cases.len(),
        pending_cases,
    })
}

/// GET /api/get_solved_cases
///
/// Polled by clients on every `case_solved` signal and on their fallback timer.
pub async fn get_solved_cases(State(state): State<AppState>) -> Json<SolvedCasesResponse> {
    let society = state.shared.society.read().await;
    let solved_cases: Vec<Case> = society.judicial_system.solved_cases().cloned().collect();
    Json(SolvedCasesResponse {
        total: solved_cases.len(),
        solved_cases,
    })
}

/// GET /api/get_all_cases
pub async fn get_all_cases(State(state): State<AppState>) -> Json<AllCasesResponse> {
    let society = state.shared.society.read().await;
    let cases = society.judicial_system.cases().to_vec();
    Json(AllCasesResponse {
        total: cases.len(),
        cases,
    })
}

/// POST /api/solve_case/:case_id?decision=Accepted|Rejected
pub async fn solve_case(
    State(state): State<AppState>,
    case_id: Result<Path<u64>, PathRejection>,
    Query(query): Query<SolveCaseQuery>,
) -> ApiResult<Json<SolveCaseResponse>> {
    let case_id = match case_id {
        Ok(Path(id)) if id > 0 => id,
        _ => return Err(ApiError::BadRequest("Invalid case ID".to_string())),
    };
    let decision = match query.decision.as_deref() {
        Some(raw) => raw.parse::<Decision>()?,
        None => Decision::Accepted,
    };

    let case = state
        .shared
        .society
        .write()
        .await
        .solve_case(case_id, decision)?;
    info!("Case #{} has been resolved successfully", case.id);

    state
        .shared
        .record_activity(format!("Solved Case #{} as {:?}", case.id, decision))
        .await;

    let ruling = if case.constitutional {
        "Constitutional"
    } else {
        "Unconstitutional"
    };
    state
        .notifications
        .append(
            format!("Case #{} has been resolved ({})", case.id, ruling),
            "case_solved",
        )
        .await;
    state.events.publish(SocietyEvent::CaseSolved);

    Ok(Json(SolveCaseResponse {
        message: format!("Case {} has been solved", case.id),
        case,
    }))
}
