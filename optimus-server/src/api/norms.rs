//! Norm endpoints: creation by Parliament, judicial review, listings

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use optimus_common::SocietyEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::progress::DayAction;
use crate::society::Norm;
use crate::AppState;

/// Optional body for POST /api/create_norm
#[derive(Debug, Default, Deserialize)]
pub struct CreateNormRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body naming an existing norm
///
/// `norm_id` may be a number or a numeric string.
#[derive(Debug, Deserialize)]
pub struct NormIdRequest {
    #[serde(default)]
    pub norm_id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CreateNormResponse {
    pub id: u64,
    pub text: String,
    pub valid: bool,
    pub complexity: u8,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub id: u64,
    pub valid: bool,
    pub complexity: u8,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Norm listing entry
#[derive(Debug, Serialize)]
pub struct NormSummary {
    pub id: u64,
    pub text: String,
    pub complexity: u8,
    pub valid: bool,
}

impl From<&Norm> for NormSummary {
    fn from(norm: &Norm) -> Self {
        Self {
            id: norm.id,
            text: norm.text.clone(),
            complexity: norm.complexity,
            valid: norm.valid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AllNormsResponse {
    pub norms: Vec<NormSummary>,
}

#[derive(Debug, Serialize)]
pub struct ValidNormsResponse {
    pub valid_norms: Vec<NormSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvalidNormsResponse {
    pub invalid_norms: Vec<NormSummary>,
}

/// Extract a usable norm id; 0 counts as missing
fn require_norm_id(body: Result<Json<NormIdRequest>, JsonRejection>) -> ApiResult<u64> {
    let raw = match body {
        Ok(Json(req)) => req.norm_id,
        // No JSON body at all
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => {
            return Err(ApiError::BadRequest(format!(
                "Invalid JSON body: {}",
                rejection.body_text()
            )))
        }
    };

    let norm_id = match raw {
        None | Some(Value::Null) => 0,
        Some(Value::Number(n)) => n.as_u64().ok_or_else(invalid_norm_id)?,
        Some(Value::String(s)) if s.trim().is_empty() => 0,
        Some(Value::String(s)) => s.trim().parse::<u64>().map_err(|_| invalid_norm_id())?,
        Some(_) => return Err(invalid_norm_id()),
    };

    if norm_id == 0 {
        return Err(ApiError::BadRequest("Missing norm_id".to_string()));
    }
    Ok(norm_id)
}

fn invalid_norm_id() -> ApiError {
    ApiError::BadRequest("Invalid norm_id".to_string())
}

/// POST /api/create_norm
///
/// Parliament enacts a norm. Completes the political action of the day.
pub async fn create_norm(
    State(state): State<AppState>,
    body: Option<Json<CreateNormRequest>>,
) -> Json<CreateNormResponse> {
    let text = body.and_then(|Json(req)| req.text);

    let (norm, iteration) = {
        let mut society = state.shared.society.write().await;
        let norm = society.create_norm(text);
        (norm, society.iteration)
    };

    state
        .shared
        .record_activity(format!("Created Norm #{}: {}", norm.id, norm.text))
        .await;
    state.shared.mark_action(DayAction::Political, iteration).await;

    state
        .notifications
        .info(format!("New norm created: {}", norm.text))
        .await;
    state.events.publish(SocietyEvent::NormCreated);

    Json(CreateNormResponse {
        id: norm.id,
        text: norm.text,
        valid: norm.valid,
        complexity: norm.complexity,
    })
}

/// POST /api/check_constitutionality
///
/// Judicial review of `norm_id`. Completes the judicial action of the day.
/// An unknown norm returns 404 and changes nothing.
pub async fn check_constitutionality(
    State(state): State<AppState>,
    body: Result<Json<NormIdRequest>, JsonRejection>,
) -> ApiResult<Json<CheckResponse>> {
    let norm_id = require_norm_id(body)?;

    let (was_valid, norm, iteration) = {
        let mut society = state.shared.society.write().await;
        let was_valid = society
            .parliament
            .get(norm_id)
            .map(|n| n.valid)
            .ok_or_else(|| ApiError::NotFound("Norm not found".to_string()))?;
        let norm = society.check_constitutionality(norm_id)?;
        (was_valid, norm, society.iteration)
    };

    state
        .shared
        .record_activity(format!(
            "Checked constitutionality for Norm #{}: {}",
            norm.id,
            if norm.valid { "Valid" } else { "Invalid" }
        ))
        .await;
    state.shared.mark_action(DayAction::Judicial, iteration).await;

    if was_valid && !norm.valid {
        info!("Norm #{} struck down (complexity {})", norm.id, norm.complexity);
        state.events.publish(SocietyEvent::NormUpdate);
    }

    Ok(Json(CheckResponse {
        id: norm.id,
        valid: norm.valid,
        complexity: norm.complexity,
    }))
}

/// POST /api/mark_unconstitutional
pub async fn mark_unconstitutional(
    State(state): State<AppState>,
    body: Result<Json<NormIdRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let norm_id = require_norm_id(body)?;

    let norm = state
        .shared
        .society
        .write()
        .await
        .mark_unconstitutional(norm_id)?;

    state
        .shared
        .record_activity(format!("Marked Norm #{} as unconstitutional", norm.id))
        .await;

    let message = format!("Norm #{} has been marked as unconstitutional.", norm.id);
    state.notifications.append(message.clone(), "warning").await;
    state.events.publish(SocietyEvent::NormUpdate);

    Ok(Json(MessageResponse { message }))
}

/// GET /api/get_norms
pub async fn get_norms(State(state): State<AppState>) -> Json<Vec<Norm>> {
    let society = state.shared.society.read().await;
    Json(society.parliament.norms().to_vec())
}

/// GET /api/get_all_norms
pub async fn get_all_norms(State(state): State<AppState>) -> Json<AllNormsResponse> {
    let society = state.shared.society.read().await;
    Json(AllNormsResponse {
        norms: society.parliament.norms().iter().map(NormSummary::from).collect(),
    })
}

/// GET /api/get_valid_norms
pub async fn get_valid_norms(State(state): State<AppState>) -> Json<ValidNormsResponse> {
    let society = state.shared.society.read().await;
    Json(ValidNormsResponse {
        valid_norms: society.parliament.valid_norms().map(NormSummary::from).collect(),
    })
}

/// GET /api/get_invalid_norms
pub async fn get_invalid_norms(State(state): State<AppState>) -> Json<InvalidNormsResponse> {
    let society = state.shared.society.read().await;
    Json(InvalidNormsResponse {
        invalid_norms: society.parliament.invalid_norms().map(NormSummary::from).collect(),
    })
}
