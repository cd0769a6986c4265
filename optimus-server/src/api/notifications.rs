//! Notification log endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::notifications::Notification;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// Exact match on the notification type
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/get_notifications?type=<optional>
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Json<Vec<Notification>> {
    let kind = query.kind.as_deref().filter(|k| !k.is_empty());
    Json(state.notifications.list(kind).await)
}
