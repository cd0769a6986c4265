//! optimus-server library - OPTIMUS society simulator
//!
//! REST + WebSocket backend: Parliament creates norms, the judiciary checks
//! them and resolves citizen cases, and a day advances once both bodies
//! have acted.

use axum::Router;
use optimus_common::EventBus;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod activity;
pub mod api;
pub mod config;
pub mod error;
pub mod notifications;
pub mod progress;
pub mod society;
pub mod state;

use notifications::NotificationLog;
use society::Society;
use state::SharedState;

/// Broadcast buffer per connected client
pub const EVENT_BUS_CAPACITY: usize = 100;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Domain model, day progress and activity feed
    pub shared: Arc<SharedState>,
    /// Persisted notification log
    pub notifications: Arc<NotificationLog>,
    /// Real-time fan-out to WebSocket clients
    pub events: EventBus,
}

impl AppState {
    /// Create new application state
    pub fn new(society: Society, notifications: NotificationLog) -> Self {
        Self {
            shared: Arc::new(SharedState::new(society)),
            notifications: Arc::new(notifications),
            events: EventBus::new(EVENT_BUS_CAPACITY),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        // Parliament and constitutionality review
        .route("/api/create_norm", post(api::create_norm))
        .route("/api/check_constitutionality", post(api::check_constitutionality))
        .route("/api/mark_unconstitutional", post(api::mark_unconstitutional))
        .route("/api/get_norms", get(api::get_norms))
        .route("/api/get_all_norms", get(api::get_all_norms))
        .route("/api/get_valid_norms", get(api::get_valid_norms))
        .route("/api/get_invalid_norms", get(api::get_invalid_norms))
        // Citizen cases
        .route("/api/generate_citizen_cases", post(api::generate_citizen_cases))
        .route("/api/get_pending_cases", get(api::get_pending_cases))
        .route("/api/get_solved_cases", get(api::get_solved_cases))
        .route("/api/get_all_cases", get(api::get_all_cases))
        .route("/api/solve_case/:case_id", post(api::solve_case))
        // Day cycle and logs
        .route("/api/simulate_day", post(api::simulate_day))
        .route("/api/get_day_progress", get(api::get_day_progress))
        .route("/api/get_activities", get(api::get_activities))
        .route("/api/get_notifications", get(api::get_notifications))
        // Analysis
        .route("/api/get_statistics", get(api::get_statistics))
        .route("/api/get_normative_inflation", get(api::get_normative_inflation));

    let pages = Router::new()
        .route("/", get(api::serve_index))
        .route("/judicial", get(api::serve_judicial))
        .route("/political", get(api::serve_political))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/ws", get(api::ws_handler))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
