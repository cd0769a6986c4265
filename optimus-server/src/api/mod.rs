//! HTTP API handlers for optimus-server

pub mod cases;
pub mod health;
pub mod norms;
pub mod notifications;
pub mod simulation;
pub mod statistics;
pub mod ui;
pub mod ws;

pub use cases::{
    generate_citizen_cases, get_all_cases, get_pending_cases, get_solved_cases, solve_case,
};
pub use health::health_routes;
pub use norms::{
    check_constitutionality, create_norm, get_all_norms, get_invalid_norms, get_norms,
    get_valid_norms, mark_unconstitutional,
};
pub use notifications::get_notifications;
pub use simulation::{get_activities, get_day_progress, simulate_day};
pub use statistics::{get_normative_inflation, get_statistics};
pub use ui::{serve_app_js, serve_index, serve_judicial, serve_political};
pub use ws::ws_handler;
