//! UI serving routes
//!
//! Static pages are embedded at compile time.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../ui/index.html");
const JUDICIAL_HTML: &str = include_str!("../../ui/judicial.html");
const POLITICAL_HTML: &str = include_str!("../../ui/political.html");
const APP_JS: &str = include_str!("../../ui/app.js");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /judicial
pub async fn serve_judicial() -> Html<&'static str> {
    Html(JUDICIAL_HTML)
}

/// GET /political
pub async fn serve_political() -> Html<&'static str> {
    Html(POLITICAL_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
        .into_response()
}
