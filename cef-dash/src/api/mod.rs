//! HTTP API handlers for cef-dash

pub mod buildinfo;
pub mod chart;
pub mod compare;
pub mod dashboard;
pub mod health;
pub mod ui;
pub mod upload;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::AppState;

pub use health::health_routes;
pub use ui::ui_routes;

/// Build upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload::upload_file))
        .route("/api/options", get(upload::get_options))
}

/// Build per-participant view routes
pub fn view_routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/chart.svg", get(chart::get_chart_svg))
        .route("/api/compare", get(compare::get_comparison))
        .route("/api/buildinfo", get(buildinfo::get_build_info))
}

/// Participant + block selection
///
/// Either may be missing or empty while the user is still choosing.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub participant: Option<String>,
    pub block: Option<String>,
}

/// Treat an empty selector value the same as no selection
pub(crate) fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
