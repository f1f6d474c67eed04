//! cef-dash library - CEF dashboard web service
//!
//! Serves the dashboard UI and the JSON/SVG API over the most recent upload.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use cef_common::Session;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod chart;
pub mod error;
pub mod logging;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Result of the most recent upload, replaced wholesale on each upload
    pub session: Arc<RwLock<Option<Session>>>,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
    /// Largest accepted file, measured after base64 decoding
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            session: Arc::new(RwLock::new(None)),
            startup_time: Utc::now(),
            max_upload_bytes,
        }
    }
}

/// Room for the data URL prefix, filename and JSON framing around the payload
const ENVELOPE_HEADROOM: usize = 64 * 1024;

/// Request body limit that admits a file of `max_upload_bytes`
///
/// Base64 emits 4 bytes for every 3 input bytes.
pub fn request_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_add(ENVELOPE_HEADROOM)
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = request_body_limit(state.max_upload_bytes);

    Router::new()
        .merge(api::ui_routes())
        .merge(api::upload_routes())
        .merge(api::view_routes())
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_limit_covers_base64() {
        assert_eq!(request_body_limit(3), 4 + ENVELOPE_HEADROOM);
        assert_eq!(request_body_limit(4), 8 + ENVELOPE_HEADROOM);
        assert!(request_body_limit(10 * 1024 * 1024) > 10 * 1024 * 1024 * 4 / 3);
        assert_eq!(request_body_limit(usize::MAX), usize::MAX);
    }
}
