//! File upload and selector options
//!
//! An upload replaces the whole session; the response carries the options
//! for the participant and block selectors.

use axum::{extract::State, Json};
use cef_common::upload::parse_contents;
use cef_common::Session;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{ApiResult, AppState};

pub const STATUS_NO_FILE: &str = "No file uploaded yet.";
pub const STATUS_UPLOADED: &str = "File uploaded successfully!";
pub const STATUS_NO_BLOCKS: &str = "File uploaded, but no blocks were found.";

/// Upload request: the file as a data URL plus its original name
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub filename: Option<String>,
    pub contents: Option<String>,
}

/// Status line and selector options
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub status: String,
    pub participants: Vec<String>,
    pub blocks: Vec<String>,
}

impl OptionsResponse {
    fn no_file() -> Self {
        Self {
            status: STATUS_NO_FILE.to_string(),
            participants: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn from_session(session: &Session) -> Self {
        let status = if session.is_empty() {
            STATUS_NO_BLOCKS
        } else {
            STATUS_UPLOADED
        };

        Self {
            status: status.to_string(),
            participants: session.participants().to_vec(),
            blocks: session.block_labels(),
        }
    }
}

/// POST /api/upload
///
/// Decodes the data URL, splits and scores the first worksheet and swaps the
/// result in as the current session. Missing contents leave the session as is.
pub async fn upload_file(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> ApiResult<Json<OptionsResponse>> {
    let Some(contents) = request.contents.as_deref().filter(|c| !c.is_empty()) else {
        return Ok(Json(OptionsResponse::no_file()));
    };

    let filename = request.filename.as_deref();
    let raw = parse_contents(contents, filename).map_err(|e| {
        warn!("Rejected upload {:?}: {}", filename, e);
        e
    })?;

    let session = Session::from_raw_table(&raw);
    if session.unmapped() > 0 {
        warn!(
            "{} answers did not match a known response and were left blank",
            session.unmapped()
        );
    }
    info!(
        "Loaded {:?}: {} rows, {} blocks, {} participants",
        filename.unwrap_or("upload"),
        raw.len(),
        session.blocks().len(),
        session.participants().len()
    );

    let response = OptionsResponse::from_session(&session);
    *state.session.write().await = Some(session);

    Ok(Json(response))
}

/// GET /api/options
///
/// Selector options for the current session, e.g. after a page reload
pub async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let guard = state.session.read().await;
    Json(match guard.as_ref() {
        Some(session) => OptionsResponse::from_session(session),
        None => OptionsResponse::no_file(),
    })
}
