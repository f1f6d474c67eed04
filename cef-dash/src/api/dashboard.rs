//! Main dashboard panel: question chart, group grid, development lists

use axum::{
    extract::{Query, State},
    Json,
};
use cef_common::views::DashboardView;

use super::{selected, ViewQuery};
use crate::{ApiError, ApiResult, AppState};

/// GET /api/dashboard?participant=..&block=..
///
/// Returns `null` until both a participant and a block are selected.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> ApiResult<Json<Option<DashboardView>>> {
    let (Some(name), Some(block)) = (selected(&query.participant), selected(&query.block)) else {
        return Ok(Json(None));
    };

    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoData)?;
    let (block, row) = session.person(block, name)?;

    Ok(Json(Some(DashboardView::build(block, row))))
}
