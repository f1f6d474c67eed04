//! Question chart as SVG

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use cef_common::views::question_chart;

use super::{selected, ViewQuery};
use crate::chart::render_svg;
use crate::{ApiError, ApiResult, AppState};

/// GET /api/chart.svg?participant=..&block=..
///
/// 204 until both a participant and a block are selected.
pub async fn get_chart_svg(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> ApiResult<Response> {
    let (Some(name), Some(block)) = (selected(&query.participant), selected(&query.block)) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoData)?;
    let (block, row) = session.person(block, name)?;
    let svg = render_svg(&question_chart(block, row));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        svg,
    )
        .into_response())
}
