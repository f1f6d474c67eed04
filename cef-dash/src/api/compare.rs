//! Block comparison: one participant's group grid in two blocks side by side

use axum::{
    extract::{Query, State},
    Json,
};
use cef_common::views::{group_grid, GroupTile};
use cef_common::Session;
use serde::{Deserialize, Serialize};

use super::selected;
use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub participant: Option<String>,
    pub block_1: Option<String>,
    pub block_2: Option<String>,
}

/// Each side is `null` while its block (or the participant) is unselected
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub left: Option<Vec<GroupTile>>,
    pub right: Option<Vec<GroupTile>>,
}

fn side(session: &Session, name: Option<&str>, block: Option<&str>) -> ApiResult<Option<Vec<GroupTile>>> {
    let (Some(name), Some(block)) = (name, block) else {
        return Ok(None);
    };
    let (_, row) = session.person(block, name)?;
    Ok(Some(group_grid(row)))
}

/// GET /api/compare?participant=..&block_1=..&block_2=..
pub async fn get_comparison(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> ApiResult<Json<CompareResponse>> {
    let name = selected(&query.participant);
    let left = selected(&query.block_1);
    let right = selected(&query.block_2);

    if name.is_none() || (left.is_none() && right.is_none()) {
        return Ok(Json(CompareResponse { left: None, right: None }));
    }

    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoData)?;

    Ok(Json(CompareResponse {
        left: side(session, name, left)?,
        right: side(session, name, right)?,
    }))
}
