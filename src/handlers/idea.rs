use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;

use crate::AppState;
use crate::entities::ideas;
use crate::error::ApiError;
use crate::models::common::{CreatedResponse, ListResponse};
use crate::models::idea::{IdeaCreated, IdeaListQuery, IdeaRequest};
use crate::services::ideas::{create_idea, list_ideas};

/// POST /api/ideas/submit
pub async fn submit_idea(
    State(state): State<AppState>,
    payload: Result<Json<IdeaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<IdeaCreated>>), ApiError> {
    let Json(payload) = payload?;
    let idea = payload.validate()?;

    let saved = create_idea(&state.db, idea).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Idea submitted successfully".to_string(),
            data: IdeaCreated {
                id: saved.id,
                title: saved.idea_title,
                entrepreneur: saved.entrepreneur_name,
            },
        }),
    ))
}

/// GET /api/ideas
///
/// # Query Parameters
///
/// - `minFunding` / `maxFunding` - inclusive funding range
/// - `entrepreneur` - case-insensitive substring of the entrepreneur name
/// - `status` - defaults to `Submitted`; `all` disables the filter
/// - `sort` - e.g. `fundingNeeded` or `-createdAt` (default `createdAt`)
/// - `limit` / `page` - pagination (default 50 / 1)
pub async fn get_ideas(
    State(state): State<AppState>,
    query: Result<Query<IdeaListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<ideas::Model>>, ApiError> {
    let Query(query) = query?;
    let response = list_ideas(&state.db, &query).await?;

    info!(
        count = response.data.len(),
        total = response.pagination.total,
        status = ?query.status_filter(),
        "Idea list returned"
    );
    Ok(Json(response))
}
