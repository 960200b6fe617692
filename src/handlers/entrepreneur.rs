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
use crate::entities::entrepreneurs;
use crate::error::ApiError;
use crate::models::common::{CreatedResponse, ListResponse};
use crate::models::entrepreneur::{EntrepreneurCreated, EntrepreneurListQuery, EntrepreneurRequest};
use crate::services::entrepreneurs::{create_entrepreneur, list_entrepreneurs};

/// POST /api/entrepreneurs/register
pub async fn register_entrepreneur(
    State(state): State<AppState>,
    payload: Result<Json<EntrepreneurRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<EntrepreneurCreated>>), ApiError> {
    let Json(payload) = payload?;
    let profile = payload.validate()?;

    let saved = create_entrepreneur(&state.db, profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Entrepreneur registered successfully".to_string(),
            data: EntrepreneurCreated {
                id: saved.id,
                name: saved.name,
                email: saved.email,
            },
        }),
    ))
}

/// GET /api/entrepreneurs
///
/// # Query Parameters
///
/// - `sector` - case-insensitive substring of the sector
/// - `stage` - exact startup stage
/// - `sort` - `name`, `sector`, `startupStage` or `createdAt`, `-` prefix for descending (default `-createdAt`)
/// - `limit` / `page` - pagination (default 50 / 1)
pub async fn get_entrepreneurs(
    State(state): State<AppState>,
    query: Result<Query<EntrepreneurListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<entrepreneurs::Model>>, ApiError> {
    let Query(query) = query?;
    let response = list_entrepreneurs(&state.db, &query).await?;

    info!(
        count = response.data.len(),
        total = response.pagination.total,
        "Entrepreneur list returned"
    );
    Ok(Json(response))
}
