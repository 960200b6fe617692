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
use crate::entities::investors;
use crate::error::ApiError;
use crate::models::common::{CreatedResponse, ListResponse};
use crate::models::investor::{InvestorCreated, InvestorListQuery, InvestorRequest};
use crate::services::investors::{create_investor, list_investors};

/// POST /api/investors/proposals
pub async fn submit_investor(
    State(state): State<AppState>,
    payload: Result<Json<InvestorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<InvestorCreated>>), ApiError> {
    let Json(payload) = payload?;
    let investor = payload.validate()?;

    let saved = create_investor(&state.db, investor).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Investor profile submitted successfully".to_string(),
            data: InvestorCreated {
                id: saved.id,
                name: saved.name,
                email: saved.email,
                investment_capacity: saved.investment_capacity,
            },
        }),
    ))
}

/// GET /api/investors
///
/// Filters: `minCapacity`, `maxCapacity`, `sector`, `investmentType`,
/// `riskTolerance`. Unknown enum values are ignored.
pub async fn get_investors(
    State(state): State<AppState>,
    query: Result<Query<InvestorListQuery>, QueryRejection>,
) -> Result<Json<ListResponse<investors::Model>>, ApiError> {
    let Query(query) = query?;
    let response = list_investors(&state.db, &query).await?;

    info!(
        count = response.data.len(),
        total = response.pagination.total,
        "Investor list returned"
    );
    Ok(Json(response))
}
