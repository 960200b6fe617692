//! Dashboard endpoints under /api/summary

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;

use crate::AppState;
use crate::error::ApiError;
use crate::models::matching::MatchingResponse;
use crate::models::summary::{AllDataResponse, HealthResponse, StatsResponse, SummaryTotals};
use crate::services::dashboard::{count_collections, load_collections};
use crate::services::matching::find_matches;
use crate::services::stats::{TOP_SECTORS, funding_totals, ideas_by_status, top_sectors};

/// GET /api/summary/all-data
///
/// Every record of the three collections plus headline totals.
pub async fn get_all_data(State(state): State<AppState>) -> Result<Json<AllDataResponse>, ApiError> {
    let collections = load_collections(&state.db).await?;
    let totals = funding_totals(&collections.ideas, &collections.investors);

    info!(
        entrepreneurs = collections.entrepreneurs.len(),
        ideas = collections.ideas.len(),
        investors = collections.investors.len(),
        "Dashboard data returned"
    );

    Ok(Json(AllDataResponse {
        success: true,
        summary: SummaryTotals {
            total_entrepreneurs: collections.entrepreneurs.len() as u64,
            total_ideas: collections.ideas.len() as u64,
            total_investors: collections.investors.len() as u64,
            total_funding_requested: totals.funding_requested,
            total_investment_capacity: totals.investment_capacity,
        },
        entrepreneurs: collections.entrepreneurs,
        ideas: collections.ideas,
        investors: collections.investors,
    }))
}

/// GET /api/summary/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let (collections, counts) = tokio::try_join!(
        load_collections(&state.db),
        count_collections(&state.db, true),
    )?;

    let top_sectors_list = top_sectors(
        collections.entrepreneurs.iter().map(|e| e.sector.as_str()),
        TOP_SECTORS,
    );
    let top_interests = top_sectors(
        collections.investors.iter().map(|i| i.sector_interest.as_str()),
        TOP_SECTORS,
    );

    Ok(Json(StatsResponse {
        counts,
        totals: funding_totals(&collections.ideas, &collections.investors),
        ideas_by_status: ideas_by_status(&collections.ideas),
        top_sectors: top_sectors_list,
        top_sector_interests: top_interests,
    }))
}

/// GET /api/summary/test
pub async fn get_health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let counts = count_collections(&state.db, false).await?;

    Ok(Json(HealthResponse {
        message: "API is working".to_string(),
        counts,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// GET /api/summary/matching
pub async fn get_matching(State(state): State<AppState>) -> Result<Json<MatchingResponse>, ApiError> {
    let matches = find_matches(&state.db).await?;

    info!(groups = matches.len(), "Matches returned");
    Ok(Json(MatchingResponse {
        total_matches: matches.len(),
        matches,
    }))
}
