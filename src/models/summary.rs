//! Dashboard aggregation response models

use serde::{Deserialize, Serialize};

use crate::entities::{entrepreneurs, ideas, investors};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    pub total_entrepreneurs: u64,
    pub total_ideas: u64,
    pub total_investors: u64,
    pub total_funding_requested: f64,
    pub total_investment_capacity: f64,
}

/// Response for GET /api/summary/all-data
#[derive(Debug, Clone, Serialize)]
pub struct AllDataResponse {
    pub success: bool,
    pub entrepreneurs: Vec<entrepreneurs::Model>,
    pub ideas: Vec<ideas::Model>,
    pub investors: Vec<investors::Model>,
    pub summary: SummaryTotals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionCounts {
    pub entrepreneurs: u64,
    pub ideas: u64,
    pub investors: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingTotals {
    pub funding_requested: f64,
    pub investment_capacity: f64,
    pub average_funding_requested: f64,
    pub average_investment_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorCount {
    pub sector: String,
    pub count: u64,
}

/// Response for GET /api/summary/stats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub counts: CollectionCounts,
    pub totals: FundingTotals,
    pub ideas_by_status: Vec<StatusCount>,
    pub top_sectors: Vec<SectorCount>,
    pub top_sector_interests: Vec<SectorCount>,
}

/// Response for GET /api/summary/test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub counts: CollectionCounts,
    pub timestamp: String,
}
