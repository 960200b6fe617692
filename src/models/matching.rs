//! Idea/investor match response models

use serde::{Deserialize, Serialize};

use crate::entities::{ideas, investors};

/// Identifying fields of a matched idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedIdea {
    pub id: i32,
    pub idea_title: String,
    pub entrepreneur_name: String,
    pub email: String,
    pub description: String,
    pub funding_needed: f64,
}

impl From<&ideas::Model> for MatchedIdea {
    fn from(idea: &ideas::Model) -> Self {
        Self {
            id: idea.id,
            idea_title: idea.idea_title.clone(),
            entrepreneur_name: idea.entrepreneur_name.clone(),
            email: idea.email.clone(),
            description: idea.description.clone(),
            funding_needed: idea.funding_needed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedInvestor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub sector_interest: String,
    pub investment_capacity: f64,
}

impl From<&investors::Model> for MatchedInvestor {
    fn from(investor: &investors::Model) -> Self {
        Self {
            id: investor.id,
            name: investor.name.clone(),
            email: investor.email.clone(),
            sector_interest: investor.sector_interest.clone(),
            investment_capacity: investor.investment_capacity,
        }
    }
}

/// One idea with every investor that qualifies for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGroup {
    pub idea: MatchedIdea,
    pub investors: Vec<MatchedInvestor>,
}

/// Response for GET /api/summary/matching
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResponse {
    pub matches: Vec<MatchGroup>,
    pub total_matches: usize,
}
