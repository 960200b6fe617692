//! Idea/investor matching
//!
//! An investor qualifies for an idea when their sector interest and the
//! idea's description contain one another (either direction, ignoring case)
//! and their investment capacity covers the funding the idea asks for.
//! Every submitted idea is compared against every investor; there is no
//! ranking, indexing or fuzzy matching.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::entities::{ideas, investors, prelude::*};
use crate::models::idea::IdeaStatus;
use crate::models::matching::{MatchGroup, MatchedIdea, MatchedInvestor};
use crate::validation::Choice;

/// Bidirectional, case-insensitive containment on already-lowercased text
fn overlaps(interest: &str, description: &str) -> bool {
    description.contains(interest) || interest.contains(description)
}

pub fn sector_overlaps(sector_interest: &str, description: &str) -> bool {
    overlaps(&sector_interest.to_lowercase(), &description.to_lowercase())
}

pub fn qualifies(idea: &ideas::Model, investor: &investors::Model) -> bool {
    investor.investment_capacity >= idea.funding_needed
        && sector_overlaps(&investor.sector_interest, &idea.description)
}

/// One group per idea with at least one qualifying investor, in input order.
pub fn match_ideas(ideas: &[ideas::Model], investors: &[investors::Model]) -> Vec<MatchGroup> {
    if investors.is_empty() {
        return Vec::new();
    }

    let interests: Vec<String> = investors
        .iter()
        .map(|inv| inv.sector_interest.to_lowercase())
        .collect();

    ideas
        .iter()
        .filter_map(|idea| {
            let description = idea.description.to_lowercase();
            let qualifying: Vec<MatchedInvestor> = investors
                .iter()
                .zip(&interests)
                .filter(|(inv, interest)| {
                    inv.investment_capacity >= idea.funding_needed
                        && overlaps(interest, &description)
                })
                .map(|(inv, _)| MatchedInvestor::from(inv))
                .collect();

            (!qualifying.is_empty()).then(|| MatchGroup {
                idea: MatchedIdea::from(idea),
                investors: qualifying,
            })
        })
        .collect()
}

/// Match every `Submitted` idea against every investor.
pub async fn find_matches(db: &DatabaseConnection) -> Result<Vec<MatchGroup>, DbErr> {
    let submitted = Ideas::find()
        .filter(ideas::Column::Status.eq(IdeaStatus::Submitted.as_str()))
        .order_by_asc(ideas::Column::Id)
        .all(db)
        .await?;
    let all_investors = Investors::find()
        .order_by_asc(investors::Column::Id)
        .all(db)
        .await?;

    let groups = match_ideas(&submitted, &all_investors);
    debug!(
        ideas = submitted.len(),
        investors = all_investors.len(),
        groups = groups.len(),
        "Matching complete"
    );
    Ok(groups)
}
