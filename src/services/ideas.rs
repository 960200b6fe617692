use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::entities::{ideas, prelude::*};
use crate::error::ApiError;
use crate::models::common::ListResponse;
use crate::models::idea::{IdeaListQuery, IdeaStatus, NewIdea};
use crate::services::listing::{
    PageRequest, SortSpec, contains_ci, fetch_page, filter_number, filter_text,
};
use crate::validation::Choice;

/// Insert a validated idea. Ideas have no uniqueness constraint and always
/// start out `Submitted`.
pub async fn create_idea(db: &DatabaseConnection, idea: NewIdea) -> Result<ideas::Model, ApiError> {
    let now = Utc::now();
    let new_idea = ideas::ActiveModel {
        entrepreneur_name: Set(idea.entrepreneur_name),
        idea_title: Set(idea.idea_title),
        description: Set(idea.description),
        funding_needed: Set(idea.funding_needed),
        email: Set(idea.email),
        status: Set(IdeaStatus::Submitted.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = new_idea.insert(db).await?;

    info!(id = saved.id, funding_needed = saved.funding_needed, "Idea submitted");
    Ok(saved)
}

pub async fn list_ideas(
    db: &DatabaseConnection,
    query: &IdeaListQuery,
) -> Result<ListResponse<ideas::Model>, ApiError> {
    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let mut select = Ideas::find();

    if let Some(min) = filter_number(query.min_funding.as_deref()) {
        select = select.filter(ideas::Column::FundingNeeded.gte(min));
    }
    if let Some(max) = filter_number(query.max_funding.as_deref()) {
        select = select.filter(ideas::Column::FundingNeeded.lte(max));
    }
    if let Some(name) = filter_text(query.entrepreneur.as_deref()) {
        select = select.filter(contains_ci(ideas::Column::EntrepreneurName, name));
    }
    if let Some(status) = query.status_filter() {
        select = select.filter(ideas::Column::Status.eq(status.as_str()));
    }

    let sort = SortSpec::parse(query.sort.as_deref(), "createdAt");
    let sort_column = match sort.field.as_str() {
        "fundingNeeded" => ideas::Column::FundingNeeded,
        "ideaTitle" => ideas::Column::IdeaTitle,
        "entrepreneurName" => ideas::Column::EntrepreneurName,
        "status" => ideas::Column::Status,
        _ => ideas::Column::CreatedAt,
    };

    Ok(fetch_page(db, select, sort_column, ideas::Column::Id, &sort, page).await?)
}
