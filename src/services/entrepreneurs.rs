use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, info};

use crate::entities::{entrepreneurs, prelude::*};
use crate::error::ApiError;
use crate::models::common::ListResponse;
use crate::models::entrepreneur::{EntrepreneurListQuery, NewEntrepreneur, StartupStage};
use crate::services::listing::{PageRequest, SortSpec, contains_ci, fetch_page, filter_text};
use crate::validation::Choice;

const ENTITY: &str = "entrepreneur";

/// Insert a validated profile; the email must not already be registered.
pub async fn create_entrepreneur(
    db: &DatabaseConnection,
    profile: NewEntrepreneur,
) -> Result<entrepreneurs::Model, ApiError> {
    let existing = Entrepreneurs::find()
        .filter(entrepreneurs::Column::Email.eq(&profile.email))
        .one(db)
        .await?;

    if existing.is_some() {
        debug!(email = %profile.email, "Duplicate entrepreneur email");
        return Err(ApiError::Duplicate { entity: ENTITY });
    }

    let now = Utc::now();
    let new_entrepreneur = entrepreneurs::ActiveModel {
        name: Set(profile.name),
        email: Set(profile.email),
        phone: Set(profile.phone),
        startup_stage: Set(profile.startup_stage.as_str().to_string()),
        sector: Set(profile.sector),
        description: Set(profile.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = new_entrepreneur
        .insert(db)
        .await
        .map_err(|e| ApiError::from_insert(e, ApiError::Duplicate { entity: ENTITY }))?;

    info!(id = saved.id, sector = %saved.sector, "Entrepreneur registered");
    Ok(saved)
}

pub async fn list_entrepreneurs(
    db: &DatabaseConnection,
    query: &EntrepreneurListQuery,
) -> Result<ListResponse<entrepreneurs::Model>, ApiError> {
    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let mut select = Entrepreneurs::find();

    if let Some(sector) = filter_text(query.sector.as_deref()) {
        select = select.filter(contains_ci(entrepreneurs::Column::Sector, sector));
    }
    if let Some(stage) = filter_text(query.stage.as_deref()).and_then(StartupStage::parse) {
        select = select.filter(entrepreneurs::Column::StartupStage.eq(stage.as_str()));
    }

    let sort = SortSpec::parse(query.sort.as_deref(), "-createdAt");
    let sort_column = match sort.field.as_str() {
        "name" => entrepreneurs::Column::Name,
        "sector" => entrepreneurs::Column::Sector,
        "startupStage" => entrepreneurs::Column::StartupStage,
        _ => entrepreneurs::Column::CreatedAt,
    };

    Ok(fetch_page(db, select, sort_column, entrepreneurs::Column::Id, &sort, page).await?)
}
