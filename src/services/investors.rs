use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, info};

use crate::entities::{investors, prelude::*};
use crate::error::ApiError;
use crate::models::common::ListResponse;
use crate::models::investor::{InvestmentType, InvestorListQuery, NewInvestor, RiskTolerance};
use crate::services::listing::{
    PageRequest, SortSpec, contains_ci, fetch_page, filter_number, filter_text,
};
use crate::validation::Choice;

const ENTITY: &str = "investor";

/// Insert a validated investor profile; the email must not already be registered.
pub async fn create_investor(
    db: &DatabaseConnection,
    investor: NewInvestor,
) -> Result<investors::Model, ApiError> {
    let existing = Investors::find()
        .filter(investors::Column::Email.eq(&investor.email))
        .one(db)
        .await?;

    if existing.is_some() {
        debug!(email = %investor.email, "Duplicate investor email");
        return Err(ApiError::Duplicate { entity: ENTITY });
    }

    let now = Utc::now();
    let new_investor = investors::ActiveModel {
        name: Set(investor.name),
        email: Set(investor.email),
        phone: Set(investor.phone),
        investment_capacity: Set(investor.investment_capacity),
        sector_interest: Set(investor.sector_interest),
        investment_type: Set(investor.investment_type.as_str().to_string()),
        risk_tolerance: Set(investor.risk_tolerance.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = new_investor
        .insert(db)
        .await
        .map_err(|e| ApiError::from_insert(e, ApiError::Duplicate { entity: ENTITY }))?;

    info!(
        id = saved.id,
        investment_capacity = saved.investment_capacity,
        "Investor profile submitted"
    );
    Ok(saved)
}

pub async fn list_investors(
    db: &DatabaseConnection,
    query: &InvestorListQuery,
) -> Result<ListResponse<investors::Model>, ApiError> {
    let page = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref());
    let mut select = Investors::find();

    if let Some(min) = filter_number(query.min_capacity.as_deref()) {
        select = select.filter(investors::Column::InvestmentCapacity.gte(min));
    }
    if let Some(max) = filter_number(query.max_capacity.as_deref()) {
        select = select.filter(investors::Column::InvestmentCapacity.lte(max));
    }
    if let Some(sector) = filter_text(query.sector.as_deref()) {
        select = select.filter(contains_ci(investors::Column::SectorInterest, sector));
    }
    if let Some(kind) = filter_text(query.investment_type.as_deref()).and_then(InvestmentType::parse) {
        select = select.filter(investors::Column::InvestmentType.eq(kind.as_str()));
    }
    if let Some(risk) = filter_text(query.risk_tolerance.as_deref()).and_then(RiskTolerance::parse) {
        select = select.filter(investors::Column::RiskTolerance.eq(risk.as_str()));
    }

    let sort = SortSpec::parse(query.sort.as_deref(), "createdAt");
    let sort_column = match sort.field.as_str() {
        "investmentCapacity" => investors::Column::InvestmentCapacity,
        "name" => investors::Column::Name,
        "sectorInterest" => investors::Column::SectorInterest,
        "riskTolerance" => investors::Column::RiskTolerance,
        _ => investors::Column::CreatedAt,
    };

    Ok(fetch_page(db, select, sort_column, investors::Column::Id, &sort, page).await?)
}
