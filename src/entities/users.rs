//! `SeaORM` Entity for users table
//!
//! Holds the bcrypt hash, so `Model` is never serialized.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_verified: bool,
    pub entrepreneur_id: Option<i32>,
    pub investor_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::entrepreneurs::Entity",
        from = "Column::EntrepreneurId",
        to = "super::entrepreneurs::Column::Id",
        on_delete = "SetNull"
    )]
    Entrepreneur,
    #[sea_orm(
        belongs_to = "super::investors::Entity",
        from = "Column::InvestorId",
        to = "super::investors::Column::Id",
        on_delete = "SetNull"
    )]
    Investor,
}

impl Related<super::entrepreneurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entrepreneur.def()
    }
}

impl Related<super::investors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
