//! Whole-collection reads backing the dashboard endpoints.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::entities::{entrepreneurs, ideas, investors, prelude::*};
use crate::models::summary::CollectionCounts;

pub struct Collections {
    pub entrepreneurs: Vec<entrepreneurs::Model>,
    pub ideas: Vec<ideas::Model>,
    pub investors: Vec<investors::Model>,
}

/// All three collections, newest first, read concurrently.
pub async fn load_collections(db: &DatabaseConnection) -> Result<Collections, DbErr> {
    let (entrepreneurs, ideas, investors) = tokio::try_join!(
        Entrepreneurs::find()
            .order_by_desc(entrepreneurs::Column::CreatedAt)
            .order_by_desc(entrepreneurs::Column::Id)
            .all(db),
        Ideas::find()
            .order_by_desc(ideas::Column::CreatedAt)
            .order_by_desc(ideas::Column::Id)
            .all(db),
        Investors::find()
            .order_by_desc(investors::Column::CreatedAt)
            .order_by_desc(investors::Column::Id)
            .all(db),
    )?;

    Ok(Collections {
        entrepreneurs,
        ideas,
        investors,
    })
}

/// Row counts without loading records; `with_users` adds the account count.
pub async fn count_collections(
    db: &DatabaseConnection,
    with_users: bool,
) -> Result<CollectionCounts, DbErr> {
    let (entrepreneurs, ideas, investors) = tokio::try_join!(
        Entrepreneurs::find().count(db),
        Ideas::find().count(db),
        Investors::find().count(db),
    )?;

    let users = if with_users {
        Some(Users::find().count(db).await?)
    } else {
        None
    };

    Ok(CollectionCounts {
        entrepreneurs,
        ideas,
        investors,
        users,
    })
}
