pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_entrepreneurs;
mod m20260301_000002_create_ideas;
mod m20260301_000003_create_investors;
mod m20260301_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_entrepreneurs::Migration),
            Box::new(m20260301_000002_create_ideas::Migration),
            Box::new(m20260301_000003_create_investors::Migration),
            Box::new(m20260301_000004_create_users::Migration),
        ]
    }
}
