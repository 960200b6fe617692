use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entrepreneurs::Table)
                    .if_not_exists()
                    .col(pk_auto(Entrepreneurs::Id))
                    .col(string_len(Entrepreneurs::Name, 100))
                    .col(string_uniq(Entrepreneurs::Email))
                    .col(string_len(Entrepreneurs::Phone, 10))
                    .col(string(Entrepreneurs::StartupStage).default("Idea Stage"))
                    .col(string(Entrepreneurs::Sector))
                    .col(text_null(Entrepreneurs::Description))
                    .col(timestamp_with_time_zone(Entrepreneurs::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Entrepreneurs::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // Listing sorts newest first by default
        manager
            .create_index(
                Index::create()
                    .name("idx_entrepreneurs_created_at")
                    .table(Entrepreneurs::Table)
                    .col(Entrepreneurs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entrepreneurs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Entrepreneurs {
    Table,
    Id,
    Name,
    Email,
    Phone,
    StartupStage,
    Sector,
    Description,
    CreatedAt,
    UpdatedAt,
}
