use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ideas::Table)
                    .if_not_exists()
                    .col(pk_auto(Ideas::Id))
                    .col(string_len(Ideas::EntrepreneurName, 100))
                    .col(string_len(Ideas::IdeaTitle, 200))
                    .col(text(Ideas::Description))
                    .col(double(Ideas::FundingNeeded))
                    .col(string(Ideas::Email))
                    .col(string(Ideas::Status).default("Submitted"))
                    .col(timestamp_with_time_zone(Ideas::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Ideas::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // Matching and the default listing both filter on status
        manager
            .create_index(
                Index::create()
                    .name("idx_ideas_status")
                    .table(Ideas::Table)
                    .col(Ideas::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ideas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ideas {
    Table,
    Id,
    EntrepreneurName,
    IdeaTitle,
    Description,
    FundingNeeded,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}
