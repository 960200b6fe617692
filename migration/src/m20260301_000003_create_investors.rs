use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Investors::Table)
                    .if_not_exists()
                    .col(pk_auto(Investors::Id))
                    .col(string_len(Investors::Name, 100))
                    .col(string_uniq(Investors::Email))
                    .col(string_len(Investors::Phone, 10))
                    .col(double(Investors::InvestmentCapacity))
                    .col(string(Investors::SectorInterest))
                    .col(string(Investors::InvestmentType).default("Any"))
                    .col(string(Investors::RiskTolerance).default("Medium"))
                    .col(timestamp_with_time_zone(Investors::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Investors::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_investors_capacity")
                    .table(Investors::Table)
                    .col(Investors::InvestmentCapacity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Investors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Investors {
    Table,
    Id,
    Name,
    Email,
    Phone,
    InvestmentCapacity,
    SectorInterest,
    InvestmentType,
    RiskTolerance,
    CreatedAt,
    UpdatedAt,
}
