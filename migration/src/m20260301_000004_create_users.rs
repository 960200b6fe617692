//! Migration to create the user accounts table
//!
//! Profile references are optional and left NULL until a profile is linked.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::PasswordHash))
                    .col(string(Users::Role))
                    .col(boolean(Users::IsVerified).default(false))
                    .col(integer_null(Users::EntrepreneurId))
                    .col(integer_null(Users::InvestorId))
                    .col(timestamp_with_time_zone(Users::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Users::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_entrepreneur")
                            .from(Users::Table, Users::EntrepreneurId)
                            .to(Entrepreneurs::Table, Entrepreneurs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_investor")
                            .from(Users::Table, Users::InvestorId)
                            .to(Investors::Table, Investors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    IsVerified,
    EntrepreneurId,
    InvestorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Entrepreneurs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Investors {
    Table,
    Id,
}
