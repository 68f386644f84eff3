use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Group::Table)
                    .if_not_exists()
                    .col(string(Group::Id).primary_key())
                    .col(string(Group::AdminId))
                    .col(json(Group::Admins))
                    .col(string(Group::Name))
                    .col(string(Group::Sport))
                    .col(string(Group::InviteCode))
                    .col(string(Group::CreatedAt))
                    .col(json(Group::Members))
                    .col(json(Group::PendingRequests))
                    .col(text_null(Group::Logo))
                    .col(string(Group::PaymentMode).default("fixed"))
                    .col(double(Group::FixedAmount).default(0.0))
                    .col(double(Group::MonthlyFee).default(0.0))
                    .col(string(Group::City).default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Group::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Group {
    Table,
    Id,
    AdminId,
    Admins,
    Name,
    Sport,
    InviteCode,
    CreatedAt,
    Members,
    PendingRequests,
    Logo,
    PaymentMode,
    FixedAmount,
    MonthlyFee,
    City,
}
