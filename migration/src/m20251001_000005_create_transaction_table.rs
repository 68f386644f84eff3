use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(string(Transaction::Id).primary_key())
                    .col(string(Transaction::GroupId))
                    .col(string(Transaction::Description))
                    .col(double(Transaction::Amount))
                    .col(string(Transaction::Type))
                    .col(string(Transaction::Date))
                    .col(string(Transaction::Category))
                    .col(string_null(Transaction::RelatedPlayerId))
                    .col(string_null(Transaction::RelatedMatchId))
                    .to_owned(),
            )
            .await?;

        // Settlement looks up legacy rows by (related_match_id, category)
        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_related_match_category")
                    .table(Transaction::Table)
                    .col(Transaction::RelatedMatchId)
                    .col(Transaction::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_group_id")
                    .table(Transaction::Table)
                    .col(Transaction::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    Table,
    Id,
    GroupId,
    Description,
    Amount,
    Type,
    Date,
    Category,
    RelatedPlayerId,
    RelatedMatchId,
}
