use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(string(Match::Id).primary_key())
                    .col(string(Match::GroupId))
                    .col(string(Match::Date))
                    .col(string(Match::Time))
                    .col(string(Match::FieldId))
                    .col(json(Match::ConfirmedPlayerIds))
                    .col(json(Match::PaidPlayerIds))
                    .col(json(Match::TeamA))
                    .col(json(Match::TeamB))
                    .col(integer(Match::ScoreA))
                    .col(integer(Match::ScoreB))
                    .col(boolean(Match::Finished).default(false))
                    .col(string_null(Match::MvpId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_group_id")
                    .table(Match::Table)
                    .col(Match::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Match {
    Table,
    Id,
    GroupId,
    Date,
    Time,
    FieldId,
    ConfirmedPlayerIds,
    PaidPlayerIds,
    TeamA,
    TeamB,
    ScoreA,
    ScoreB,
    Finished,
    MvpId,
}
