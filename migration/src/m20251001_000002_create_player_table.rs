use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(string(Player::Id).primary_key())
                    .col(string(Player::GroupId))
                    .col(string_null(Player::UserId))
                    .col(string(Player::Name))
                    .col(string(Player::Nickname))
                    .col(string(Player::BirthDate))
                    .col(string(Player::Email))
                    .col(string_uniq(Player::Phone))
                    .col(string(Player::FavoriteTeam))
                    .col(string(Player::Position))
                    .col(double(Player::Rating))
                    .col(integer(Player::MatchesPlayed))
                    .col(text_null(Player::Avatar))
                    .col(boolean(Player::IsMonthlySubscriber).default(false))
                    .col(string_null(Player::MonthlyStartMonth))
                    .col(boolean(Player::IsGuest).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_group_id")
                    .table(Player::Table)
                    .col(Player::GroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    GroupId,
    UserId,
    Name,
    Nickname,
    BirthDate,
    Email,
    Phone,
    FavoriteTeam,
    Position,
    Rating,
    MatchesPlayed,
    Avatar,
    IsMonthlySubscriber,
    MonthlyStartMonth,
    IsGuest,
}
