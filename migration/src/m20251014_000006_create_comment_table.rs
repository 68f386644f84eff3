use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000004_create_match_table::Match;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(string(Comment::Id).primary_key())
                    .col(string(Comment::GroupId))
                    .col(string(Comment::MatchId))
                    .col(string_null(Comment::ParentId))
                    .col(string(Comment::AuthorPlayerId))
                    .col(text(Comment::Content))
                    .col(string(Comment::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_match_id")
                            .from(Comment::Table, Comment::MatchId)
                            .to(Match::Table, Match::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    GroupId,
    MatchId,
    ParentId,
    AuthorPlayerId,
    Content,
    CreatedAt,
}
