use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Field::Table)
                    .if_not_exists()
                    .col(string(Field::Id).primary_key())
                    .col(string(Field::GroupId))
                    .col(string(Field::Name))
                    .col(string(Field::Location))
                    .col(string_null(Field::ContactName))
                    .col(string_null(Field::ContactPhone))
                    .col(double(Field::HourlyRate))
                    .col(json_null(Field::Coordinates))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Field::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Field {
    Table,
    Id,
    GroupId,
    Name,
    Location,
    ContactName,
    ContactPhone,
    HourlyRate,
    Coordinates,
}
