pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_group_table;
mod m20251001_000002_create_player_table;
mod m20251001_000003_create_field_table;
mod m20251001_000004_create_match_table;
mod m20251001_000005_create_transaction_table;
mod m20251014_000006_create_comment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_group_table::Migration),
            Box::new(m20251001_000002_create_player_table::Migration),
            Box::new(m20251001_000003_create_field_table::Migration),
            Box::new(m20251001_000004_create_match_table::Migration),
            Box::new(m20251001_000005_create_transaction_table::Migration),
            Box::new(m20251014_000006_create_comment_table::Migration),
        ]
    }
}
