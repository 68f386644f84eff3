use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    /// `INCOME` or `EXPENSE`
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub date: String,
    pub category: String,
    pub related_player_id: Option<String>,
    pub related_match_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
