use sea_orm::entity::prelude::*;

use crate::id_list::IdList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub group_id: String,
    pub date: String,
    pub time: String,
    pub field_id: String,
    #[sea_orm(column_type = "Json")]
    pub confirmed_player_ids: IdList,
    #[sea_orm(column_type = "Json")]
    pub paid_player_ids: IdList,
    pub team_a: Json,
    pub team_b: Json,
    pub score_a: i32,
    pub score_b: i32,
    pub finished: bool,
    pub mvp_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
