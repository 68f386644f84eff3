use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub group_id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub nickname: String,
    pub birth_date: String,
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub favorite_team: String,
    pub position: String,
    pub rating: f64,
    pub matches_played: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar: Option<String>,
    pub is_monthly_subscriber: bool,
    pub monthly_start_month: Option<String>,
    pub is_guest: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
