use sea_orm::entity::prelude::*;

use crate::id_list::IdList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub admin_id: String,
    #[sea_orm(column_type = "Json")]
    pub admins: IdList,
    pub name: String,
    pub sport: String,
    pub invite_code: String,
    pub created_at: String,
    #[sea_orm(column_type = "Json")]
    pub members: IdList,
    #[sea_orm(column_type = "Json")]
    pub pending_requests: IdList,
    #[sea_orm(column_type = "Text", nullable)]
    pub logo: Option<String>,
    pub payment_mode: String,
    pub fixed_amount: f64,
    pub monthly_fee: f64,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
