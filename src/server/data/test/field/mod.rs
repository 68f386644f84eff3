use crate::server::{data::field::FieldRepository, model::field::Field};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod update;
