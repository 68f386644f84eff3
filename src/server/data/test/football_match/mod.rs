use crate::server::{data::football_match::MatchRepository, model::football_match::Match};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
