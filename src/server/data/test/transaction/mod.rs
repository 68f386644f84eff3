use crate::server::{
    data::transaction::TransactionRepository,
    model::transaction::{CreateTransactionParams, TransactionType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_match_and_category;
mod get_first_by_match_and_category;
