use crate::server::{
    error::{validation::ValidationError, AppError},
    model::{
        football_match::Match,
        transaction::{CreateTransactionParams, TransactionType, UpsertMatchRevenueParams},
    },
    service::{settlement::SettlementService, transaction::TransactionService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod upsert_match_revenue;

fn revenue(match_id: &str, total_amount: f64) -> UpsertMatchRevenueParams {
    UpsertMatchRevenueParams {
        group_id: "g1".to_string(),
        match_id: match_id.to_string(),
        total_amount,
        description: "Receita da partida".to_string(),
        date: "2025-10-18".to_string(),
    }
}
