//! Match settlement service.
//!
//! Reconciles the derived transactions of a finished match with what the match currently
//! says: field rent as an expense, and the rent share of paid players as subscriber and
//! per-match income. Every derived row has a deterministic id, so settling the same match
//! any number of times converges to the same three (or fewer) rows.
//!
//! Settlement is best-effort. A failed write for one category is logged and recorded in the
//! returned report while the remaining categories are still attempted. Only the lookups
//! that every category depends on (field and players) propagate as errors.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{field::FieldRepository, player::PlayerRepository, transaction::TransactionRepository},
    error::AppError,
    model::{
        football_match::Match,
        settlement::{DerivedTransaction, SettlementAction, SettlementPlan, SettlementReport},
        transaction::TransactionCategory,
    },
};

pub struct SettlementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettlementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settles the derived transactions of `game`.
    ///
    /// Callers are expected to invoke this only for finished matches, after the match
    /// write has completed. A missing field settles with a rate of 0; paid ids without a
    /// player row count as neither subscriber nor per-match payer.
    ///
    /// Manual MATCH_REVENUE rows of the match are removed before any category is
    /// reconciled. If that cleanup fails, no category is touched.
    ///
    /// # Arguments
    /// - `game` - The persisted match
    ///
    /// # Returns
    /// - `Ok(SettlementReport)` - Per-category outcome, including failed writes
    /// - `Err(AppError::DbErr)` - Field or player lookup failed
    pub async fn settle(&self, game: &Match) -> Result<SettlementReport, AppError> {
        let field = FieldRepository::new(self.db)
            .get_by_id(&game.field_id)
            .await?;
        let (hourly_rate, field_name) = match field {
            Some(field) => (field.hourly_rate, field.name),
            None => {
                tracing::warn!(
                    "Field {} of match {} not found, settling with zero rent",
                    game.field_id,
                    game.id
                );
                (0.0, String::new())
            }
        };

        let players = PlayerRepository::new(self.db)
            .get_by_ids(game.paid_player_ids.as_slice())
            .await?;

        let plan = SettlementPlan::compute(
            hourly_rate,
            game.confirmed_player_ids.len(),
            &game.paid_player_ids,
            &players,
        );

        let repo = TransactionRepository::new(self.db);
        let mut report = SettlementReport::new(&game.id);

        match repo
            .delete_by_match_and_category(&game.id, TransactionCategory::MatchRevenue.as_str())
            .await
        {
            Ok(removed) => report.legacy_removed = removed,
            Err(e) => {
                tracing::error!(
                    "Failed to remove manual revenue of match {}, skipping settlement: {}",
                    game.id,
                    e
                );
                report.legacy_error = Some(e.to_string());
                return Ok(report);
            }
        }

        for derived in plan.derived_transactions(game, &field_name) {
            let category = derived.category;
            let id = derived.id.clone();

            let action = match reconcile(&repo, derived).await {
                Ok(action) => action,
                Err(e) => {
                    tracing::error!("Failed to settle transaction {}: {}", id, e);
                    SettlementAction::Failed(e.to_string())
                }
            };

            report.outcomes.push((category, action));
        }

        tracing::debug!(
            "Settled match {}: rent {}, mensal {}, avulso {}, {} manual rows removed",
            game.id,
            plan.hourly_rate,
            plan.mensal_amount,
            plan.avulso_amount,
            report.legacy_removed
        );

        Ok(report)
    }
}

/// Brings one derived transaction in line with its target amount.
async fn reconcile(
    repo: &TransactionRepository<'_>,
    derived: DerivedTransaction,
) -> Result<SettlementAction, DbErr> {
    let existing = repo.get_by_id(&derived.id).await?;

    let action = match (existing, derived.should_exist()) {
        (Some(existing), true) => {
            if existing.description == derived.description
                && existing.amount == derived.amount
                && existing.date == derived.date
            {
                SettlementAction::Unchanged
            } else {
                repo.update_amount(existing, derived.description, derived.amount, derived.date)
                    .await?;
                SettlementAction::Updated
            }
        }
        (None, true) => {
            repo.create(derived.into_create_params()).await?;
            SettlementAction::Created
        }
        (Some(_), false) => {
            repo.delete(&derived.id).await?;
            SettlementAction::Deleted
        }
        (None, false) => SettlementAction::Unchanged,
    };

    Ok(action)
}
