//! Match service.
//!
//! Every write path that can leave a match finished (create, replace, partial update,
//! finalize) persists the match and then settles it while holding the match's lock.
//! Settlement failures are logged and never fail the write; the caller always gets the
//! persisted match back. Reopening only clears the flag and leaves derived transactions
//! in place.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::football_match::MatchRepository,
    error::AppError,
    model::football_match::{CreateMatchParams, Match, UpdateMatchParams},
    service::{match_lock::MatchLockService, settlement::SettlementService},
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a MatchLockService,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a MatchLockService) -> Self {
        Self { db, locks }
    }

    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_all(group_id).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a match, settling it if created as finished
    pub async fn create(&self, params: CreateMatchParams) -> Result<Match, AppError> {
        let _lock = self.locks.lock(&params.id).await;

        let game = MatchRepository::new(self.db)
            .create(params.into_match())
            .await?;

        tracing::info!("Created match {} in group {}", game.id, game.group_id);

        self.settle_if_finished(&game).await;

        Ok(game)
    }

    /// Replaces the match stored under `id`, creating it when absent.
    ///
    /// # Returns
    /// - `Ok((Match, true))` - The match was created
    /// - `Ok((Match, false))` - An existing match was replaced
    pub async fn upsert(
        &self,
        id: &str,
        params: CreateMatchParams,
    ) -> Result<(Match, bool), AppError> {
        let _lock = self.locks.lock(id).await;
        let repo = MatchRepository::new(self.db);

        let exists = repo.get_by_id(id).await?.is_some();
        let game = params.with_id(id).into_match();

        let game = if exists {
            repo.update(game).await?
        } else {
            repo.create(game).await?
        };

        self.settle_if_finished(&game).await;

        Ok((game, !exists))
    }

    /// Applies a partial update, settling if the result is finished
    pub async fn update(&self, id: &str, params: UpdateMatchParams) -> Result<Match, AppError> {
        let _lock = self.locks.lock(id).await;
        let repo = MatchRepository::new(self.db);

        let mut game = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", id)))?;

        params.apply_to(&mut game);
        let game = repo.update(game).await?;

        self.settle_if_finished(&game).await;

        Ok(game)
    }

    /// Applies the final roster and score, marks the match finished and settles it
    pub async fn finalize(&self, id: &str, params: UpdateMatchParams) -> Result<Match, AppError> {
        let game = self.update(id, params.into_finalize()).await?;

        tracing::info!(
            "Finalized match {} ({} confirmed, {} paid)",
            game.id,
            game.confirmed_player_ids.len(),
            game.paid_player_ids.len()
        );

        Ok(game)
    }

    /// Marks a match as not finished; derived transactions are kept
    pub async fn reopen(&self, id: &str) -> Result<Match, AppError> {
        let _lock = self.locks.lock(id).await;
        let repo = MatchRepository::new(self.db);

        let mut game = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", id)))?;

        game.finished = false;
        let game = repo.update(game).await?;

        tracing::info!("Reopened match {}", game.id);

        Ok(game)
    }

    /// Deletes a match; derived transactions stay as historical records
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _lock = self.locks.lock(id).await;

        if !MatchRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Match {} not found", id)));
        }

        Ok(())
    }

    async fn settle_if_finished(&self, game: &Match) {
        if !game.finished {
            return;
        }

        match SettlementService::new(self.db).settle(game).await {
            Ok(report) if report.has_failures() => {
                tracing::warn!("Settlement of match {} completed with failures", game.id);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to settle match {}: {}", game.id, e);
            }
        }
    }
}
