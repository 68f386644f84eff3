//! Transaction service.
//!
//! Plain CRUD over the group ledger plus the manual single-row match revenue entry.
//! Settled categories are written by the settlement service, not here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::transaction::TransactionRepository,
    error::{validation::ValidationError, AppError},
    model::transaction::{
        CreateTransactionParams, Transaction, TransactionCategory, TransactionType,
        UpdateTransactionParams, UpsertMatchRevenueParams,
    },
};

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Transaction>, AppError> {
        let models = TransactionRepository::new(self.db).get_all(group_id).await?;

        models
            .into_iter()
            .map(|m| Transaction::from_entity(m).map_err(Into::into))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Transaction>, AppError> {
        let model = TransactionRepository::new(self.db).get_by_id(id).await?;

        Ok(model.map(Transaction::from_entity).transpose()?)
    }

    pub async fn create(&self, params: CreateTransactionParams) -> Result<Transaction, AppError> {
        validate_amount(params.amount)?;

        let model = TransactionRepository::new(self.db).create(params).await?;

        Ok(Transaction::from_entity(model)?)
    }

    /// Replaces the transaction stored under `id`, creating it when absent
    pub async fn upsert(
        &self,
        id: &str,
        params: CreateTransactionParams,
    ) -> Result<(Transaction, bool), AppError> {
        validate_amount(params.amount)?;

        let repo = TransactionRepository::new(self.db);
        let exists = repo.get_by_id(id).await?.is_some();
        let params = params.with_id(id);

        let model = if exists {
            repo.update(Transaction {
                id: params.id,
                group_id: params.group_id,
                description: params.description,
                amount: params.amount,
                kind: params.kind,
                date: params.date,
                category: params.category,
                related_player_id: params.related_player_id,
                related_match_id: params.related_match_id,
            })
            .await?
        } else {
            repo.create(params).await?
        };

        Ok((Transaction::from_entity(model)?, !exists))
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdateTransactionParams,
    ) -> Result<Transaction, AppError> {
        if let Some(amount) = params.amount {
            validate_amount(amount)?;
        }

        let repo = TransactionRepository::new(self.db);

        let model = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;
        let mut transaction = Transaction::from_entity(model)?;

        if let Some(group_id) = params.group_id {
            transaction.group_id = group_id;
        }
        if let Some(description) = params.description {
            transaction.description = description;
        }
        if let Some(amount) = params.amount {
            transaction.amount = amount;
        }
        if let Some(kind) = params.kind {
            transaction.kind = kind;
        }
        if let Some(date) = params.date {
            transaction.date = date;
        }
        if let Some(category) = params.category {
            transaction.category = category;
        }
        if let Some(related_player_id) = params.related_player_id {
            transaction.related_player_id = related_player_id;
        }
        if let Some(related_match_id) = params.related_match_id {
            transaction.related_match_id = related_match_id;
        }

        let model = repo.update(transaction).await?;

        Ok(Transaction::from_entity(model)?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !TransactionRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Transaction {} not found", id)));
        }

        Ok(())
    }

    /// Records a match's total revenue as a single income row.
    ///
    /// Only `MATCH_REVENUE` rows are touched; settled categories are left alone. A positive
    /// total updates the match's first such row or creates `tx_<matchId>`; otherwise that row
    /// is deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Transaction))` - The created or updated revenue row
    /// - `Ok(None)` - The total was not positive and any existing row was removed
    pub async fn upsert_match_revenue(
        &self,
        params: UpsertMatchRevenueParams,
    ) -> Result<Option<Transaction>, AppError> {
        validate_amount(params.total_amount)?;

        let category = TransactionCategory::MatchRevenue;
        let repo = TransactionRepository::new(self.db);
        let existing = repo
            .get_first_by_match_and_category(&params.match_id, category.as_str())
            .await?;

        if params.total_amount <= 0.0 {
            if let Some(existing) = existing {
                repo.delete(&existing.id).await?;
                tracing::info!("Removed manual revenue {} of match {}", existing.id, params.match_id);
            }
            return Ok(None);
        }

        let model = match existing {
            Some(existing) => {
                repo.update_amount(
                    existing,
                    params.description,
                    params.total_amount,
                    params.date,
                )
                .await?
            }
            None => {
                repo.create(CreateTransactionParams {
                    id: category.derived_id(&params.match_id),
                    group_id: params.group_id,
                    description: params.description,
                    amount: params.total_amount,
                    kind: TransactionType::Income,
                    date: params.date,
                    category: category.as_str().to_string(),
                    related_player_id: None,
                    related_match_id: Some(params.match_id),
                })
                .await?
            }
        };

        Ok(Some(Transaction::from_entity(model)?))
    }
}

fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidAmount(amount));
    }

    Ok(())
}
