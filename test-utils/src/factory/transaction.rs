//! Transaction factory for creating test transaction entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions with customizable fields.
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    group_id: String,
    description: String,
    amount: f64,
    kind: String,
    category: String,
    date: String,
    related_match_id: Option<String>,
}

impl<'a> TransactionFactory<'a> {
    /// Creates a new TransactionFactory with default values.
    ///
    /// Defaults:
    /// - id: `"tx_test_{id}"`
    /// - amount: `50.0`, kind `INCOME`, category `OTHER`
    /// - related_match_id: `None`
    pub fn new(db: &'a DatabaseConnection, group_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("tx_test_{}", id),
            group_id: group_id.into(),
            description: format!("Transaction {}", id),
            amount: 50.0,
            kind: "INCOME".to_string(),
            category: "OTHER".to_string(),
            date: "2025-10-18".to_string(),
            related_match_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn related_match_id(mut self, related_match_id: Option<String>) -> Self {
        self.related_match_id = related_match_id;
        self
    }

    /// Builds and inserts the transaction entity into the database.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            id: ActiveValue::Set(self.id),
            group_id: ActiveValue::Set(self.group_id),
            description: ActiveValue::Set(self.description),
            amount: ActiveValue::Set(self.amount),
            kind: ActiveValue::Set(self.kind),
            date: ActiveValue::Set(self.date),
            category: ActiveValue::Set(self.category),
            related_player_id: ActiveValue::Set(None),
            related_match_id: ActiveValue::Set(self.related_match_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `OTHER` income transaction with default values.
pub async fn create_transaction(
    db: &DatabaseConnection,
    group_id: impl Into<String>,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db, group_id).build().await
}
