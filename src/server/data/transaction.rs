//! Transaction data repository.
//!
//! Returns entity models; the type string is validated when services convert them
//! into domain transactions.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::transaction::{CreateTransactionParams, Transaction};

pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateTransactionParams,
    ) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            id: ActiveValue::Set(params.id),
            group_id: ActiveValue::Set(params.group_id),
            description: ActiveValue::Set(params.description),
            amount: ActiveValue::Set(params.amount),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            date: ActiveValue::Set(params.date),
            category: ActiveValue::Set(params.category),
            related_player_id: ActiveValue::Set(params.related_player_id),
            related_match_id: ActiveValue::Set(params.related_match_id),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<entity::transaction::Model>, DbErr> {
        entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets transactions newest first, optionally restricted to one group
    pub async fn get_all(
        &self,
        group_id: Option<&str>,
    ) -> Result<Vec<entity::transaction::Model>, DbErr> {
        let mut query = entity::prelude::Transaction::find();
        if let Some(group_id) = group_id {
            query = query.filter(entity::transaction::Column::GroupId.eq(group_id));
        }

        query
            .order_by_desc(entity::transaction::Column::Date)
            .order_by_asc(entity::transaction::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the first transaction of `category` attached to a match, by id order
    pub async fn get_first_by_match_and_category(
        &self,
        match_id: &str,
        category: &str,
    ) -> Result<Option<entity::transaction::Model>, DbErr> {
        entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::RelatedMatchId.eq(match_id))
            .filter(entity::transaction::Column::Category.eq(category))
            .order_by_asc(entity::transaction::Column::Id)
            .one(self.db)
            .await
    }

    /// Overwrites every column of an existing transaction
    pub async fn update(
        &self,
        transaction: Transaction,
    ) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            id: ActiveValue::Set(transaction.id),
            group_id: ActiveValue::Set(transaction.group_id),
            description: ActiveValue::Set(transaction.description),
            amount: ActiveValue::Set(transaction.amount),
            kind: ActiveValue::Set(transaction.kind.as_str().to_string()),
            date: ActiveValue::Set(transaction.date),
            category: ActiveValue::Set(transaction.category),
            related_player_id: ActiveValue::Set(transaction.related_player_id),
            related_match_id: ActiveValue::Set(transaction.related_match_id),
        }
        .update(self.db)
        .await
    }

    /// Rewrites description, amount and date, leaving the other columns as stored
    pub async fn update_amount(
        &self,
        existing: entity::transaction::Model,
        description: String,
        amount: f64,
        date: String,
    ) -> Result<entity::transaction::Model, DbErr> {
        let mut active_model: entity::transaction::ActiveModel = existing.into();
        active_model.description = ActiveValue::Set(description);
        active_model.amount = ActiveValue::Set(amount);
        active_model.date = ActiveValue::Set(date);

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every transaction of `category` attached to a match
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_by_match_and_category(
        &self,
        match_id: &str,
        category: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Transaction::delete_many()
            .filter(entity::transaction::Column::RelatedMatchId.eq(match_id))
            .filter(entity::transaction::Column::Category.eq(category))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
