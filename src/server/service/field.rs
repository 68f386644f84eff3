use sea_orm::DatabaseConnection;

use crate::server::{
    data::field::FieldRepository,
    error::{validation::ValidationError, AppError},
    model::field::{CreateFieldParams, Field, UpdateFieldParams},
};

pub struct FieldService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Field>, AppError> {
        Ok(FieldRepository::new(self.db).get_all(group_id).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Field>, AppError> {
        Ok(FieldRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: CreateFieldParams) -> Result<Field, AppError> {
        validate_hourly_rate(params.hourly_rate)?;

        let field = FieldRepository::new(self.db)
            .create(params.into_field())
            .await?;

        tracing::info!("Created field {} in group {}", field.id, field.group_id);

        Ok(field)
    }

    /// Replaces the field stored under `id`, creating it when absent
    pub async fn upsert(
        &self,
        id: &str,
        params: CreateFieldParams,
    ) -> Result<(Field, bool), AppError> {
        validate_hourly_rate(params.hourly_rate)?;

        let repo = FieldRepository::new(self.db);
        let exists = repo.get_by_id(id).await?.is_some();
        let field = params.with_id(id).into_field();

        let field = if exists {
            repo.update(field).await?
        } else {
            repo.create(field).await?
        };

        Ok((field, !exists))
    }

    /// Applies a partial update.
    ///
    /// A rate change only reaches transactions the next time a match on this field is settled.
    pub async fn update(&self, id: &str, params: UpdateFieldParams) -> Result<Field, AppError> {
        if let Some(rate) = params.hourly_rate {
            validate_hourly_rate(rate)?;
        }

        let repo = FieldRepository::new(self.db);

        let mut field = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Field {} not found", id)))?;

        params.apply_to(&mut field);

        Ok(repo.update(field).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !FieldRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Field {} not found", id)));
        }

        Ok(())
    }
}

fn validate_hourly_rate(rate: f64) -> Result<(), ValidationError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(ValidationError::InvalidHourlyRate(rate));
    }

    Ok(())
}
