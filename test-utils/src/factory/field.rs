//! Field factory for creating test field entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fields with customizable fields.
pub struct FieldFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    group_id: String,
    name: String,
    hourly_rate: f64,
}

impl<'a> FieldFactory<'a> {
    /// Creates a new FieldFactory with default values.
    ///
    /// Defaults:
    /// - id: `"field_{id}"`
    /// - name: `"Arena {id}"`
    /// - hourly_rate: `100.0`
    pub fn new(db: &'a DatabaseConnection, group_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("field_{}", id),
            group_id: group_id.into(),
            name: format!("Arena {}", id),
            hourly_rate: 100.0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Builds and inserts the field entity into the database.
    pub async fn build(self) -> Result<entity::field::Model, DbErr> {
        entity::field::ActiveModel {
            id: ActiveValue::Set(self.id),
            group_id: ActiveValue::Set(self.group_id),
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set("Rua das Flores, 100".to_string()),
            contact_name: ActiveValue::Set(None),
            contact_phone: ActiveValue::Set(None),
            hourly_rate: ActiveValue::Set(self.hourly_rate),
            coordinates: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a field with default values (hourly rate 100).
pub async fn create_field(
    db: &DatabaseConnection,
    group_id: impl Into<String>,
) -> Result<entity::field::Model, DbErr> {
    FieldFactory::new(db, group_id).build().await
}
