use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::field::Field;

pub struct FieldRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, field: Field) -> Result<Field, DbErr> {
        let model = into_active_model(field).insert(self.db).await?;

        Ok(Field::from_entity(model))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Field>, DbErr> {
        let model = entity::prelude::Field::find_by_id(id).one(self.db).await?;

        Ok(model.map(Field::from_entity))
    }

    /// Gets all fields, optionally restricted to one group
    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Field>, DbErr> {
        let mut query = entity::prelude::Field::find();
        if let Some(group_id) = group_id {
            query = query.filter(entity::field::Column::GroupId.eq(group_id));
        }

        let models = query
            .order_by_asc(entity::field::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Field::from_entity).collect())
    }

    pub async fn update(&self, field: Field) -> Result<Field, DbErr> {
        let model = into_active_model(field).update(self.db).await?;

        Ok(Field::from_entity(model))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Field::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_active_model(field: Field) -> entity::field::ActiveModel {
    entity::field::ActiveModel {
        id: ActiveValue::Set(field.id),
        group_id: ActiveValue::Set(field.group_id),
        name: ActiveValue::Set(field.name),
        location: ActiveValue::Set(field.location),
        contact_name: ActiveValue::Set(field.contact_name),
        contact_phone: ActiveValue::Set(field.contact_phone),
        hourly_rate: ActiveValue::Set(field.hourly_rate),
        coordinates: ActiveValue::Set(field.coordinates),
    }
}
