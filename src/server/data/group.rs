use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::group::Group;

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new group
    pub async fn create(&self, group: Group) -> Result<Group, DbErr> {
        let model = into_active_model(group).insert(self.db).await?;

        Ok(Group::from_entity(model))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Group>, DbErr> {
        let model = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(model.map(Group::from_entity))
    }

    /// Gets every group ordered by creation time
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let models = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Group::from_entity).collect())
    }

    /// Gets the groups whose stored rosters violate invariants, already corrected
    pub async fn get_misaligned(&self) -> Result<Vec<Group>, DbErr> {
        let models = entity::prelude::Group::find().all(self.db).await?;

        Ok(models
            .into_iter()
            .map(Group::from_entity_aligned)
            .filter_map(|(group, changed)| changed.then_some(group))
            .collect())
    }

    /// Overwrites every column of an existing group
    pub async fn update(&self, group: Group) -> Result<Group, DbErr> {
        let model = into_active_model(group).update(self.db).await?;

        Ok(Group::from_entity(model))
    }

    /// Deletes a group, returning whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_active_model(group: Group) -> entity::group::ActiveModel {
    entity::group::ActiveModel {
        id: ActiveValue::Set(group.id),
        admin_id: ActiveValue::Set(group.admin_id),
        admins: ActiveValue::Set(group.admins.into()),
        name: ActiveValue::Set(group.name),
        sport: ActiveValue::Set(group.sport),
        invite_code: ActiveValue::Set(group.invite_code),
        created_at: ActiveValue::Set(group.created_at),
        members: ActiveValue::Set(group.members.into()),
        pending_requests: ActiveValue::Set(group.pending_requests.into()),
        logo: ActiveValue::Set(group.logo),
        payment_mode: ActiveValue::Set(group.payment_mode),
        fixed_amount: ActiveValue::Set(group.fixed_amount),
        monthly_fee: ActiveValue::Set(group.monthly_fee),
        city: ActiveValue::Set(group.city),
    }
}
