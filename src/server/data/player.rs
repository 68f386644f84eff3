use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::player::Player;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, player: Player) -> Result<Player, DbErr> {
        let model = into_active_model(player).insert(self.db).await?;

        Ok(Player::from_entity(model))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Player>, DbErr> {
        let model = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(model.map(Player::from_entity))
    }

    /// Gets all players, optionally restricted to one group
    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Player>, DbErr> {
        let mut query = entity::prelude::Player::find();
        if let Some(group_id) = group_id {
            query = query.filter(entity::player::Column::GroupId.eq(group_id));
        }

        let models = query
            .order_by_asc(entity::player::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Player::from_entity).collect())
    }

    /// Gets players by id in one query.
    ///
    /// Ids with no matching row are simply absent from the returned map.
    pub async fn get_by_ids(&self, ids: &[String]) -> Result<HashMap<String, Player>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| (m.id.clone(), Player::from_entity(m)))
            .collect())
    }

    /// Gets every player linked to a user account
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<Player>, DbErr> {
        let models = entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Player::from_entity).collect())
    }

    /// Checks whether a phone is registered to a player other than `exclude_id`
    pub async fn phone_taken(&self, phone: &str, exclude_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Player::find().filter(entity::player::Column::Phone.eq(phone));
        if let Some(id) = exclude_id {
            query = query.filter(entity::player::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn update(&self, player: Player) -> Result<Player, DbErr> {
        let model = into_active_model(player).update(self.db).await?;

        Ok(Player::from_entity(model))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_active_model(player: Player) -> entity::player::ActiveModel {
    entity::player::ActiveModel {
        id: ActiveValue::Set(player.id),
        group_id: ActiveValue::Set(player.group_id),
        user_id: ActiveValue::Set(player.user_id),
        name: ActiveValue::Set(player.name),
        nickname: ActiveValue::Set(player.nickname),
        birth_date: ActiveValue::Set(player.birth_date),
        email: ActiveValue::Set(player.email),
        phone: ActiveValue::Set(player.phone),
        favorite_team: ActiveValue::Set(player.favorite_team),
        position: ActiveValue::Set(player.position),
        rating: ActiveValue::Set(player.rating),
        matches_played: ActiveValue::Set(player.matches_played),
        avatar: ActiveValue::Set(player.avatar),
        is_monthly_subscriber: ActiveValue::Set(player.is_monthly_subscriber),
        monthly_start_month: ActiveValue::Set(player.monthly_start_month),
        is_guest: ActiveValue::Set(player.is_guest),
    }
}
