use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::football_match::Match;

pub struct MatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, game: Match) -> Result<Match, DbErr> {
        let model = into_active_model(game).insert(self.db).await?;

        Ok(Match::from_entity(model))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Match>, DbErr> {
        let model = entity::prelude::Match::find_by_id(id).one(self.db).await?;

        Ok(model.map(Match::from_entity))
    }

    /// Gets all matches, newest first, optionally restricted to one group
    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Match>, DbErr> {
        let mut query = entity::prelude::Match::find();
        if let Some(group_id) = group_id {
            query = query.filter(entity::football_match::Column::GroupId.eq(group_id));
        }

        let models = query
            .order_by_desc(entity::football_match::Column::Date)
            .order_by_desc(entity::football_match::Column::Time)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Match::from_entity).collect())
    }

    pub async fn update(&self, game: Match) -> Result<Match, DbErr> {
        let model = into_active_model(game).update(self.db).await?;

        Ok(Match::from_entity(model))
    }

    /// Deletes a match; its derived transactions are kept
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Match::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_active_model(game: Match) -> entity::football_match::ActiveModel {
    entity::football_match::ActiveModel {
        id: ActiveValue::Set(game.id),
        group_id: ActiveValue::Set(game.group_id),
        date: ActiveValue::Set(game.date),
        time: ActiveValue::Set(game.time),
        field_id: ActiveValue::Set(game.field_id),
        confirmed_player_ids: ActiveValue::Set(game.confirmed_player_ids.into()),
        paid_player_ids: ActiveValue::Set(game.paid_player_ids.into()),
        team_a: ActiveValue::Set(game.team_a),
        team_b: ActiveValue::Set(game.team_b),
        score_a: ActiveValue::Set(game.score_a),
        score_b: ActiveValue::Set(game.score_b),
        finished: ActiveValue::Set(game.finished),
        mvp_id: ActiveValue::Set(game.mvp_id),
    }
}
