use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams, UpdateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let model = entity::comment::ActiveModel {
            id: ActiveValue::Set(params.id),
            group_id: ActiveValue::Set(params.group_id),
            match_id: ActiveValue::Set(params.match_id),
            parent_id: ActiveValue::Set(params.parent_id),
            author_player_id: ActiveValue::Set(params.author_player_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(params.created_at),
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(model))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Comment>, DbErr> {
        let model = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(model.map(Comment::from_entity))
    }

    /// Gets comments in posting order, optionally filtered by group and match
    pub async fn get_all(
        &self,
        group_id: Option<&str>,
        match_id: Option<&str>,
    ) -> Result<Vec<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find();
        if let Some(group_id) = group_id {
            query = query.filter(entity::comment::Column::GroupId.eq(group_id));
        }
        if let Some(match_id) = match_id {
            query = query.filter(entity::comment::Column::MatchId.eq(match_id));
        }

        let models = query
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Comment::from_entity).collect())
    }

    /// Updates the editable fields of a comment
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Updated comment
    /// - `Ok(None)` - No comment with that id
    pub async fn update(
        &self,
        id: &str,
        params: UpdateCommentParams,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if params.content.is_none() && params.parent_id.is_none() {
            return Ok(Some(Comment::from_entity(comment)));
        }

        let mut active_model: entity::comment::ActiveModel = comment.into();
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(parent_id) = params.parent_id {
            active_model.parent_id = ActiveValue::Set(parent_id);
        }

        let model = active_model.update(self.db).await?;

        Ok(Some(Comment::from_entity(model)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
