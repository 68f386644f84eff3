use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, football_match::MatchRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        group_id: Option<&str>,
        match_id: Option<&str>,
    ) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_all(group_id, match_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_by_id(id).await?)
    }

    /// Posts a comment on an existing match
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        if MatchRepository::new(self.db)
            .get_by_id(&params.match_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Match {} not found",
                params.match_id
            )));
        }

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    /// Edits the comment stored under `id`, creating it when absent
    pub async fn upsert(
        &self,
        id: &str,
        params: CreateCommentParams,
    ) -> Result<(Comment, bool), AppError> {
        let repo = CommentRepository::new(self.db);

        if repo.get_by_id(id).await?.is_some() {
            let comment = self
                .update(
                    id,
                    UpdateCommentParams {
                        content: Some(params.content),
                        parent_id: Some(params.parent_id),
                    },
                )
                .await?;
            return Ok((comment, false));
        }

        let comment = self.create(params.with_id(id)).await?;

        Ok((comment, true))
    }

    pub async fn update(&self, id: &str, params: UpdateCommentParams) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }

        Ok(())
    }
}
