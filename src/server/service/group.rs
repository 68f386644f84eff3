use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{
        CreateGroupParams, Group, MembershipAction, MembershipOutcome, UpdateGroupParams,
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets groups the user owns or belongs to; no user yields no groups
    pub async fn get_by_user(&self, user_id: Option<&str>) -> Result<Vec<Group>, AppError> {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return Ok(Vec::new());
        };

        let groups = GroupRepository::new(self.db).get_all().await?;

        Ok(groups
            .into_iter()
            .filter(|group| group.includes_user(user_id))
            .collect())
    }

    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .create(params.into_group())
            .await?;

        tracing::info!("Created group {} ({})", group.id, group.name);

        Ok(group)
    }

    /// Replaces the group stored under `id`, creating it when absent
    pub async fn upsert(
        &self,
        id: &str,
        params: CreateGroupParams,
    ) -> Result<(Group, bool), AppError> {
        let repo = GroupRepository::new(self.db);
        let exists = repo.get_by_id(id).await?.is_some();
        let group = params.with_id(id).into_group();

        let group = if exists {
            repo.update(group).await?
        } else {
            repo.create(group).await?
        };

        Ok((group, !exists))
    }

    pub async fn update(&self, id: &str, params: UpdateGroupParams) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        let mut group = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        params.apply_to(&mut group);

        Ok(repo.update(group).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Group {} not found", id)));
        }

        Ok(())
    }

    /// Applies a membership action and persists the group when it changed
    pub async fn apply_membership(
        &self,
        id: &str,
        action: MembershipAction,
        user_id: &str,
    ) -> Result<MembershipOutcome, AppError> {
        if user_id.is_empty() {
            return Err(AppError::BadRequest("userId is required".to_string()));
        }

        let repo = GroupRepository::new(self.db);

        let mut group = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        let before = group.clone();
        let outcome = group.apply_membership(action, user_id);

        if group != before {
            repo.update(group).await?;
            tracing::debug!("Applied {:?} for user {} in group {}", action, user_id, id);
        }

        Ok(outcome)
    }

    /// Rewrites every stored group whose rosters violate invariants.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of groups corrected
    pub async fn align_all(&self) -> Result<usize, AppError> {
        let repo = GroupRepository::new(self.db);
        let groups = repo.get_misaligned().await?;
        let count = groups.len();

        for group in groups {
            tracing::info!("Aligning rosters of group {}", group.id);
            repo.update(group).await?;
        }

        Ok(count)
    }
}
