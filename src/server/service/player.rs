//! Player service.
//!
//! Phone numbers are normalised to digits and checked for uniqueness here, since the
//! stored phone doubles as the player's account link (`userId`).

use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::{validation::ValidationError, AppError},
    model::player::{CreatePlayerParams, Player, PlayerProfile, UpdatePlayerParams},
    util::parse::parse_phone_digits,
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, group_id: Option<&str>) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_all(group_id).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let phone = self.validate_phone(&params.phone, None).await?;

        let player = PlayerRepository::new(self.db)
            .create(params.into_player(phone))
            .await?;

        tracing::info!("Created player {} in group {}", player.id, player.group_id);

        Ok(player)
    }

    /// Replaces the player stored under `id`, creating it when absent
    pub async fn upsert(
        &self,
        id: &str,
        params: CreatePlayerParams,
    ) -> Result<(Player, bool), AppError> {
        let repo = PlayerRepository::new(self.db);
        let exists = repo.get_by_id(id).await?.is_some();

        let phone = self
            .validate_phone(&params.phone, exists.then_some(id))
            .await?;
        let player = params.with_id(id).into_player(phone);

        let player = if exists {
            repo.update(player).await?
        } else {
            repo.create(player).await?
        };

        Ok((player, !exists))
    }

    pub async fn update(&self, id: &str, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        let mut player = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", id)))?;

        let phone = match params.phone.as_deref() {
            Some(raw) => Some(self.validate_phone(raw, Some(id)).await?),
            None => None,
        };

        params.apply_to(&mut player, phone);

        Ok(repo.update(player).await?)
    }

    /// Copies account profile fields to every player linked to `user_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of players updated
    pub async fn update_by_user(
        &self,
        user_id: &str,
        profile: PlayerProfile,
    ) -> Result<u64, AppError> {
        let repo = PlayerRepository::new(self.db);
        let players = repo.get_by_user_id(user_id).await?;

        let mut updated = 0;
        for mut player in players {
            let phone = match profile.phone.as_deref() {
                Some(raw) => Some(self.validate_phone(raw, Some(&player.id)).await?),
                None => None,
            };

            profile.apply_to(&mut player, phone.as_deref());
            repo.update(player).await?;
            updated += 1;
        }

        tracing::debug!("Propagated profile of user {} to {} players", user_id, updated);

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !PlayerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Player {} not found", id)));
        }

        Ok(())
    }

    /// Normalises `raw` to digits and checks no other player uses it.
    ///
    /// # Arguments
    /// - `raw` - Phone as typed by the user
    /// - `owner_id` - Player allowed to already hold the phone
    async fn validate_phone(&self, raw: &str, owner_id: Option<&str>) -> Result<String, AppError> {
        let digits = parse_phone_digits(raw)?;

        if PlayerRepository::new(self.db)
            .phone_taken(&digits, owner_id)
            .await?
        {
            return Err(ValidationError::PhoneTaken.into());
        }

        Ok(digits)
    }
}
