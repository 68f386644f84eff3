//! Player domain model and parameters.
//!
//! Phone numbers reach this layer already normalised to digits by the player service;
//! the params here only carry them.

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, PlayerProfileDto, UpdatePlayerDto},
    server::util::id::id_or_generate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub group_id: String,
    /// Account link; set to the phone digits whenever the phone is written.
    pub user_id: Option<String>,
    pub name: String,
    pub nickname: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
    pub favorite_team: String,
    pub position: String,
    pub rating: f64,
    pub matches_played: i32,
    pub avatar: Option<String>,
    /// Drives the mensal/avulso split during match settlement.
    pub is_monthly_subscriber: bool,
    /// First billed month, `YYYY-MM`.
    pub monthly_start_month: Option<String>,
    pub is_guest: bool,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            user_id: entity.user_id,
            name: entity.name,
            nickname: entity.nickname,
            birth_date: entity.birth_date,
            email: entity.email,
            phone: entity.phone,
            favorite_team: entity.favorite_team,
            position: entity.position,
            rating: entity.rating,
            matches_played: entity.matches_played,
            avatar: entity.avatar,
            is_monthly_subscriber: entity.is_monthly_subscriber,
            monthly_start_month: entity.monthly_start_month,
            is_guest: entity.is_guest,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            group_id: self.group_id,
            user_id: self.user_id,
            name: self.name,
            nickname: self.nickname,
            birth_date: self.birth_date,
            email: self.email,
            phone: self.phone,
            favorite_team: self.favorite_team,
            position: self.position,
            rating: self.rating,
            matches_played: self.matches_played,
            avatar: self.avatar,
            is_monthly_subscriber: self.is_monthly_subscriber,
            monthly_start_month: self.monthly_start_month,
            is_guest: self.is_guest,
        }
    }

    /// Guests are never billed as subscribers.
    fn enforce_guest_rule(&mut self) {
        if self.is_guest {
            self.is_monthly_subscriber = false;
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub nickname: String,
    pub birth_date: String,
    pub email: String,
    /// Raw phone as sent by the client.
    pub phone: String,
    pub favorite_team: String,
    pub position: String,
    pub rating: f64,
    pub matches_played: i32,
    pub avatar: Option<String>,
    pub is_monthly_subscriber: bool,
    pub monthly_start_month: Option<String>,
    pub is_guest: bool,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: CreatePlayerDto) -> Self {
        Self {
            id: id_or_generate(dto.id),
            group_id: dto.group_id,
            name: dto.name,
            nickname: dto.nickname,
            birth_date: dto.birth_date,
            email: dto.email,
            phone: dto.phone,
            favorite_team: dto.favorite_team,
            position: dto.position,
            rating: dto.rating,
            matches_played: dto.matches_played,
            avatar: dto.avatar,
            is_monthly_subscriber: dto.is_monthly_subscriber,
            monthly_start_month: dto.monthly_start_month,
            is_guest: dto.is_guest,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builds the player to persist from already-normalised phone digits.
    pub fn into_player(self, phone_digits: String) -> Player {
        let mut player = Player {
            id: self.id,
            group_id: self.group_id,
            user_id: Some(phone_digits.clone()),
            name: self.name,
            nickname: self.nickname,
            birth_date: self.birth_date,
            email: self.email,
            phone: phone_digits,
            favorite_team: self.favorite_team,
            position: self.position,
            rating: self.rating,
            matches_played: self.matches_played,
            avatar: self.avatar,
            is_monthly_subscriber: self.is_monthly_subscriber,
            monthly_start_month: self.monthly_start_month,
            is_guest: self.is_guest,
        };
        player.enforce_guest_rule();
        player
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub group_id: Option<String>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub birth_date: Option<String>,
    pub email: Option<String>,
    /// Raw phone as sent by the client.
    pub phone: Option<String>,
    pub favorite_team: Option<String>,
    pub position: Option<String>,
    pub rating: Option<f64>,
    pub matches_played: Option<i32>,
    pub avatar: Option<Option<String>>,
    pub is_monthly_subscriber: Option<bool>,
    pub monthly_start_month: Option<Option<String>>,
    pub is_guest: Option<bool>,
}

impl UpdatePlayerParams {
    pub fn from_dto(dto: UpdatePlayerDto) -> Self {
        Self {
            group_id: dto.group_id,
            name: dto.name,
            nickname: dto.nickname,
            birth_date: dto.birth_date,
            email: dto.email,
            phone: dto.phone,
            favorite_team: dto.favorite_team,
            position: dto.position,
            rating: dto.rating,
            matches_played: dto.matches_played,
            avatar: dto.avatar,
            is_monthly_subscriber: dto.is_monthly_subscriber,
            monthly_start_month: dto.monthly_start_month,
            is_guest: dto.is_guest,
        }
    }

    /// Applies the provided fields to `player`.
    ///
    /// `phone_digits` is the normalised form of `self.phone`; when present it also
    /// becomes the player's `user_id`.
    pub fn apply_to(self, player: &mut Player, phone_digits: Option<String>) {
        if let Some(group_id) = self.group_id {
            player.group_id = group_id;
        }
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(nickname) = self.nickname {
            player.nickname = nickname;
        }
        if let Some(birth_date) = self.birth_date {
            player.birth_date = birth_date;
        }
        if let Some(email) = self.email {
            player.email = email;
        }
        if let Some(digits) = phone_digits {
            player.user_id = Some(digits.clone());
            player.phone = digits;
        }
        if let Some(favorite_team) = self.favorite_team {
            player.favorite_team = favorite_team;
        }
        if let Some(position) = self.position {
            player.position = position;
        }
        if let Some(rating) = self.rating {
            player.rating = rating;
        }
        if let Some(matches_played) = self.matches_played {
            player.matches_played = matches_played;
        }
        if let Some(avatar) = self.avatar {
            player.avatar = avatar;
        }
        if let Some(is_monthly_subscriber) = self.is_monthly_subscriber {
            player.is_monthly_subscriber = is_monthly_subscriber;
        }
        if let Some(monthly_start_month) = self.monthly_start_month {
            player.monthly_start_month = monthly_start_month;
        }
        if let Some(is_guest) = self.is_guest {
            player.is_guest = is_guest;
        }

        player.enforce_guest_rule();
    }
}

/// Account profile fields copied to every player linked to a user.
#[derive(Debug, Clone, Default)]
pub struct PlayerProfile {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    /// Raw phone as sent by the client.
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub favorite_team: Option<String>,
    pub position: Option<String>,
}

impl PlayerProfile {
    pub fn from_dto(dto: PlayerProfileDto) -> Self {
        Self {
            name: dto.name,
            nickname: dto.nickname,
            email: dto.email,
            avatar: dto.avatar,
            phone: dto.phone,
            birth_date: dto.birth_date,
            favorite_team: dto.favorite_team,
            position: dto.position,
        }
    }

    /// Copies the profile onto `player`; the account link (`user_id`) is kept.
    pub fn apply_to(&self, player: &mut Player, phone_digits: Option<&str>) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(nickname) = &self.nickname {
            player.nickname = nickname.clone();
        }
        if let Some(email) = &self.email {
            player.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            player.avatar = Some(avatar.clone());
        }
        if let Some(digits) = phone_digits {
            player.phone = digits.to_string();
        }
        if let Some(birth_date) = &self.birth_date {
            player.birth_date = birth_date.clone();
        }
        if let Some(favorite_team) = &self.favorite_team {
            player.favorite_team = favorite_team.clone();
        }
        if let Some(position) = &self.position {
            player.position = position.clone();
        }
    }
}
