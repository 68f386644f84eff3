//! Match domain model and parameters.
//!
//! `finished` is the flag the match service watches: every persist that leaves a match
//! finished is followed by settlement of its derived transactions.

use crate::{
    model::football_match::{CreateMatchDto, MatchDto, UpdateMatchDto},
    server::{model::id_set::IdSet, util::id::id_or_generate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub group_id: String,
    pub date: String,
    pub time: String,
    pub field_id: String,
    pub confirmed_player_ids: IdSet,
    /// Expected to be a subset of the confirmed roster; not enforced.
    pub paid_player_ids: IdSet,
    /// Roster snapshot as sent by the client.
    pub team_a: serde_json::Value,
    pub team_b: serde_json::Value,
    pub score_a: i32,
    pub score_b: i32,
    pub finished: bool,
    pub mvp_id: Option<String>,
}

impl Match {
    pub fn from_entity(entity: entity::football_match::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            date: entity.date,
            time: entity.time,
            field_id: entity.field_id,
            confirmed_player_ids: entity.confirmed_player_ids.into(),
            paid_player_ids: entity.paid_player_ids.into(),
            team_a: entity.team_a,
            team_b: entity.team_b,
            score_a: entity.score_a,
            score_b: entity.score_b,
            finished: entity.finished,
            mvp_id: entity.mvp_id,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            group_id: self.group_id,
            date: self.date,
            time: self.time,
            field_id: self.field_id,
            confirmed_player_ids: self.confirmed_player_ids.into_vec(),
            paid_player_ids: self.paid_player_ids.into_vec(),
            team_a: self.team_a,
            team_b: self.team_b,
            score_a: self.score_a,
            score_b: self.score_b,
            finished: self.finished,
            mvp_id: self.mvp_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub id: String,
    pub group_id: String,
    pub date: String,
    pub time: String,
    pub field_id: String,
    pub confirmed_player_ids: IdSet,
    pub paid_player_ids: IdSet,
    pub team_a: serde_json::Value,
    pub team_b: serde_json::Value,
    pub score_a: i32,
    pub score_b: i32,
    pub finished: bool,
    pub mvp_id: Option<String>,
}

impl CreateMatchParams {
    pub fn from_dto(dto: CreateMatchDto) -> Self {
        Self {
            id: id_or_generate(dto.id),
            group_id: dto.group_id,
            date: dto.date,
            time: dto.time,
            field_id: dto.field_id,
            confirmed_player_ids: dto.confirmed_player_ids.into(),
            paid_player_ids: dto.paid_player_ids.into(),
            team_a: dto.team_a,
            team_b: dto.team_b,
            score_a: dto.score_a,
            score_b: dto.score_b,
            finished: dto.finished,
            mvp_id: dto.mvp_id,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn into_match(self) -> Match {
        Match {
            id: self.id,
            group_id: self.group_id,
            date: self.date,
            time: self.time,
            field_id: self.field_id,
            confirmed_player_ids: self.confirmed_player_ids,
            paid_player_ids: self.paid_player_ids,
            team_a: self.team_a,
            team_b: self.team_b,
            score_a: self.score_a,
            score_b: self.score_b,
            finished: self.finished,
            mvp_id: self.mvp_id,
        }
    }
}

/// Partial match update used by PATCH and finalize.
#[derive(Debug, Clone, Default)]
pub struct UpdateMatchParams {
    pub group_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub field_id: Option<String>,
    pub confirmed_player_ids: Option<IdSet>,
    pub paid_player_ids: Option<IdSet>,
    pub team_a: Option<serde_json::Value>,
    pub team_b: Option<serde_json::Value>,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    pub finished: Option<bool>,
    pub mvp_id: Option<Option<String>>,
}

impl UpdateMatchParams {
    pub fn from_dto(dto: UpdateMatchDto) -> Self {
        Self {
            group_id: dto.group_id,
            date: dto.date,
            time: dto.time,
            field_id: dto.field_id,
            confirmed_player_ids: dto.confirmed_player_ids.map(IdSet::from),
            paid_player_ids: dto.paid_player_ids.map(IdSet::from),
            team_a: dto.team_a,
            team_b: dto.team_b,
            score_a: dto.score_a,
            score_b: dto.score_b,
            finished: dto.finished,
            mvp_id: dto.mvp_id,
        }
    }

    /// Restricts the update to the fields finalize accepts and marks the match finished.
    pub fn into_finalize(self) -> Self {
        Self {
            group_id: None,
            finished: Some(true),
            ..self
        }
    }

    pub fn apply_to(self, game: &mut Match) {
        if let Some(group_id) = self.group_id {
            game.group_id = group_id;
        }
        if let Some(date) = self.date {
            game.date = date;
        }
        if let Some(time) = self.time {
            game.time = time;
        }
        if let Some(field_id) = self.field_id {
            game.field_id = field_id;
        }
        if let Some(confirmed) = self.confirmed_player_ids {
            game.confirmed_player_ids = confirmed;
        }
        if let Some(paid) = self.paid_player_ids {
            game.paid_player_ids = paid;
        }
        if let Some(team_a) = self.team_a {
            game.team_a = team_a;
        }
        if let Some(team_b) = self.team_b {
            game.team_b = team_b;
        }
        if let Some(score_a) = self.score_a {
            game.score_a = score_a;
        }
        if let Some(score_b) = self.score_b {
            game.score_b = score_b;
        }
        if let Some(finished) = self.finished {
            game.finished = finished;
        }
        if let Some(mvp_id) = self.mvp_id {
            game.mvp_id = mvp_id;
        }
    }
}
