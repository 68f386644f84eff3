use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub group_id: String,
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
    pub is_monthly_subscriber: bool,
    pub monthly_start_month: Option<String>,
    pub is_guest: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub id: Option<String>,
    pub group_id: String,
    pub name: String,
    pub nickname: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub favorite_team: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub matches_played: i32,
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_monthly_subscriber: bool,
    pub monthly_start_month: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerDto {
    pub group_id: Option<String>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub birth_date: Option<String>,
    pub email: Option<String>,
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

/// Profile fields copied onto every player linked to a user account.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfileDto {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub favorite_team: Option<String>,
    pub position: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateByUserDto {
    pub user_id: String,
    #[serde(default)]
    pub user_data: PlayerProfileDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatedCountDto {
    pub updated: u64,
}
