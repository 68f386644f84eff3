use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: String,
    pub group_id: String,
    pub date: String,
    pub time: String,
    pub field_id: String,
    pub confirmed_player_ids: Vec<String>,
    pub paid_player_ids: Vec<String>,
    #[schema(value_type = Object)]
    pub team_a: serde_json::Value,
    #[schema(value_type = Object)]
    pub team_b: serde_json::Value,
    pub score_a: i32,
    pub score_b: i32,
    pub finished: bool,
    pub mvp_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    pub id: Option<String>,
    pub group_id: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub field_id: String,
    #[serde(default)]
    pub confirmed_player_ids: Vec<String>,
    #[serde(default)]
    pub paid_player_ids: Vec<String>,
    #[serde(default = "empty_roster")]
    #[schema(value_type = Object)]
    pub team_a: serde_json::Value,
    #[serde(default = "empty_roster")]
    #[schema(value_type = Object)]
    pub team_b: serde_json::Value,
    #[serde(default)]
    pub score_a: i32,
    #[serde(default)]
    pub score_b: i32,
    #[serde(default)]
    pub finished: bool,
    pub mvp_id: Option<String>,
}

fn empty_roster() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Partial match body used by PATCH and `finalize`; absent keys are left unchanged.
///
/// `finalize` ignores `finished` and always sets it to true.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchDto {
    pub group_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub field_id: Option<String>,
    pub confirmed_player_ids: Option<Vec<String>>,
    pub paid_player_ids: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub team_a: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub team_b: Option<serde_json::Value>,
    pub score_a: Option<i32>,
    pub score_b: Option<i32>,
    pub finished: Option<bool>,
    pub mvp_id: Option<Option<String>>,
}
