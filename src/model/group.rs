use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: String,
    pub admin_id: String,
    pub admins: Vec<String>,
    pub name: String,
    pub sport: String,
    pub invite_code: String,
    pub created_at: String,
    pub members: Vec<String>,
    pub pending_requests: Vec<String>,
    pub logo: Option<String>,
    pub payment_mode: String,
    pub fixed_amount: f64,
    pub monthly_fee: f64,
    pub city: String,
}

/// Full group body used by POST and PUT.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    pub id: Option<String>,
    pub admin_id: String,
    #[serde(default)]
    pub admins: Vec<String>,
    pub name: String,
    pub sport: String,
    #[serde(default)]
    pub invite_code: String,
    pub created_at: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub pending_requests: Vec<String>,
    pub logo: Option<String>,
    #[serde(default = "default_payment_mode")]
    pub payment_mode: String,
    #[serde(default)]
    pub fixed_amount: f64,
    #[serde(default)]
    pub monthly_fee: f64,
    #[serde(default)]
    pub city: String,
}

fn default_payment_mode() -> String {
    "fixed".to_string()
}

/// Partial group body used by PATCH; absent keys are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupDto {
    pub admin_id: Option<String>,
    pub admins: Option<Vec<String>>,
    pub name: Option<String>,
    pub sport: Option<String>,
    pub invite_code: Option<String>,
    pub members: Option<Vec<String>>,
    pub pending_requests: Option<Vec<String>>,
    pub logo: Option<Option<String>>,
    pub payment_mode: Option<String>,
    pub fixed_amount: Option<f64>,
    pub monthly_fee: Option<f64>,
    pub city: Option<String>,
}

/// Body of every membership action: the user being acted upon.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    #[serde(default)]
    pub user_id: String,
}
