use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub location: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub hourly_rate: f64,
    #[schema(value_type = Option<Object>)]
    pub coordinates: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldDto {
    pub id: Option<String>,
    pub group_id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub hourly_rate: f64,
    #[schema(value_type = Option<Object>)]
    pub coordinates: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldDto {
    pub group_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub contact_name: Option<Option<String>>,
    pub contact_phone: Option<Option<String>>,
    pub hourly_rate: Option<f64>,
    #[schema(value_type = Option<Object>)]
    pub coordinates: Option<Option<serde_json::Value>>,
}
