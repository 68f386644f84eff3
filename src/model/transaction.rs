use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionTypeDto {
    Income,
    Expense,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub r#type: TransactionTypeDto,
    pub date: String,
    pub category: String,
    pub related_player_id: Option<String>,
    pub related_match_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionDto {
    pub id: Option<String>,
    pub group_id: String,
    pub description: String,
    pub amount: f64,
    pub r#type: TransactionTypeDto,
    pub date: String,
    pub category: String,
    pub related_player_id: Option<String>,
    pub related_match_id: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionDto {
    pub group_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub r#type: Option<TransactionTypeDto>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub related_player_id: Option<Option<String>>,
    pub related_match_id: Option<Option<String>>,
}

/// Manual, single-row revenue entry for a match.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertMatchRevenueDto {
    pub group_id: String,
    pub match_id: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}
