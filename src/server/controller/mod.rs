//! HTTP handlers for the REST API.
//!
//! Controllers convert request DTOs into domain parameters, call the matching service
//! and convert the result back into a response DTO. Business rules live in the services.

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod health;
pub mod player;
pub mod transaction;

use serde::Deserialize;

/// Optional `?groupId=` filter shared by the list endpoints.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupFilter {
    pub group_id: Option<String>,
}
