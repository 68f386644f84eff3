//! JSON request and response bodies for the REST API.
//!
//! All DTOs serialize with camelCase keys to match the mobile/web clients.

pub mod api;
pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod player;
pub mod transaction;
