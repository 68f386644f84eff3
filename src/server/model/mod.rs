//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! The settlement calculation lives here as well since it operates purely on domain
//! models.

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod id_set;
pub mod player;
pub mod settlement;
pub mod transaction;
