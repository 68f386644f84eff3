//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories borrow the SeaORM connection, build active models
//! internally and hand domain models back to the service layer. Transactions are the exception:
//! their stored type string is validated by the service, so that repository returns entity
//! models.

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod player;
pub mod transaction;
