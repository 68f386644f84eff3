//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Group roster invariants, phone normalisation, rate validation
//! - **Orchestration**: Settling a match right after it is persisted as finished
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Serializing writes to the same match through `MatchLockService`

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod match_lock;
pub mod player;
pub mod settlement;
pub mod transaction;
