//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let field = factory::field::create_field(&db, "group_1").await?;
//!
//!     // Create with custom values
//!     let player = factory::player::PlayerFactory::new(&db, "group_1")
//!         .monthly_subscriber(true)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `group` - Create group entities
//! - `player` - Create player entities
//! - `field` - Create field entities
//! - `football_match` - Create match entities
//! - `transaction` - Create transaction entities
//! - `comment` - Create comment entities
//! - `helpers` - Id generation and convenience methods for creating entities with dependencies

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod helpers;
pub mod player;
pub mod transaction;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use field::create_field;
pub use football_match::create_match;
pub use group::create_group;
pub use player::create_player;
pub use transaction::create_transaction;
