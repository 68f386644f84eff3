//! SeaORM entity definitions for the futgol database.
//!
//! One module per table. Primary keys are client-visible string ids. Lists of
//! ids (group admins/members, match rosters) are stored as JSON arrays through
//! [`id_list::IdList`].

pub mod comment;
pub mod field;
pub mod football_match;
pub mod group;
pub mod id_list;
pub mod player;
pub mod prelude;
pub mod transaction;
