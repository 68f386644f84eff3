pub use super::comment::Entity as Comment;
pub use super::field::Entity as Field;
pub use super::football_match::Entity as Match;
pub use super::group::Entity as Group;
pub use super::player::Entity as Player;
pub use super::transaction::Entity as Transaction;
