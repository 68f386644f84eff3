use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// JSON array of string ids as persisted in list columns.
///
/// Ordering and uniqueness are enforced by the application layer; the column
/// itself stores whatever sequence it is given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct IdList(pub Vec<String>);

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<IdList> for Vec<String> {
    fn from(list: IdList) -> Self {
        list.0
    }
}
