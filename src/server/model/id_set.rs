//! Ordered id collection with set semantics.
//!
//! Group rosters and match rosters are persisted as JSON arrays. `IdSet` keeps the
//! insertion order of those arrays (the UI lists members in join order) while
//! guaranteeing that an id appears at most once.

use entity::id_list::IdList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<String>,
}

impl IdSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Appends `id` unless already present.
    ///
    /// # Returns
    /// - `true` - The id was added
    /// - `false` - The id was already in the set
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id` if present, keeping the order of the remaining ids.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn retain(&mut self, f: impl FnMut(&String) -> bool) {
        self.ids.retain(f);
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ids
    }
}

/// Collects ids keeping the first occurrence of each.
impl<S: Into<String>> FromIterator<S> for IdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<String>> for IdSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<IdList> for IdSet {
    fn from(list: IdList) -> Self {
        list.0.into_iter().collect()
    }
}

impl From<IdSet> for IdList {
    fn from(set: IdSet) -> Self {
        IdList(set.ids)
    }
}

impl From<IdSet> for Vec<String> {
    fn from(set: IdSet) -> Self {
        set.ids
    }
}
