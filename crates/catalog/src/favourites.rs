//! In-memory favourites

use std::collections::BTreeSet;

use crate::entry::CatalogEntry;

/// Set of favourite catalog entries, tracked by [CatalogEntry::key()]
///
/// Favourites only live as long as the value itself, nothing is persisted.
///
/// ```rust
/// # use nukmed_catalog::{CatalogEntry, Favourites};
/// let fdg = CatalogEntry { id: Some("fdg".to_string()), ..Default::default() };
/// let mut favourites = Favourites::default();
///
/// assert!(favourites.toggle(&fdg));
/// assert!(favourites.contains(&fdg));
/// assert!(!favourites.toggle(&fdg));
/// assert!(favourites.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favourites {
    keys: BTreeSet<String>,
}

impl Favourites {
    /// Favourites from a list of entry keys
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Add or remove an entry, returns true if it is now a favourite
    pub fn toggle(&mut self, entry: &CatalogEntry) -> bool {
        self.toggle_key(entry.key())
    }

    /// Add or remove a key, returns true if it is now a favourite
    pub fn toggle_key(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string())
        }
    }

    /// Check if an entry is a favourite
    pub fn contains(&self, entry: &CatalogEntry) -> bool {
        self.keys.contains(entry.key())
    }

    /// Number of favourites
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if there are no favourites
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the favourite keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
