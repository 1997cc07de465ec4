//! Search, filter and sort options for catalog views

// internal modules
use crate::entry::CatalogEntry;
use crate::error::{Error, Result};

/// Order of the entries in a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    /// A-Z by preparation name
    #[default]
    Alphabetical,
    /// Shortest half-life first, entries without one last
    HalfLife,
}

impl std::str::FromStr for Sort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "alpha" | "alphabetical" | "a-z" => Ok(Sort::Alphabetical),
            "half-life" | "halflife" | "half_life" => Ok(Sort::HalfLife),
            _ => Err(Error::UnknownSort(s.to_string())),
        }
    }
}

/// Criteria for a view of the catalog
///
/// A `None` modality or organ means all of them. An empty or blank query
/// matches everything.
///
/// ```rust
/// # use nukmed_catalog::{Filter, Sort};
/// let filter = Filter::default()
///     .query("psma")
///     .modality("PET")
///     .sort(Sort::HalfLife);
/// assert_eq!(filter.organ, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// Free text, case-insensitive
    pub query: String,
    /// Exact modality
    pub modality: Option<String>,
    /// Exact organ system
    pub organ: Option<String>,
    /// Order of the results
    pub sort: Sort,
}

impl Filter {
    /// Set the free text query
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Only keep a single modality
    pub fn modality(mut self, modality: &str) -> Self {
        self.modality = Some(modality.to_string());
        self
    }

    /// Only keep a single organ system
    pub fn organ(mut self, organ: &str) -> Self {
        self.organ = Some(organ.to_string());
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Check an entry against the query, modality and organ
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let query = self.query.trim().to_lowercase();
        let hit_query = query.is_empty() || entry.haystack().contains(&query);
        let hit_modality = self.modality.as_ref().map_or(true, |m| &entry.modality == m);
        let hit_organ = self.organ.as_ref().map_or(true, |o| &entry.organ == o);
        hit_query && hit_modality && hit_organ
    }

    /// Sort a view in place
    ///
    /// Both orders are stable, so equal entries keep their catalog order.
    pub fn sort_entries(&self, entries: &mut [&CatalogEntry]) {
        match self.sort {
            Sort::Alphabetical => {
                entries.sort_by_cached_key(|e| e.prep.to_lowercase());
            }
            Sort::HalfLife => {
                entries.sort_by(|a, b| {
                    let a = a.half_life_hours().unwrap_or(f64::INFINITY);
                    let b = b.half_life_hours().unwrap_or(f64::INFINITY);
                    a.total_cmp(&b)
                });
            }
        }
    }
}
