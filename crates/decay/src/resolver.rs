//! Half-life resolution from the reference table and catalog data

// external crates
use log::{debug, trace, warn};

// internal modules
use crate::half_life::HalfLife;
use crate::nuclide::same_nuclide;
use crate::table::HalfLifeTable;

/// Read-only view of a catalog entry
///
/// The resolver only needs to know which radionuclide an entry describes and
/// whatever half-life (h) it carries. Anything providing these can act as a
/// catalog.
///
/// ```rust
/// # use nukmed_decay::CatalogRecord;
/// struct Tracer {
///     nuclide: String,
///     half_life: Option<f64>,
/// }
///
/// impl CatalogRecord for Tracer {
///     fn radionuclide(&self) -> &str {
///         &self.nuclide
///     }
///
///     fn half_life_h(&self) -> Option<f64> {
///         self.half_life
///     }
/// }
/// ```
pub trait CatalogRecord {
    /// Radionuclide identifier, e.g. "Tc-99m"
    fn radionuclide(&self) -> &str;

    /// Half-life in hours, if the entry has one
    fn half_life_h(&self) -> Option<f64>;
}

impl<T: CatalogRecord + ?Sized> CatalogRecord for &T {
    fn radionuclide(&self) -> &str {
        (**self).radionuclide()
    }

    fn half_life_h(&self) -> Option<f64> {
        (**self).half_life_h()
    }
}

/// Where a resolved half-life came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The reference half-life table
    Reference,
    /// Fallback to the value carried by a catalog entry
    Catalog,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Source::Reference => write!(f, "reference"),
            Source::Catalog => write!(f, "catalog"),
        }
    }
}

/// A successfully resolved half-life and its origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Half-life to use in any computation
    pub half_life: HalfLife,
    /// Where the value was found
    pub source: Source,
}

/// Finds the half-life to use for a radionuclide
///
/// Resolution order:
///
/// 1. The half-life table, which is authoritative when present
/// 2. The first catalog entry for the radionuclide, if it has a valid value
/// 3. Unknown (`None`)
///
/// There is no default. An unknown radionuclide has no half-life and nothing
/// derived from it can be computed.
///
/// ```rust
/// # use nukmed_decay::{CatalogRecord, HalfLifeResolver, Source};
/// # struct Entry(&'static str, Option<f64>);
/// # impl CatalogRecord for Entry {
/// #     fn radionuclide(&self) -> &str { self.0 }
/// #     fn half_life_h(&self) -> Option<f64> { self.1 }
/// # }
/// let catalog = [Entry("Tc-99m", Some(6.0)), Entry("P-32", Some(342.6))];
/// let resolver = HalfLifeResolver::default();
///
/// // The reference table wins over the catalog
/// let resolved = resolver.resolve("Tc-99m", &catalog).unwrap();
/// assert_eq!(resolved.half_life.hours(), 6.02);
/// assert_eq!(resolved.source, Source::Reference);
///
/// // Catalog values fill the gaps
/// let resolved = resolver.resolve("P-32", &catalog).unwrap();
/// assert_eq!(resolved.source, Source::Catalog);
///
/// // Anything else is unknown
/// assert!(resolver.resolve("Co-60", &catalog).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HalfLifeResolver<'a> {
    table: &'a HalfLifeTable,
}

impl Default for HalfLifeResolver<'static> {
    fn default() -> Self {
        Self::new(HalfLifeTable::reference())
    }
}

impl<'a> HalfLifeResolver<'a> {
    /// Resolve against a specific half-life table
    pub fn new(table: &'a HalfLifeTable) -> Self {
        Self { table }
    }

    /// The table used for lookups
    pub fn table(&self) -> &'a HalfLifeTable {
        self.table
    }

    /// Resolve a half-life from the table, falling back to the catalog
    pub fn resolve<R: CatalogRecord>(&self, radionuclide: &str, catalog: &[R]) -> Option<Resolved> {
        if let Some(resolved) = self.resolve_reference(radionuclide) {
            return Some(resolved);
        }

        let Some(entry) = catalog
            .iter()
            .find(|entry| same_nuclide(entry.radionuclide(), radionuclide))
        else {
            warn!("No half-life known for {radionuclide:?}");
            return None;
        };

        match entry.half_life_h().and_then(HalfLife::from_hours) {
            Some(half_life) => {
                debug!("{radionuclide}: T½ = {half_life} from catalog");
                Some(Resolved {
                    half_life,
                    source: Source::Catalog,
                })
            }
            None => {
                warn!(
                    "Catalog entry for {radionuclide:?} has no usable half-life ({:?})",
                    entry.half_life_h()
                );
                None
            }
        }
    }

    /// Resolve a half-life from the table alone
    pub fn resolve_reference(&self, radionuclide: &str) -> Option<Resolved> {
        let half_life = self.table.get(radionuclide)?;
        trace!("{radionuclide}: T½ = {half_life} from table");
        Some(Resolved {
            half_life,
            source: Source::Reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, Option<f64>);

    impl CatalogRecord for Entry {
        fn radionuclide(&self) -> &str {
            self.0
        }

        fn half_life_h(&self) -> Option<f64> {
            self.1
        }
    }

    #[test]
    fn first_catalog_match_wins() {
        let catalog = [
            Entry("P-32", None),
            Entry("P-32", Some(342.6)),
        ];
        let resolver = HalfLifeResolver::default();
        assert!(resolver.resolve("P-32", &catalog).is_none());
    }

    #[test]
    fn invalid_catalog_values_are_unknown() {
        let resolver = HalfLifeResolver::default();
        for value in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let catalog = [Entry("P-32", Some(value))];
            assert!(resolver.resolve("P-32", &catalog).is_none(), "{value}");
        }
    }

    #[test]
    fn catalog_spelling_variants() {
        let catalog = [Entry("32P", Some(342.6))];
        let resolved = HalfLifeResolver::default()
            .resolve("P-32", &catalog)
            .unwrap();
        assert_eq!(resolved.half_life.hours(), 342.6);
    }

    #[test]
    fn custom_table() {
        let mut table = HalfLifeTable::new();
        table.insert("Tc-99m", 6.0067).unwrap();
        let resolver = HalfLifeResolver::new(&table);

        let catalog: [Entry; 0] = [];
        assert_eq!(
            resolver.resolve("Tc-99m", &catalog).unwrap().half_life.hours(),
            6.0067
        );
        assert!(resolver.resolve("F-18", &catalog).is_none());
    }

    #[test]
    fn references_work_as_records() {
        let entries = [Entry("P-32", Some(342.6))];
        let refs: Vec<&Entry> = entries.iter().collect();
        let resolved = HalfLifeResolver::default().resolve("P-32", &refs);
        assert_eq!(resolved.unwrap().source, Source::Catalog);
    }
}
