//! The catalog of radiopharmaceuticals and its loaders

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use itertools::Itertools;
use log::{info, warn};
use serde_json::Value;

// internal modules
use crate::entry::CatalogEntry;
use crate::error::{Error, Result};
use crate::filter::Filter;

/// A read-only collection of [CatalogEntry]s
///
/// The catalog is a plain JSON array of entries, see [CatalogEntry] for the
/// fields. It can be read from a file, a string, or fetched over HTTP.
///
/// ```rust
/// # use nukmed_catalog::{Catalog, Filter, Sort};
/// let catalog = Catalog::from_json_str(r#"[
///     {"prep": "Ga-68 PSMA-11", "radionuclide": "Ga-68", "modality": "PET", "organ": "Prostata"},
///     {"prep": "F-18 FDG", "radionuclide": "F-18", "modality": "PET", "organ": "Onkologie"},
///     {"prep": "Tc-99m MDP", "radionuclide": "Tc-99m", "modality": "SPECT", "organ": "Skelett"}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.modalities(), ["PET", "SPECT"]);
///
/// let pet = catalog.filter(&Filter::default().modality("PET"));
/// assert_eq!(pet[0].prep, "F-18 FDG");
/// assert_eq!(pet[1].prep, "Ga-68 PSMA-11");
/// ```
///
/// The entries can be passed straight to the decay calculator to supply
/// half-lives for anything outside the reference table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Catalog from a list of entries
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Read the catalog from a JSON document
    ///
    /// Valid JSON that is not an array is treated as an empty catalog.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Read the catalog from a JSON file
    ///
    /// ```rust, no_run
    /// # use nukmed_catalog::Catalog;
    /// let catalog = Catalog::read_json("path/to/radiopharmaka.json").unwrap();
    /// ```
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading catalog {:?}", path.as_ref());
        let reader = BufReader::new(File::open(path)?);
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Fetch the catalog JSON from a URL
    ///
    /// ```rust, no_run
    /// # use nukmed_catalog::Catalog;
    /// let catalog = Catalog::fetch_json("https://example.org/radiopharmaka.json").unwrap();
    /// ```
    pub fn fetch_json(url: &str) -> Result<Self> {
        info!("Fetching catalog from {url}");
        let response = minreq::get(url)
            .with_header("Cache-Control", "no-store")
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(Error::HttpStatus {
                status: response.status_code,
                reason: response.reason_phrase,
            });
        }

        Self::from_json_str(response.as_str()?)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => Ok(Self {
                entries: serde_json::from_value(value)?,
            }),
            _ => {
                warn!("Catalog document is not a list of entries, treated as empty");
                Ok(Self::default())
            }
        }
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by its [CatalogEntry::key()]
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Every radionuclide, in order of first appearance
    pub fn radionuclides(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.radionuclide.as_str())
            .unique()
            .collect()
    }

    /// Every modality, sorted
    pub fn modalities(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.modality.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Every organ system, sorted
    pub fn organs(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.organ.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Entries matching a [Filter], in the order it asks for
    pub fn filter(&self, filter: &Filter) -> Vec<&CatalogEntry> {
        let mut view = self.entries.iter().filter(|e| filter.matches(e)).collect_vec();
        filter.sort_entries(&mut view);
        view
    }
}
