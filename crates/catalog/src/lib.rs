//! Radiopharmaceutical catalog loading, search, filtering and favourites
//!
//! The catalog is a list of radiopharmaceuticals, each a [CatalogEntry] with
//! the preparation, radionuclide, modality, organ system, half-life, typical
//! adult dose, and indications.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use nukmed_catalog::{Catalog, Filter, Sort};
//! let catalog = Catalog::read_json("path/to/radiopharmaka.json").unwrap();
//!
//! // Every PET tracer mentioning PSMA, shortest half-life first
//! let filter = Filter::default()
//!     .query("psma")
//!     .modality("PET")
//!     .sort(Sort::HalfLife);
//!
//! for entry in catalog.filter(&filter) {
//!     println!("{} ({})", entry.prep, entry.radionuclide);
//! }
//! ```
//!
//! ## Decay calculations
//!
//! [CatalogEntry] implements
//! [CatalogRecord](nukmed_decay::CatalogRecord), so the entries can be used
//! directly as the fallback for half-lives missing from the reference table.
//!
//! ```rust
//! # use nukmed_catalog::Catalog;
//! # use nukmed_decay::{Calculator, DecayQuery, HalfLifeResolver};
//! let catalog = Catalog::from_json_str(
//!     r#"[{"prep": "Ac-225 PSMA-617", "radionuclide": "Ac-225", "halfLife_h": 238.1}]"#,
//! ).unwrap();
//!
//! let calculator = Calculator::new(HalfLifeResolver::default(), catalog.entries());
//! let result = calculator.decay(&DecayQuery::new("Ac-225", 8.0, 238.1));
//! assert!((result.activity.unwrap() - 4.0).abs() < 1e-9);
//! ```

// Split into subfiles for development, but anything important is re-exported
mod catalog;
mod entry;
mod error;
mod favourites;
mod filter;
mod parsers;

// Inline anything important for a nice public API
#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use entry::{CatalogEntry, Dose};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use favourites::Favourites;

#[doc(inline)]
pub use filter::{Filter, Sort};
