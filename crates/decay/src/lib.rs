//! Half-life resolution, activity units, and radioactive decay arithmetic
//!
//! This crate is the computational core of `nukmed`. Everything here is a
//! pure function of its inputs with no shared mutable state.
//!
//! The usual flow for a calculation is:
//!
//! 1. Resolve the half-life of a radionuclide with a [HalfLifeResolver]
//! 2. Convert the entered activity to MBq with [to_canonical()]
//! 3. Compute with [activity_at_time()] or [time_to_target()]
//! 4. Convert results back for display with [from_canonical()]
//!
//! The [Calculator] wraps these steps up for a [DecayQuery].
//!
//! ## Quickstart example
//!
//! ```rust
//! # use nukmed_decay::{ActivityUnit, Calculator, CatalogRecord, DecayQuery, HalfLifeResolver};
//! # struct Entry;
//! # impl CatalogRecord for Entry {
//! #     fn radionuclide(&self) -> &str { "" }
//! #     fn half_life_h(&self) -> Option<f64> { None }
//! # }
//! # let catalog: Vec<Entry> = vec![];
//! let calculator = Calculator::new(HalfLifeResolver::default(), &catalog);
//!
//! // 20 mCi of Tc-99m calibrated 1 h 30 min ago
//! let query = DecayQuery::from_display("Tc-99m", 20.0, ActivityUnit::MCi, 1.0, 30.0);
//! let result = calculator.decay(&query);
//!
//! // Activity now, in the unit it was entered in
//! let now = result.display_activity().unwrap();
//! assert!((now - 16.83).abs() < 0.01);
//!
//! // How long until only 370 MBq are left
//! let hours = calculator.time_to_target("Tc-99m", 740.0, 370.0).hours();
//! assert_eq!(hours, Some(6.02));
//! ```
//!
//! ## Half-lives
//!
//! Half-lives are always in hours. The built-in [HalfLifeTable::reference()]
//! is authoritative for every radionuclide it contains. A catalog can supply
//! the half-life of anything else through the [CatalogRecord] trait.
//!
//! An unknown half-life is never replaced by a default. Anything derived from
//! it comes back as `None` (or [TargetResult::NotComputable]) so that it can be
//! shown as a placeholder rather than a plausible looking number.

// Modules
mod calculator;
mod engine;
mod error;
mod half_life;
mod nuclide;
mod parsers;
mod resolver;
mod table;
mod units;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use calculator::{Calculator, DecayQuery, DecayResult, TargetQuery, TargetResult};

#[doc(inline)]
pub use engine::{activity_at_time, decay_constant, elapsed_hours, half_lives_elapsed, time_to_target};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use half_life::HalfLife;

#[doc(inline)]
pub use nuclide::{same_nuclide, IsomerState, Nuclide};

#[doc(inline)]
pub use resolver::{CatalogRecord, HalfLifeResolver, Resolved, Source};

#[doc(inline)]
pub use table::HalfLifeTable;

#[doc(inline)]
pub use units::{from_canonical, to_canonical, ActivityUnit, MBQ_PER_MCI};
