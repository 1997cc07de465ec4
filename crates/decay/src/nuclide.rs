//! Radionuclide identifiers

// nukmed modules
use nukmed_format::f;

// internal modules
use crate::error::{Error, Result};
use crate::parsers::nuclide_from_str;

/// Definition for a particular radionuclide
///
/// The `FromStr` trait is implemented and will try to parse the common ways
/// of writing a radionuclide in nuclear medicine. All of these describe
/// technetium-99m:
///
/// - Symbol first `Tc-99m`, `Tc99m`, `tc_99m`
/// - Mass number first `99mTc`
/// - Numbered isomers `Tc-99m1`
///
/// ```rust
/// # use nukmed_decay::{Nuclide, IsomerState};
/// # use std::str::FromStr;
/// assert_eq!(
///     Nuclide::from_str("99mTc").unwrap(),
///     Nuclide {
///         symbol: "Tc".to_string(),
///         mass_number: 99,
///         state: IsomerState::Excited(1)
///     }
/// );
/// ```
///
/// A mass number is always required, element symbols alone are not a
/// radionuclide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nuclide {
    /// Element symbol, capitalised e.g. `Tc`
    pub symbol: String,
    /// Mass number (Z+N, total nucleons)
    pub mass_number: u16,
    /// Excited state status
    pub state: IsomerState,
}

impl Nuclide {
    /// A name for the nuclide with consistent formatting
    ///
    /// Formatted as `<element>-<mass number><state>`, matching the usual
    /// clinical notation.
    ///
    /// ```rust
    /// # use nukmed_decay::Nuclide;
    /// # use std::str::FromStr;
    /// assert_eq!(Nuclide::from_str("tc99m").unwrap().name(), "Tc-99m");
    /// assert_eq!(Nuclide::from_str("18F").unwrap().name(), "F-18");
    /// ```
    pub fn name(&self) -> String {
        f!("{}-{}{}", self.symbol, self.mass_number, self.state)
    }
}

impl std::str::FromStr for Nuclide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match nuclide_from_str(s.trim()) {
            Ok(("", nuclide)) => Ok(nuclide),
            _ => Err(Error::ParseError(f!("Could not extract a radionuclide from {s:?}"))),
        }
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variants of excited states
///
/// Metastable states are written the clinical way, so the first excited
/// state is just `m` and any higher state carries its number (`m2`, `m3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IsomerState {
    #[default]
    Ground,
    Excited(u8),
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IsomerState::Ground => Ok(()),
            IsomerState::Excited(1) => write!(f, "m"),
            IsomerState::Excited(e) => write!(f, "m{e}"),
        }
    }
}

/// Check if two radionuclide identifiers refer to the same nuclide
///
/// Identical strings always match. Otherwise both are parsed and compared as
/// [Nuclide]s, so spelling variants match but anything unparseable only
/// matches itself.
///
/// ```rust
/// # use nukmed_decay::same_nuclide;
/// assert!(same_nuclide("Tc-99m", "99mTc"));
/// assert!(same_nuclide("Custom tracer", "Custom tracer"));
/// assert!(!same_nuclide("Tc-99m", "Tc-99"));
/// ```
pub fn same_nuclide(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.parse::<Nuclide>(), b.parse::<Nuclide>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
