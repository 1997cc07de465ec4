//! Activity units and conversion to/from the canonical MBq

// internal modules
use crate::error::{Error, Result};

/// Conversion factor, 1 mCi = 37 MBq
pub const MBQ_PER_MCI: f64 = 37.0;

/// Units of activity available for display
///
/// All computations are done in MBq, the canonical unit. Values entered or
/// displayed in mCi are converted at the boundary.
///
/// ```rust
/// # use nukmed_decay::ActivityUnit;
/// # use std::str::FromStr;
/// assert_eq!(ActivityUnit::from_str("mci").unwrap(), ActivityUnit::MCi);
/// assert_eq!(ActivityUnit::MCi.to_string(), "mCi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityUnit {
    /// Megabecquerel, the canonical unit
    #[default]
    MBq,
    /// Millicurie
    MCi,
}

impl ActivityUnit {
    /// Unit symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            ActivityUnit::MBq => "MBq",
            ActivityUnit::MCi => "mCi",
        }
    }
}

impl std::str::FromStr for ActivityUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mbq" => Ok(ActivityUnit::MBq),
            "mci" => Ok(ActivityUnit::MCi),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Convert an activity in `unit` to the canonical MBq
///
/// No validation is done, zero and negative values pass straight through.
///
/// ```rust
/// # use nukmed_decay::{to_canonical, ActivityUnit};
/// assert_eq!(to_canonical(740.0, ActivityUnit::MBq), 740.0);
/// assert_eq!(to_canonical(20.0, ActivityUnit::MCi), 740.0);
/// assert_eq!(to_canonical(-1.0, ActivityUnit::MCi), -37.0);
/// ```
pub fn to_canonical(value: f64, unit: ActivityUnit) -> f64 {
    match unit {
        ActivityUnit::MBq => value,
        ActivityUnit::MCi => value * MBQ_PER_MCI,
    }
}

/// Convert an activity in the canonical MBq to `unit`
///
/// ```rust
/// # use nukmed_decay::{from_canonical, ActivityUnit};
/// assert_eq!(from_canonical(740.0, ActivityUnit::MBq), 740.0);
/// assert_eq!(from_canonical(740.0, ActivityUnit::MCi), 20.0);
/// ```
pub fn from_canonical(value: f64, unit: ActivityUnit) -> f64 {
    match unit {
        ActivityUnit::MBq => value,
        ActivityUnit::MCi => value / MBQ_PER_MCI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_units() {
        assert_eq!(ActivityUnit::from_str("MBq").unwrap(), ActivityUnit::MBq);
        assert_eq!(ActivityUnit::from_str(" mCi ").unwrap(), ActivityUnit::MCi);
        assert!(matches!(
            ActivityUnit::from_str("GBq"),
            Err(Error::UnknownUnit(u)) if u == "GBq"
        ));
    }

    #[test]
    fn mci_round_trip() {
        for v in [0.0, 1.0, -5.5, 27.0, 1e-9, 3.3e6] {
            let back = from_canonical(to_canonical(v, ActivityUnit::MCi), ActivityUnit::MCi);
            assert!((back - v).abs() <= 1e-12 * v.abs().max(1.0), "{v} -> {back}");
        }
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(to_canonical(f64::NAN, ActivityUnit::MCi).is_nan());
        assert_eq!(from_canonical(f64::INFINITY, ActivityUnit::MCi), f64::INFINITY);
    }
}
