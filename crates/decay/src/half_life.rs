//! Validated half-life values

use std::f64::consts::LN_2;

/// A radionuclide half-life in hours
///
/// Can only hold a finite, positive number of hours. Anything else has no
/// physical meaning and is rejected at construction, so every computation
/// that takes a `HalfLife` is guaranteed a usable value.
///
/// ```rust
/// # use nukmed_decay::HalfLife;
/// let tc99m = HalfLife::from_hours(6.02).unwrap();
/// assert_eq!(tc99m.hours(), 6.02);
/// assert_eq!(tc99m.to_string(), "6.02 h");
///
/// // Zero, negative, and non-finite values are not half-lives
/// assert!(HalfLife::from_hours(0.0).is_none());
/// assert!(HalfLife::from_hours(-1.0).is_none());
/// assert!(HalfLife::from_hours(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HalfLife(f64);

impl HalfLife {
    /// Try to create a half-life from a number of hours
    pub fn from_hours(hours: f64) -> Option<Self> {
        if hours.is_finite() && hours > 0.0 {
            Some(Self(hours))
        } else {
            None
        }
    }

    /// Half-life in hours
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Decay constant λ = ln(2)/T½ (h⁻¹)
    ///
    /// ```rust
    /// # use nukmed_decay::HalfLife;
    /// let lambda = HalfLife::from_hours(6.02).unwrap().decay_constant();
    /// assert!((lambda - 0.1151).abs() < 1e-4);
    /// ```
    pub fn decay_constant(self) -> f64 {
        LN_2 / self.0
    }
}

impl std::fmt::Display for HalfLife {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} h", self.0)
    }
}
