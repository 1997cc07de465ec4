//! Common utility for extended `std` type formatting
//!
//! These are left public for convenience.
//!
//! Anything shown to a user goes through here so that values which could not
//! be computed are always rendered as the same [PLACEHOLDER] rather than a raw
//! `NaN`, `inf`, or a misleading zero.

// standard library
use std::fmt::Display;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Shown in place of any value that could not be computed
pub const PLACEHOLDER: &str = "–";

/// Extends floats with display formatting that never leaks `NaN` or `inf`
pub trait NumFormat {
    /// Fixed precision formatting
    ///
    /// Anything that is not a finite number is replaced with the
    /// [PLACEHOLDER].
    ///
    /// ```rust
    /// # use nukmed_format::NumFormat;
    /// assert_eq!(250.0_f64.fixed(2), "250.00");
    /// assert_eq!(0.115138_f64.fixed(5), "0.11514");
    /// assert_eq!(f64::NAN.fixed(2), "–");
    /// assert_eq!(f64::INFINITY.fixed(2), "–");
    /// ```
    fn fixed(&self, precision: usize) -> String;
}

impl NumFormat for f64 {
    fn fixed(&self, precision: usize) -> String {
        if !self.is_finite() {
            return PLACEHOLDER.to_string();
        }
        f!("{:.precision$}", self, precision = precision)
    }
}

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or the [PLACEHOLDER] for `None`.
    ///
    /// ```rust
    /// # use nukmed_format::OptionFormat;
    /// let x: Option<u32> = Some(2);
    /// assert_eq!(x.display(), "2");
    ///
    /// let x: Option<u32> = None;
    /// assert_eq!(x.display(), "–");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => PLACEHOLDER.to_string(),
        }
    }
}

/// Fixed precision formatting of an optional float
///
/// Both `None` and non-finite values are shown as the [PLACEHOLDER].
///
/// ```rust
/// # use nukmed_format::fixed_or_placeholder;
/// assert_eq!(fixed_or_placeholder(Some(6.0199), 2), "6.02");
/// assert_eq!(fixed_or_placeholder(None, 2), "–");
/// ```
pub fn fixed_or_placeholder(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => v.fixed(precision),
        None => PLACEHOLDER.to_string(),
    }
}

/// Capitalises the first letter in a string
///
/// ```rust
/// # use nukmed_format::capitalise;
/// assert_eq!(capitalise("tc"), "Tc".to_string());
/// assert_eq!(capitalise(""), "".to_string());
/// ```
pub fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        None => String::new(),
    }
}
