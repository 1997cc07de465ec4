//! Radioactive decay arithmetic
//!
//! Plain functions on canonical activities (MBq) and half-lives in hours.
//! None of these fail. Degenerate input gives `0` for an activity and `None`
//! for anything else, so a caller can always tell "not computable" apart from
//! a real result.

use std::f64::consts::LN_2;

/// Activity remaining after `elapsed_hours`
///
/// A(t) = A₀ · 0.5^(t / T½)
///
/// Returns exactly `0.0` if the initial activity is not a positive finite
/// number, the half-life is not a positive finite number, or the elapsed time
/// is `NaN`. Negative elapsed times are allowed and extrapolate backwards,
/// giving an activity above `initial`.
///
/// ```rust
/// # use nukmed_decay::activity_at_time;
/// // 1000 MBq of F-18 after two half-lives
/// let activity = activity_at_time(1000.0, 3.66, 1.83);
/// assert!((activity - 250.0).abs() < 1e-9);
///
/// // Degenerate inputs
/// assert_eq!(activity_at_time(0.0, 1.0, 6.02), 0.0);
/// assert_eq!(activity_at_time(1000.0, 1.0, 0.0), 0.0);
/// ```
pub fn activity_at_time(initial: f64, elapsed_hours: f64, half_life_hours: f64) -> f64 {
    if !is_positive(initial) || !is_positive(half_life_hours) || elapsed_hours.is_nan() {
        return 0.0;
    }
    initial * 0.5_f64.powf(elapsed_hours / half_life_hours)
}

/// Hours for `initial` to decay down to `target`
///
/// t = |ln(A / A₀) / ln(0.5)| · T½
///
/// Only decay is considered, so `None` is returned unless
/// `0 < target < initial`. A half-life that is not a positive finite number
/// is also `None`.
///
/// ```rust
/// # use nukmed_decay::time_to_target;
/// // One half-life of Tc-99m
/// assert_eq!(time_to_target(1000.0, 500.0, 6.02), Some(6.02));
///
/// // Not computable
/// assert_eq!(time_to_target(1000.0, 0.0, 6.02), None);
/// assert_eq!(time_to_target(1000.0, 1000.0, 6.02), None);
/// assert_eq!(time_to_target(1000.0, 500.0, 0.0), None);
/// ```
pub fn time_to_target(initial: f64, target: f64, half_life_hours: f64) -> Option<f64> {
    if !is_positive(initial)
        || !is_positive(target)
        || !is_positive(half_life_hours)
        || target >= initial
    {
        return None;
    }
    let half_lives = (target / initial).ln() / 0.5_f64.ln();
    Some(half_lives.abs() * half_life_hours)
}

/// Number of half-lives in `elapsed_hours`
///
/// ```rust
/// # use nukmed_decay::half_lives_elapsed;
/// assert_eq!(half_lives_elapsed(3.66, 1.83), Some(2.0));
/// assert_eq!(half_lives_elapsed(3.66, 0.0), None);
/// ```
pub fn half_lives_elapsed(elapsed_hours: f64, half_life_hours: f64) -> Option<f64> {
    if !is_positive(half_life_hours) || elapsed_hours.is_nan() {
        return None;
    }
    Some(elapsed_hours / half_life_hours)
}

/// Decay constant λ = ln(2)/T½ (h⁻¹)
///
/// ```rust
/// # use nukmed_decay::decay_constant;
/// let lambda = decay_constant(6.02).unwrap();
/// assert!((lambda - 0.1151).abs() < 1e-4);
/// assert_eq!(decay_constant(-6.02), None);
/// ```
pub fn decay_constant(half_life_hours: f64) -> Option<f64> {
    is_positive(half_life_hours).then(|| LN_2 / half_life_hours)
}

/// Combine separate hour and minute fields into hours
///
/// ```rust
/// # use nukmed_decay::elapsed_hours;
/// assert_eq!(elapsed_hours(1.0, 30.0), 1.5);
/// ```
pub fn elapsed_hours(hours: f64, minutes: f64) -> f64 {
    hours + minutes / 60.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_elapsed_extrapolates() {
        let a = activity_at_time(100.0, -6.02, 6.02);
        assert!((a - 200.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_activity_is_zero() {
        assert_eq!(activity_at_time(-10.0, 1.0, 6.02), 0.0);
        assert_eq!(activity_at_time(f64::NAN, 1.0, 6.02), 0.0);
        assert_eq!(activity_at_time(100.0, 1.0, -6.02), 0.0);
        assert_eq!(activity_at_time(100.0, 1.0, f64::INFINITY), 0.0);
        assert_eq!(activity_at_time(100.0, f64::NAN, 6.02), 0.0);
    }

    #[test]
    fn infinite_elapsed_decays_fully() {
        assert_eq!(activity_at_time(100.0, f64::INFINITY, 6.02), 0.0);
    }

    #[test]
    fn target_rejections() {
        assert_eq!(time_to_target(0.0, 10.0, 6.02), None);
        assert_eq!(time_to_target(100.0, -10.0, 6.02), None);
        assert_eq!(time_to_target(100.0, 200.0, 6.02), None);
        assert_eq!(time_to_target(100.0, f64::NAN, 6.02), None);
        assert_eq!(time_to_target(f64::INFINITY, 10.0, 6.02), None);
        assert_eq!(time_to_target(100.0, 10.0, f64::NAN), None);
    }

    #[test]
    fn split_time_fields() {
        assert_eq!(elapsed_hours(0.0, 0.0), 0.0);
        assert_eq!(elapsed_hours(2.0, 15.0), 2.25);
        assert_eq!(elapsed_hours(0.0, 90.0), 1.5);
    }
}
