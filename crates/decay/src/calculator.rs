//! Decay and time-to-target queries tying resolution, units and arithmetic

// external crates
use log::debug;

// internal modules
use crate::engine::{activity_at_time, elapsed_hours, half_lives_elapsed, time_to_target};
use crate::half_life::HalfLife;
use crate::resolver::{CatalogRecord, HalfLifeResolver, Resolved};
use crate::units::{from_canonical, to_canonical, ActivityUnit};

/// Request for the activity of a radionuclide after some time
#[derive(Debug, Clone, PartialEq)]
pub struct DecayQuery {
    /// Radionuclide identifier, e.g. "F-18"
    pub radionuclide: String,
    /// Initial activity (MBq)
    pub initial_activity: f64,
    /// Time since the initial activity was measured (h)
    pub elapsed_hours: f64,
    /// Unit the results should be shown in
    pub display_unit: ActivityUnit,
}

impl DecayQuery {
    /// Query with an initial activity already in MBq
    pub fn new(radionuclide: &str, initial_activity: f64, elapsed_hours: f64) -> Self {
        Self {
            radionuclide: radionuclide.to_string(),
            initial_activity,
            elapsed_hours,
            display_unit: ActivityUnit::MBq,
        }
    }

    /// Query from values as they are entered for display
    ///
    /// The activity is given in `unit` and converted to MBq, and the elapsed
    /// time is split into hours and minutes.
    ///
    /// ```rust
    /// # use nukmed_decay::{ActivityUnit, DecayQuery};
    /// let query = DecayQuery::from_display("Tc-99m", 20.0, ActivityUnit::MCi, 1.0, 30.0);
    /// assert_eq!(query.initial_activity, 740.0);
    /// assert_eq!(query.elapsed_hours, 1.5);
    /// assert_eq!(query.display_unit, ActivityUnit::MCi);
    /// ```
    pub fn from_display(
        radionuclide: &str,
        activity: f64,
        unit: ActivityUnit,
        hours: f64,
        minutes: f64,
    ) -> Self {
        Self {
            radionuclide: radionuclide.to_string(),
            initial_activity: to_canonical(activity, unit),
            elapsed_hours: elapsed_hours(hours, minutes),
            display_unit: unit,
        }
    }
}

/// Everything computed for a [DecayQuery]
///
/// `None` marks a value that could not be computed, most commonly because the
/// half-life of the radionuclide is unknown. A zero initial activity still
/// gives a valid `Some(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayResult {
    /// Resolved half-life and where it came from
    pub half_life: Option<Resolved>,
    /// Activity after the elapsed time (MBq)
    pub activity: Option<f64>,
    /// Elapsed time as a multiple of the half-life
    pub half_lives_elapsed: Option<f64>,
    /// Decay constant λ (h⁻¹)
    pub decay_constant: Option<f64>,
    /// Unit the results should be shown in
    pub display_unit: ActivityUnit,
}

impl DecayResult {
    /// Activity after the elapsed time in any unit
    pub fn activity_in(&self, unit: ActivityUnit) -> Option<f64> {
        self.activity.map(|a| from_canonical(a, unit))
    }

    /// Activity after the elapsed time in the display unit
    pub fn display_activity(&self) -> Option<f64> {
        self.activity_in(self.display_unit)
    }

    /// True if the decayed activity is known
    pub fn is_computable(&self) -> bool {
        self.activity.is_some()
    }
}

/// Request for the time to decay down to a target activity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetQuery {
    /// Initial activity (MBq)
    pub initial_activity: f64,
    /// Activity to decay down to (MBq)
    pub target_activity: f64,
    /// Half-life, if known
    pub half_life: Option<HalfLife>,
}

impl TargetQuery {
    /// Compute the time to reach the target activity
    ///
    /// ```rust
    /// # use nukmed_decay::{HalfLife, TargetQuery, TargetResult};
    /// let query = TargetQuery {
    ///     initial_activity: 1000.0,
    ///     target_activity: 500.0,
    ///     half_life: HalfLife::from_hours(6.02),
    /// };
    /// assert_eq!(query.evaluate(), TargetResult::Hours(6.02));
    /// ```
    pub fn evaluate(&self) -> TargetResult {
        self.half_life
            .and_then(|t| time_to_target(self.initial_activity, self.target_activity, t.hours()))
            .map_or(TargetResult::NotComputable, TargetResult::Hours)
    }
}

/// Outcome of a [TargetQuery]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetResult {
    /// Hours until the target activity is reached
    Hours(f64),
    /// Unknown half-life, or a target that is not below the initial activity
    NotComputable,
}

impl TargetResult {
    /// Time to target (h)
    pub fn hours(&self) -> Option<f64> {
        match self {
            TargetResult::Hours(h) => Some(*h),
            TargetResult::NotComputable => None,
        }
    }

    /// Time to target (min)
    pub fn minutes(&self) -> Option<f64> {
        self.hours().map(|h| h * 60.0)
    }

    /// Time to target (d)
    pub fn days(&self) -> Option<f64> {
        self.hours().map(|h| h / 24.0)
    }

    /// True if a time was computed
    pub fn is_computable(&self) -> bool {
        matches!(self, TargetResult::Hours(_))
    }
}

/// Runs queries against a half-life resolver and a catalog
///
/// ```rust
/// # use nukmed_decay::{Calculator, CatalogRecord, DecayQuery, HalfLifeResolver};
/// # struct Entry;
/// # impl CatalogRecord for Entry {
/// #     fn radionuclide(&self) -> &str { "" }
/// #     fn half_life_h(&self) -> Option<f64> { None }
/// # }
/// let catalog: Vec<Entry> = vec![];
/// let calculator = Calculator::new(HalfLifeResolver::default(), &catalog);
///
/// // 1000 MBq of F-18 after two half-lives
/// let result = calculator.decay(&DecayQuery::new("F-18", 1000.0, 3.66));
/// assert!((result.activity.unwrap() - 250.0).abs() < 1e-9);
///
/// // Unknown radionuclides can not be computed
/// let result = calculator.decay(&DecayQuery::new("Co-60", 1000.0, 3.66));
/// assert_eq!(result.activity, None);
/// ```
#[derive(Debug)]
pub struct Calculator<'a, R> {
    resolver: HalfLifeResolver<'a>,
    catalog: &'a [R],
}

impl<'a, R: CatalogRecord> Calculator<'a, R> {
    /// Calculator resolving half-lives with `resolver` and `catalog`
    pub fn new(resolver: HalfLifeResolver<'a>, catalog: &'a [R]) -> Self {
        Self { resolver, catalog }
    }

    /// Resolve the half-life of a radionuclide
    pub fn resolve(&self, radionuclide: &str) -> Option<Resolved> {
        self.resolver.resolve(radionuclide, self.catalog)
    }

    /// Activity after the elapsed time and the associated quantities
    pub fn decay(&self, query: &DecayQuery) -> DecayResult {
        let resolved = self.resolve(&query.radionuclide);
        let half_life = resolved.map(|r| r.half_life.hours());

        // A negative activity has no meaning, zero is a valid result. Going far
        // enough back in time overflows, which is not computable either.
        let activity = half_life
            .filter(|_| query.initial_activity.is_finite() && query.initial_activity >= 0.0)
            .filter(|_| !query.elapsed_hours.is_nan())
            .map(|t| activity_at_time(query.initial_activity, query.elapsed_hours, t))
            .filter(|a| a.is_finite());

        let result = DecayResult {
            half_life: resolved,
            activity,
            half_lives_elapsed: half_life.and_then(|t| half_lives_elapsed(query.elapsed_hours, t)),
            decay_constant: resolved.map(|r| r.half_life.decay_constant()),
            display_unit: query.display_unit,
        };

        debug!("{query:?} -> {result:?}");
        result
    }

    /// Time for `initial` MBq of a radionuclide to decay to `target` MBq
    pub fn time_to_target(&self, radionuclide: &str, initial: f64, target: f64) -> TargetResult {
        TargetQuery {
            initial_activity: initial,
            target_activity: target,
            half_life: self.resolve(radionuclide).map(|r| r.half_life),
        }
        .evaluate()
    }
}
