//! Running each command against the loaded data

// standard library
use std::path::Path;

// external crates
use log::{debug, info};

// nukmed modules
use nukmed_catalog::{Catalog, Favourites, Filter};
use nukmed_decay::{
    to_canonical, Calculator, CatalogRecord, DecayQuery, HalfLifeResolver, HalfLifeTable,
};

// internal modules
use crate::cli::{facet, CatalogArgs, Command, DecayArgs, SourceArgs};
use crate::error::Result;
use crate::render::{self, Target};

/// Run a command, printing the results to stdout
pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Decay(args) => decay(args),
        Command::Catalog(args) => catalog(args),
        Command::Nuclides(args) => nuclides(args),
    }
}

fn decay(args: &DecayArgs) -> Result<()> {
    let catalog = load_optional_catalog(args.source.catalog.as_deref())?;
    let table = load_table(args.source.table.as_deref())?;
    let calculator = Calculator::new(HalfLifeResolver::new(&table), catalog.entries());

    let query = DecayQuery::from_display(
        &args.nuclide,
        args.activity,
        args.unit,
        args.hours,
        args.minutes,
    );
    let result = calculator.decay(&query);

    let target = args.target.and_then(|t| decay_target(&calculator, &query, t));

    println!("{}", render::decay_report(&args.nuclide, &result, target));
    Ok(())
}

/// Time to a target given in the display unit, only for a positive target
fn decay_target<R: CatalogRecord>(
    calculator: &Calculator<R>,
    query: &DecayQuery,
    target: f64,
) -> Option<Target> {
    if !target.is_finite() || target <= 0.0 {
        return None;
    }

    let activity = to_canonical(target, query.display_unit);
    Some(Target {
        activity,
        result: calculator.time_to_target(&query.radionuclide, query.initial_activity, activity),
    })
}

fn catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let favourites = Favourites::from_keys(args.favourites.iter().map(String::as_str));

    let mut filter = Filter::default().query(&args.search).sort(args.sort);
    if let Some(modality) = facet(args.modality.as_deref()) {
        filter = filter.modality(modality);
    }
    if let Some(organ) = facet(args.organ.as_deref()) {
        filter = filter.organ(organ);
    }
    debug!("{filter:?}");

    let view = catalog.filter(&filter);
    if view.is_empty() {
        println!("No entries found");
        return Ok(());
    }

    info!("{} of {} entries", view.len(), catalog.len());
    for entry in view {
        println!("{}", render::catalog_entry(entry, favourites.contains(entry)));
    }
    Ok(())
}

fn nuclides(args: &SourceArgs) -> Result<()> {
    let catalog = load_optional_catalog(args.catalog.as_deref())?;
    let table = load_table(args.table.as_deref())?;
    let calculator = Calculator::new(HalfLifeResolver::new(&table), catalog.entries());

    let mut names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    names.extend(
        catalog
            .radionuclides()
            .into_iter()
            .filter(|n| !n.trim().is_empty() && !table.contains(n)),
    );

    for name in names {
        println!("{}", render::nuclide_row(name, calculator.resolve(name)));
    }
    Ok(())
}

/// Reference table, extended by a CSV table if given
fn load_table(path: Option<&Path>) -> Result<HalfLifeTable> {
    let mut table = HalfLifeTable::reference().clone();
    if let Some(path) = path {
        table.merge(HalfLifeTable::read_csv(path)?);
    }
    Ok(table)
}

fn load_optional_catalog(source: Option<&str>) -> Result<Catalog> {
    match source {
        Some(source) => load_catalog(source),
        None => Ok(Catalog::default()),
    }
}

/// Catalog from a file path or an http(s) URL
fn load_catalog(source: &str) -> Result<Catalog> {
    let catalog = if source.starts_with("http://") || source.starts_with("https://") {
        Catalog::fetch_json(source)?
    } else {
        Catalog::read_json(source)?
    };
    info!("Loaded {} catalog entries", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nukmed_catalog::CatalogEntry;
    use nukmed_decay::{ActivityUnit, TargetResult};

    #[test]
    fn target_only_when_positive() {
        let catalog: Vec<CatalogEntry> = Vec::new();
        let calculator = Calculator::new(HalfLifeResolver::default(), &catalog);
        let query = DecayQuery::new("Tc-99m", 1000.0, 0.0);

        assert_eq!(decay_target(&calculator, &query, 0.0), None);
        assert_eq!(decay_target(&calculator, &query, -250.0), None);
        assert_eq!(decay_target(&calculator, &query, f64::NAN), None);

        let target = decay_target(&calculator, &query, 500.0).unwrap();
        assert_eq!(target.activity, 500.0);
        assert_eq!(target.result, TargetResult::Hours(6.02));
    }

    #[test]
    fn target_in_display_unit() {
        let catalog: Vec<CatalogEntry> = Vec::new();
        let calculator = Calculator::new(HalfLifeResolver::default(), &catalog);
        let query = DecayQuery::from_display("Tc-99m", 20.0, ActivityUnit::MCi, 0.0, 0.0);

        let target = decay_target(&calculator, &query, 10.0).unwrap();
        assert_eq!(target.activity, 370.0);
        assert_eq!(target.result, TargetResult::Hours(6.02));
    }

    #[test]
    fn reference_table_without_csv() {
        let table = load_table(None).unwrap();
        assert_eq!(&table, HalfLifeTable::reference());
    }
}
