//! Command line arguments

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Args, Parser, Subcommand};

// nukmed modules
use nukmed_catalog::Sort;
use nukmed_decay::ActivityUnit;

/// Radiopharmaceutical quick reference and radioactive decay calculator
///
/// Half-lives come from a built-in reference table of common clinical
/// radionuclides. Anything missing from the table falls back to the half-life
/// recorded in the catalog, if one is provided.
#[derive(Parser, Debug)]
#[command(name = "nukmed", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Activity after some time, and the time to reach a target activity
    Decay(DecayArgs),

    /// Search, filter and sort the radiopharmaceutical catalog
    Catalog(CatalogArgs),

    /// List every known radionuclide with its half-life
    Nuclides(SourceArgs),
}

/// Where half-lives are looked up
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Catalog JSON file, or an http(s) URL to fetch it from
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<String>,

    /// CSV of extra half-lives with headers `radionuclide,half_life_h`
    #[arg(short, long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecayArgs {
    /// Radionuclide, e.g. "Tc-99m", "F18", "99mTc"
    #[arg(value_name = "NUCLIDE")]
    pub nuclide: String,

    /// Initial activity in the chosen unit
    #[arg(short, long, allow_negative_numbers = true)]
    pub activity: f64,

    /// Elapsed hours
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hours: f64,

    /// Elapsed minutes, added to the hours
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub minutes: f64,

    /// Activity unit for input and output (MBq, mCi)
    #[arg(short, long, default_value = "MBq", value_parser = parse_unit)]
    pub unit: ActivityUnit,

    /// Target activity in the chosen unit
    #[arg(long)]
    pub target: Option<f64>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON file, or an http(s) URL to fetch it from
    #[arg(short, long, value_name = "FILE")]
    pub catalog: String,

    /// Case-insensitive free text search
    #[arg(short, long, value_name = "QUERY", default_value = "")]
    pub search: String,

    /// Only entries of this modality ("all" for every modality)
    #[arg(long)]
    pub modality: Option<String>,

    /// Only entries for this organ system ("all" for every organ)
    #[arg(long)]
    pub organ: Option<String>,

    /// Sort order (alpha, half-life)
    #[arg(long, default_value = "alpha", value_parser = parse_sort)]
    pub sort: Sort,

    /// Mark entries as favourites by id or preparation name
    #[arg(short, long = "favourite", value_name = "KEY")]
    pub favourites: Vec<String>,
}

fn parse_unit(s: &str) -> Result<ActivityUnit, String> {
    s.parse().map_err(|e: nukmed_decay::Error| e.to_string())
}

fn parse_sort(s: &str) -> Result<Sort, String> {
    s.parse().map_err(|e: nukmed_catalog::Error| e.to_string())
}

/// Modality or organ filter, where "all" (or "Alle") means no filter
pub fn facet(value: Option<&str>) -> Option<&str> {
    value.filter(|v| {
        let v = v.trim();
        !(v.is_empty() || v.eq_ignore_ascii_case("all") || v.eq_ignore_ascii_case("alle"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decay_defaults() {
        let cli = Cli::parse_from(["nukmed", "decay", "Tc-99m", "--activity", "740"]);
        let Command::Decay(args) = cli.command else {
            panic!("expected the decay command");
        };
        assert_eq!(args.nuclide, "Tc-99m");
        assert_eq!(args.activity, 740.0);
        assert_eq!(args.hours, 0.0);
        assert_eq!(args.unit, ActivityUnit::MBq);
        assert_eq!(args.target, None);
        assert!(args.source.catalog.is_none());
    }

    #[test]
    fn global_verbosity() {
        let cli = Cli::parse_from(["nukmed", "nuclides", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn unit_and_sort_parsing() {
        let cli = Cli::parse_from(["nukmed", "decay", "F-18", "-a", "20", "-u", "mci"]);
        let Command::Decay(args) = cli.command else {
            panic!("expected the decay command");
        };
        assert_eq!(args.unit, ActivityUnit::MCi);

        let cli = Cli::parse_from(["nukmed", "catalog", "-c", "x.json", "--sort", "half-life"]);
        let Command::Catalog(args) = cli.command else {
            panic!("expected the catalog command");
        };
        assert_eq!(args.sort, Sort::HalfLife);

        assert!(Cli::try_parse_from(["nukmed", "decay", "F-18", "-a", "1", "-u", "Bq"]).is_err());
    }

    #[test]
    fn all_means_no_facet() {
        assert_eq!(facet(Some("PET")), Some("PET"));
        assert_eq!(facet(Some("Alle")), None);
        assert_eq!(facet(Some("all")), None);
        assert_eq!(facet(Some(" ")), None);
        assert_eq!(facet(None), None);
    }
}
