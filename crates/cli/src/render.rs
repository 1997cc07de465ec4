//! Plain text output for each command

// external crates
use textwrap::Options;

// nukmed modules
use nukmed_catalog::{CatalogEntry, Dose};
use nukmed_decay::{from_canonical, DecayResult, Resolved, TargetResult};
use nukmed_format::{f, fixed_or_placeholder, NumFormat, OptionFormat, PLACEHOLDER};

/// Line width for wrapped text
const WIDTH: usize = 80;

/// Target activity and the time taken to reach it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Target activity (MBq)
    pub activity: f64,
    /// Time to decay down to the target
    pub result: TargetResult,
}

/// Summary of a decay calculation
///
/// Activities are shown in the display unit of the result with 2 decimals,
/// half-lives elapsed with 3, and the decay constant with 5. Anything that
/// could not be computed is shown as the placeholder.
pub fn decay_report(nuclide: &str, result: &DecayResult, target: Option<Target>) -> String {
    let unit = result.display_unit;

    let half_life = match result.half_life {
        Some(Resolved { half_life, source }) => f!("{} h ({source})", half_life.hours()),
        None => f!("{PLACEHOLDER} (unknown radionuclide)"),
    };

    let mut lines = vec![
        row("Radionuclide", nuclide.trim()),
        row("Half-life", &half_life),
        row(
            "Activity",
            &f!("{} {unit}", fixed_or_placeholder(result.display_activity(), 2)),
        ),
        row(
            "Half-lives elapsed",
            &fixed_or_placeholder(result.half_lives_elapsed, 3),
        ),
        row(
            "Decay constant",
            &f!("{} h⁻¹", fixed_or_placeholder(result.decay_constant, 5)),
        ),
    ];

    if let Some(target) = target {
        let label = f!("Time to {} {unit}", from_canonical(target.activity, unit).fixed(2));
        lines.push(row(&label, &time_to_target(&target.result)));
    }

    lines.join("\n")
}

/// Time to target in hours, days and minutes
fn time_to_target(result: &TargetResult) -> String {
    if !result.is_computable() {
        return PLACEHOLDER.to_string();
    }

    f!(
        "{} h | {} d | {} min",
        fixed_or_placeholder(result.hours(), 2),
        fixed_or_placeholder(result.days(), 2),
        fixed_or_placeholder(result.minutes(), 0)
    )
}

fn row(label: &str, value: &str) -> String {
    f!("{label:<20} {value}")
}

/// Catalog entry as an indented block, starred if a favourite
pub fn catalog_entry(entry: &CatalogEntry, favourite: bool) -> String {
    let marker = if favourite { '★' } else { '☆' };
    let mut s = f!("{marker} {} [{}]\n", entry.prep, entry.key());

    s += &f!(
        "    {} | {} | {}\n",
        or_placeholder(&entry.radionuclide),
        or_placeholder(&entry.modality),
        or_placeholder(&entry.organ)
    );
    s += &f!(
        "    Half-life: {}   Adult dose: {}\n",
        entry.half_life_label().display(),
        entry.adult_dose.as_ref().map(dose).display()
    );

    if !entry.emissions.is_empty() {
        s += &wrapped("Emissions", &entry.emissions);
    }
    if !entry.indications.is_empty() {
        s += &wrapped("Indications", &entry.indications.join(", "));
    }
    if let Some(notes) = entry.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        s += &wrapped("Notes", notes);
    }

    s
}

fn dose(dose: &Dose) -> String {
    match dose {
        Dose::Activity(a) => f!("{a} MBq"),
        Dose::Text(t) => t.clone(),
    }
}

fn or_placeholder(s: &str) -> &str {
    if s.trim().is_empty() {
        PLACEHOLDER
    } else {
        s
    }
}

fn wrapped(label: &str, text: &str) -> String {
    let options = Options::new(WIDTH)
        .initial_indent("    ")
        .subsequent_indent("      ");
    textwrap::fill(&f!("{label}: {text}"), options) + "\n"
}

/// Radionuclide with its resolved half-life, one per line
pub fn nuclide_row(nuclide: &str, resolved: Option<Resolved>) -> String {
    match resolved {
        Some(r) => f!("{nuclide:<10} {:>12} h  {}", r.half_life.hours().fixed(4), r.source),
        None => f!("{nuclide:<10} {PLACEHOLDER:>12}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nukmed_decay::{ActivityUnit, Calculator, DecayQuery, HalfLifeResolver};
    use rstest::rstest;

    fn decay(query: DecayQuery) -> DecayResult {
        let catalog: Vec<CatalogEntry> = Vec::new();
        Calculator::new(HalfLifeResolver::default(), &catalog).decay(&query)
    }

    #[test]
    fn report_one_half_life() {
        let result = decay(DecayQuery::new("Tc-99m", 1000.0, 6.02));
        let target = Target {
            activity: 250.0,
            result: TargetResult::Hours(12.04),
        };

        let report = decay_report("Tc-99m", &result, Some(target));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Radionuclide         Tc-99m");
        assert_eq!(lines[1], "Half-life            6.02 h (reference)");
        assert_eq!(lines[2], "Activity             500.00 MBq");
        assert_eq!(lines[3], "Half-lives elapsed   1.000");
        assert_eq!(lines[4], "Decay constant       0.11514 h⁻¹");
        assert_eq!(lines[5], "Time to 250.00 MBq   12.04 h | 0.50 d | 722 min");
    }

    #[test]
    fn report_in_millicurie() {
        let query = DecayQuery::from_display("Tc-99m", 20.0, ActivityUnit::MCi, 6.0, 1.2);
        let report = decay_report("Tc-99m", &decay(query), None);
        assert!(report.contains("Activity             10.00 mCi"));
        assert!(!report.contains("Time to"));
    }

    #[test]
    fn report_unknown_nuclide() {
        let result = decay(DecayQuery::new("Xx-999", 1000.0, 1.0));
        let target = Target {
            activity: 500.0,
            result: TargetResult::NotComputable,
        };

        let report = decay_report("Xx-999", &result, Some(target));
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Half-life            – (unknown radionuclide)");
        assert_eq!(lines[2], "Activity             – MBq");
        assert_eq!(lines[3], "Half-lives elapsed   –");
        assert_eq!(lines[4], "Decay constant       – h⁻¹");
        assert_eq!(lines[5], "Time to 500.00 MBq   –");
    }

    #[rstest]
    #[case(TargetResult::Hours(24.0), "24.00 h | 1.00 d | 1440 min")]
    #[case(TargetResult::Hours(1.13), "1.13 h | 0.05 d | 68 min")]
    #[case(TargetResult::NotComputable, "–")]
    fn target_times(#[case] result: TargetResult, #[case] expected: &str) {
        assert_eq!(time_to_target(&result), expected);
    }

    #[test]
    fn entry_block() {
        let entry = CatalogEntry {
            id: Some("mdp".to_string()),
            prep: "Tc-99m MDP".to_string(),
            radionuclide: "Tc-99m".to_string(),
            modality: "SPECT".to_string(),
            organ: "Skelett".to_string(),
            half_life_h: Some(6.02),
            adult_dose: Some(Dose::Text("500-700".to_string())),
            indications: vec!["Metastasen".to_string(), "Frakturen".to_string()],
            ..Default::default()
        };

        let block = catalog_entry(&entry, true);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "★ Tc-99m MDP [mdp]");
        assert_eq!(lines[1], "    Tc-99m | SPECT | Skelett");
        assert_eq!(lines[2], "    Half-life: 6.02 h   Adult dose: 500-700");
        assert_eq!(lines[3], "    Indications: Metastasen, Frakturen");
        assert_eq!(lines.len(), 4);

        assert!(catalog_entry(&entry, false).starts_with("☆ "));
    }

    #[test]
    fn entry_block_placeholders() {
        let entry = CatalogEntry {
            prep: "Cr-51 EDTA".to_string(),
            adult_dose: Some(Dose::Activity(3.7)),
            ..Default::default()
        };

        let block = catalog_entry(&entry, false);
        assert!(block.contains("    – | – | –\n"));
        assert!(block.contains("Half-life: –   Adult dose: 3.7 MBq"));
    }

    #[test]
    fn long_notes_are_wrapped() {
        let entry = CatalogEntry {
            prep: "Lu-177 PSMA-617".to_string(),
            notes: Some("Hydration and frequent voiding reduce the bladder dose. ".repeat(4)),
            ..Default::default()
        };

        let block = catalog_entry(&entry, false);
        assert!(block.lines().all(|l| l.chars().count() <= WIDTH));
        assert!(block.lines().filter(|l| l.starts_with("      ")).count() >= 2);
    }

    #[test]
    fn nuclide_rows() {
        let resolver = HalfLifeResolver::default();
        let catalog: Vec<CatalogEntry> = Vec::new();

        let row = nuclide_row("F-18", resolver.resolve("F-18", &catalog));
        assert_eq!(row, "F-18             1.8300 h  reference");
        assert_eq!(nuclide_row("Xx-1", None), "Xx-1                  –");
    }
}
