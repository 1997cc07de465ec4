//! Integration tests for catalog loading and views

use nukmed_catalog::{Catalog, Favourites, Filter, Sort};
use nukmed_decay::{Calculator, DecayQuery, HalfLifeResolver, Source, TargetResult};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> Catalog {
    Catalog::read_json("./data/radiopharmaka.json").unwrap()
}

fn preps(view: &[&nukmed_catalog::CatalogEntry]) -> Vec<String> {
    view.iter().map(|e| e.prep.clone()).collect()
}

#[rstest]
fn reads_every_entry(catalog: Catalog) {
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.get("mdp").unwrap().prep, "Tc-99m MDP");
    assert!(catalog.get("unknown").is_none());
}

#[rstest]
fn facets(catalog: Catalog) {
    assert_eq!(catalog.modalities(), ["Labor", "PET", "SPECT", "Therapie"]);
    assert_eq!(
        catalog.organs(),
        [
            "Neuroendokrin",
            "Niere",
            "Onkologie",
            "Prostata",
            "Schilddrüse",
            "Skelett"
        ]
    );
    assert_eq!(
        catalog.radionuclides(),
        ["F-18", "Ga-68", "Tc-99m", "I-131", "Lu-177", "Ac-225", "Cr-51"]
    );
}

#[rstest]
#[case("psma", 3)]
#[case("PSMA", 3)]
#[case("niere", 2)]
#[case("tc-99m", 2)]
#[case("keV", 8)]
#[case("mcrpc", 2)]
#[case("nothing like this", 0)]
fn free_text_search(catalog: Catalog, #[case] query: &str, #[case] expected: usize) {
    let view = catalog.filter(&Filter::default().query(query));
    assert_eq!(view.len(), expected, "{query}");
}

#[rstest]
fn combined_filters(catalog: Catalog) {
    let filter = Filter::default().query("psma").modality("Therapie");
    assert_eq!(
        preps(&catalog.filter(&filter)),
        ["Ac-225 PSMA-617", "Lu-177 PSMA-617"]
    );

    let filter = Filter::default().organ("Prostata").modality("PET");
    assert_eq!(preps(&catalog.filter(&filter)), ["Ga-68 PSMA-11"]);
}

#[rstest]
fn sorted_by_half_life(catalog: Catalog) {
    let view = catalog.filter(&Filter::default().sort(Sort::HalfLife));
    assert_eq!(
        preps(&view),
        [
            "Ga-68 DOTATATE",
            "Ga-68 PSMA-11",
            "F-18 FDG",
            "Tc-99m MDP",
            "Tc-99m MAG3",
            "Lu-177 PSMA-617",
            "I-131 Natriumiodid",
            "Ac-225 PSMA-617",
            "Cr-51 EDTA",
        ]
    );
}

#[rstest]
fn sorted_by_preparation(catalog: Catalog) {
    let view = catalog.filter(&Filter::default().modality("SPECT"));
    assert_eq!(preps(&view), ["Tc-99m MAG3", "Tc-99m MDP"]);
}

#[rstest]
fn favourites_follow_keys(catalog: Catalog) {
    let mut favourites = Favourites::default();
    let mdp = catalog.get("mdp").unwrap();
    let fdg = catalog.get("fdg").unwrap();

    favourites.toggle(mdp);
    favourites.toggle(fdg);
    favourites.toggle(mdp);

    assert_eq!(favourites.len(), 1);
    assert!(favourites.contains(fdg));
    assert!(!favourites.contains(mdp));
    assert_eq!(favourites.keys().collect::<Vec<_>>(), ["fdg"]);
}

#[rstest]
fn catalog_supplies_missing_half_lives(catalog: Catalog) {
    let calculator = Calculator::new(HalfLifeResolver::default(), catalog.entries());

    // Ac-225 is only known from the catalog
    let result = calculator.decay(&DecayQuery::new("Ac-225", 8.0, 238.1));
    assert_eq!(result.half_life.unwrap().source, Source::Catalog);
    assert!((result.activity.unwrap() - 4.0).abs() < 1e-9);

    // Cr-51 has no numeric half-life anywhere
    let result = calculator.decay(&DecayQuery::new("Cr-51", 8.0, 1.0));
    assert_eq!(result.activity, None);
    assert_eq!(
        calculator.time_to_target("Cr-51", 8.0, 4.0),
        TargetResult::NotComputable
    );
}

#[test]
fn reads_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"prep": "Tl-201 Chlorid", "radionuclide": "Tl-201"}}]"#).unwrap();

    let catalog = Catalog::read_json(file.path()).unwrap();
    assert_eq!(catalog.radionuclides(), ["Tl-201"]);
}

#[test]
fn missing_file() {
    assert!(matches!(
        Catalog::read_json("./does/not/exist.json"),
        Err(nukmed_catalog::Error::Io(_))
    ));
}
