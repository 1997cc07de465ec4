//! Catalog entries for single radiopharmaceuticals

// external crates
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// nukmed modules
use nukmed_decay::{CatalogRecord, HalfLife};

// internal modules
use crate::parsers::hours_from_str;

/// A single radiopharmaceutical in the catalog
///
/// Field names follow the catalog JSON document, with a couple of renames for
/// clarity (`halfLife_h` → `half_life_h`, `halfLife` → `half_life_text`,
/// `adultDoseMBq` → `adult_dose`).
///
/// Catalogs are usually maintained by hand, so deserialising is forgiving:
///
/// - Every field except the radionuclide is optional
/// - `null` is treated the same as a missing field
/// - Numbers given as text (`"6.02"`) are accepted for `halfLife_h`
/// - Ids may be numbers or text
///
/// ```rust
/// # use nukmed_catalog::CatalogEntry;
/// let entry: CatalogEntry = serde_json::from_str(r#"{
///     "id": "tc-mdp",
///     "prep": "Tc-99m MDP",
///     "radionuclide": "Tc-99m",
///     "modality": "SPECT",
///     "organ": "Skelett",
///     "halfLife_h": 6.02,
///     "adultDoseMBq": "500-700",
///     "indications": ["Knochenmetastasen", "Frakturen"]
/// }"#).unwrap();
///
/// assert_eq!(entry.key(), "tc-mdp");
/// assert_eq!(entry.half_life_hours(), Some(6.02));
/// assert_eq!(entry.notes, None);
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogEntry {
    /// Unique identifier
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,

    /// Preparation name, e.g. "Ga-68 PSMA-11"
    #[serde(deserialize_with = "null_as_default")]
    pub prep: String,

    /// Radionuclide identifier, e.g. "Ga-68"
    #[serde(deserialize_with = "null_as_default")]
    pub radionuclide: String,

    /// Imaging or therapy modality, e.g. "PET"
    #[serde(deserialize_with = "null_as_default")]
    pub modality: String,

    /// Organ system
    #[serde(deserialize_with = "null_as_default")]
    pub organ: String,

    /// Emission summary, e.g. "β+ 511 keV"
    #[serde(deserialize_with = "null_as_default")]
    pub emissions: String,

    /// Half-life (h)
    #[serde(rename = "halfLife_h", deserialize_with = "lenient_hours")]
    pub half_life_h: Option<f64>,

    /// Free text half-life, e.g. "6 h" or "8.02 d"
    #[serde(rename = "halfLife", deserialize_with = "lenient_text")]
    pub half_life_text: Option<String>,

    /// Typical adult dose (MBq)
    #[serde(rename = "adultDoseMBq")]
    pub adult_dose: Option<Dose>,

    /// Clinical indications
    #[serde(deserialize_with = "null_as_default")]
    pub indications: Vec<String>,

    /// Preparation or handling notes
    pub notes: Option<String>,

    /// Longer explanation
    pub explanation: Option<String>,
}

impl CatalogEntry {
    /// Key used to track favourites
    ///
    /// The id if there is one, otherwise the preparation name.
    pub fn key(&self) -> &str {
        match &self.id {
            Some(id) if !id.is_empty() => id,
            _ => &self.prep,
        }
    }

    /// Best available half-life (h)
    ///
    /// The numeric `halfLife_h` is preferred when it is a finite positive
    /// number. Otherwise the leading number of the free text half-life is
    /// used, converting any time unit that follows it to hours.
    ///
    /// ```rust
    /// # use nukmed_catalog::CatalogEntry;
    /// let entry = CatalogEntry {
    ///     half_life_text: Some("8.02 d".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!((entry.half_life_hours().unwrap() - 192.48).abs() < 1e-9);
    /// ```
    pub fn half_life_hours(&self) -> Option<f64> {
        self.half_life_h
            .and_then(HalfLife::from_hours)
            .map(HalfLife::hours)
            .or_else(|| self.half_life_text.as_deref().and_then(hours_from_str))
    }

    /// Text searched by a free text query, all lower case
    pub fn haystack(&self) -> String {
        let mut parts = vec![
            self.radionuclide.as_str(),
            self.prep.as_str(),
            self.organ.as_str(),
            self.emissions.as_str(),
        ];
        parts.extend(self.indications.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Half-life for display, the numeric value in hours if available
    pub fn half_life_label(&self) -> Option<String> {
        match (self.half_life_h.and_then(HalfLife::from_hours), &self.half_life_text) {
            (Some(h), _) => Some(h.to_string()),
            (None, Some(text)) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

impl CatalogRecord for CatalogEntry {
    fn radionuclide(&self) -> &str {
        &self.radionuclide
    }

    fn half_life_h(&self) -> Option<f64> {
        self.half_life_h
    }
}

/// Typical adult dose, either a number of MBq or free text such as a range
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Dose {
    /// Single activity (MBq)
    Activity(f64),
    /// Anything else, e.g. "185-370" or "2-3 MBq/kg"
    Text(String),
}

impl std::fmt::Display for Dose {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dose::Activity(a) => write!(f, "{a}"),
            Dose::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Custom deserialiser treating `null` as the default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Custom deserialiser for hours given as either a number or numeric text
fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Custom deserialiser for text that may have been written as a number
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forgiving_fields() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{
                "id": 17,
                "prep": null,
                "radionuclide": "I-131",
                "halfLife_h": "192.5",
                "halfLife": 8,
                "adultDoseMBq": 3700,
                "indications": null
            }"#,
        )
        .unwrap();

        assert_eq!(entry.id.as_deref(), Some("17"));
        assert_eq!(entry.prep, "");
        assert_eq!(entry.half_life_h, Some(192.5));
        assert_eq!(entry.half_life_text.as_deref(), Some("8"));
        assert_eq!(entry.adult_dose, Some(Dose::Activity(3700.0)));
        assert!(entry.indications.is_empty());
    }

    #[test]
    fn unusable_half_life_is_none() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"radionuclide": "X", "halfLife_h": "long"}"#).unwrap();
        assert_eq!(entry.half_life_h, None);
        assert_eq!(entry.half_life_hours(), None);
    }

    #[test]
    fn non_positive_half_life_is_missing() {
        for value in [0.0, -2.0] {
            let mut entry = CatalogEntry {
                half_life_h: Some(value),
                ..Default::default()
            };
            assert_eq!(entry.half_life_hours(), None, "{value}");

            entry.half_life_text = Some("110 min".to_string());
            assert!((entry.half_life_hours().unwrap() - 110.0 / 60.0).abs() < 1e-12);
        }
    }

    #[test]
    fn key_falls_back_to_prep() {
        let mut entry = CatalogEntry {
            prep: "F-18 FDG".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.key(), "F-18 FDG");

        entry.id = Some(String::new());
        assert_eq!(entry.key(), "F-18 FDG");

        entry.id = Some("fdg".to_string());
        assert_eq!(entry.key(), "fdg");
    }

    #[test]
    fn haystack_covers_search_fields() {
        let entry = CatalogEntry {
            radionuclide: "Ga-68".to_string(),
            prep: "Ga-68 DOTATATE".to_string(),
            organ: "Neuroendokrin".to_string(),
            emissions: "β+".to_string(),
            indications: vec!["NET Staging".to_string()],
            modality: "PET".to_string(),
            ..Default::default()
        };
        let haystack = entry.haystack();
        assert!(haystack.contains("dotatate"));
        assert!(haystack.contains("net staging"));
        assert!(haystack.contains("neuroendokrin"));
        // modality is a filter, not searched
        assert!(!haystack.contains("pet"));
    }

    #[test]
    fn half_life_labels() {
        let mut entry = CatalogEntry {
            half_life_text: Some("110 min".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.half_life_label().as_deref(), Some("110 min"));

        entry.half_life_h = Some(0.0);
        assert_eq!(entry.half_life_label().as_deref(), Some("110 min"));

        entry.half_life_h = Some(1.83);
        assert_eq!(entry.half_life_label().as_deref(), Some("1.83 h"));

        entry.half_life_h = None;
        entry.half_life_text = Some(" ".to_string());
        assert_eq!(entry.half_life_label(), None);
    }

    #[test]
    fn dose_display() {
        assert_eq!(Dose::Activity(370.0).to_string(), "370");
        assert_eq!(Dose::Text("185-370".to_string()).to_string(), "185-370");
    }
}
