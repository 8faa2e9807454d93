use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column and site contract with the data source
// ---------------------------------------------------------------------------

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_BOOSTER_CATEGORY,
    COL_CLASS,
];

/// The closed set of launch sites the dashboard knows about.
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

pub fn is_known_site(site: &str) -> bool {
    KNOWN_SITES.contains(&site)
}

// ---------------------------------------------------------------------------
// OutcomeClass – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as stored in the `class` column (failure = 0, success = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(OutcomeClass::Failure),
            1 => Some(OutcomeClass::Success),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn as_f64(self) -> f64 {
        self.value() as f64
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Always finite and non-negative.
    pub payload_mass_kg: f64,
    /// Only used to colour the scatter chart.
    pub booster_version_category: String,
    pub outcome_class: OutcomeClass,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable record set with payload bounds and column indices.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    /// Sorted unique booster categories (colour legend order).
    booster_categories: BTreeSet<String>,
    /// Sorted unique sites actually present in the data.
    sites: BTreeSet<String>,
}

impl LaunchDataset {
    /// Build the dataset and its derived indices from loaded records.
    ///
    /// An empty record set gets `0.0` for both payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut booster_categories = BTreeSet::new();
        let mut sites = BTreeSet::new();

        for rec in &records {
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
            booster_categories.insert(rec.booster_version_category.clone());
            sites.insert(rec.launch_site.clone());
        }

        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        LaunchDataset {
            records,
            min_payload,
            max_payload,
            booster_categories,
            sites,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(site: &str, payload: f64, booster: &str, class: i64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: booster.to_string(),
            outcome_class: OutcomeClass::from_value(class).expect("class must be 0 or 1"),
        }
    }

    /// The three-record scenario used across the filter tests.
    pub fn three_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5000.0, "v1.0", 1),
            record("KSC LC-39A", 3000.0, "v1.0", 0),
            record("VAFB SLC-4E", 9000.0, "v1.1", 1),
        ])
    }

    /// A larger mixed dataset touching every known site.
    pub fn mixed_launches() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, "v1.0", 0),
            record("CCAFS LC-40", 525.0, "v1.0", 0),
            record("CCAFS LC-40", 2296.0, "FT", 1),
            record("CCAFS SLC-40", 3669.0, "FT", 1),
            record("CCAFS SLC-40", 6761.0, "B4", 0),
            record("KSC LC-39A", 2490.0, "FT", 1),
            record("KSC LC-39A", 5300.0, "B4", 1),
            record("KSC LC-39A", 9600.0, "B5", 1),
            record("VAFB SLC-4E", 500.0, "v1.1", 0),
            record("VAFB SLC-4E", 9600.0, "FT", 1),
        ])
    }
}
