use std::collections::BTreeMap;
use std::fmt;

use super::model::{LaunchDataset, LaunchRecord, OutcomeClass};

// ---------------------------------------------------------------------------
// Selection inputs
// ---------------------------------------------------------------------------

/// Value of the site dropdown meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Site filter chosen in the dropdown.
///
/// Any string other than [`ALL_SITES`] is treated as a site name, known or
/// not; an unknown name simply matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse the raw dropdown value.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value.
    pub fn as_value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name.as_str(),
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Inclusive payload window `[low, high]` in kilograms.
///
/// `low <= high` is maintained by the slider but not assumed here: a
/// reversed or NaN window selects nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The window spanning the whole dataset.
    pub fn full(dataset: &LaunchDataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Outcome distribution (pie chart)
// ---------------------------------------------------------------------------

/// Records contributing to the pie chart and their per-class counts.
///
/// Both the all-sites and the single-site branch produce this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDistribution<'a> {
    pub title: String,
    pub rows: Vec<&'a LaunchRecord>,
    /// Only classes present in `rows`; absent classes are not zero-filled.
    pub counts: BTreeMap<OutcomeClass, usize>,
}

impl OutcomeDistribution<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

pub fn outcome_distribution<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
) -> OutcomeDistribution<'a> {
    let title = match site {
        SiteSelection::All => "Total Success Launches for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Success Launches for {name}"),
    };

    let rows: Vec<&LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|rec| site.matches(rec))
        .collect();

    let mut counts = BTreeMap::new();
    for rec in &rows {
        *counts.entry(rec.outcome_class).or_insert(0) += 1;
    }

    OutcomeDistribution { title, rows, counts }
}

// ---------------------------------------------------------------------------
// Payload vs. outcome (scatter chart)
// ---------------------------------------------------------------------------

/// Records inside the payload window (and site, if one is selected).
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadOutcome<'a> {
    pub title: String,
    pub rows: Vec<&'a LaunchRecord>,
}

impl PayloadOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn payload_outcome<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> PayloadOutcome<'a> {
    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {name}"),
    };

    let rows = dataset
        .records()
        .iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .filter(|rec| site.matches(rec))
        .collect();

    PayloadOutcome { title, rows }
}

// ---------------------------------------------------------------------------
// Range readout
// ---------------------------------------------------------------------------

/// Text shown under the payload slider. `f64` display keeps the stored
/// precision: `1000.0` prints as `1000`, `2500.5` as `2500.5`.
pub fn range_label(range: PayloadRange) -> String {
    format!(
        "Selected Payload Range: {} kg to {} kg",
        range.low, range.high
    )
}
