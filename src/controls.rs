use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::data::filter::{PayloadRange, SiteSelection, ALL_SITES};
use crate::data::model::{LaunchDataset, KNOWN_SITES};

// ---------------------------------------------------------------------------
// Identifiers shared with the UI layer
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
#[error("unknown identifier '{0}'")]
pub struct UnknownId(pub String);

/// Input controls the dashboard exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl FromStr for ControlId {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "site-dropdown" => Ok(ControlId::SiteDropdown),
            "payload-slider" => Ok(ControlId::PayloadSlider),
            other => Err(UnknownId(other.to_string())),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output regions the callbacks write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
    PayloadRangeOutput,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
            OutputId::PayloadRangeOutput => "payload-range-output",
        }
    }
}

impl FromStr for OutputId {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success-pie-chart" => Ok(OutputId::SuccessPieChart),
            "success-payload-scatter-chart" => Ok(OutputId::SuccessPayloadScatterChart),
            "payload-range-output" => Ok(OutputId::PayloadRangeOutput),
            other => Err(UnknownId(other.to_string())),
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Control values and the selection they drive
// ---------------------------------------------------------------------------

/// A raw value delivered by a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Text(String),
    Range([f64; 2]),
}

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("control '{control}' does not accept {got:?}")]
    KindMismatch { control: ControlId, got: ControlValue },
}

/// Current values of both input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// `ALL` sites and the full payload range of the data.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::full(dataset),
        }
    }

    /// Apply a raw value delivered by `control`.
    ///
    /// Site strings are not validated against the known sites; a stray name
    /// just filters everything out downstream.
    pub fn apply(&mut self, control: ControlId, value: ControlValue) -> Result<(), ControlError> {
        match (control, value) {
            (ControlId::SiteDropdown, ControlValue::Text(text)) => {
                self.site = SiteSelection::from_value(&text);
                Ok(())
            }
            (ControlId::PayloadSlider, ControlValue::Range([low, high])) => {
                self.payload_range = PayloadRange::new(low, high);
                Ok(())
            }
            (control, got) => Err(ControlError::KindMismatch { control, got }),
        }
    }
}

// ---------------------------------------------------------------------------
// Control declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// The launch site selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDropdown {
    pub options: Vec<DropdownOption>,
    pub default: SiteSelection,
    pub placeholder: &'static str,
    pub searchable: bool,
}

impl SiteDropdown {
    pub fn declare() -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(KNOWN_SITES.iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        Self {
            options,
            default: SiteSelection::All,
            placeholder: "Select a Launch Site here",
            searchable: true,
        }
    }

    /// Label shown for a selection; unknown values show their raw string.
    pub fn label_for(&self, selection: &SiteSelection) -> String {
        self.options
            .iter()
            .find(|opt| opt.value == selection.as_value())
            .map(|opt| opt.label.clone())
            .unwrap_or_else(|| selection.as_value().to_string())
    }

    /// Options whose label contains `query` (case-insensitive).
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a DropdownOption> + 'a {
        let query = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(move |opt| query.is_empty() || opt.label.to_lowercase().contains(&query))
    }
}

pub const PAYLOAD_STEP: f64 = 1000.0;
pub const PAYLOAD_MARK_INTERVAL: f64 = 10000.0;

/// The payload mass range selector.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub default: PayloadRange,
}

impl PayloadSlider {
    pub fn declare(dataset: &LaunchDataset) -> Self {
        let min = dataset.min_payload().floor();
        let max = dataset.max_payload().ceil();

        let mut marks = Vec::new();
        let mut mark = min;
        while mark <= dataset.max_payload() {
            marks.push(mark);
            mark += PAYLOAD_MARK_INTERVAL;
        }

        Self {
            min,
            max,
            step: PAYLOAD_STEP,
            marks,
            default: PayloadRange::full(dataset),
        }
    }

    /// Clamp both handles into bounds and keep `low <= high`.
    pub fn normalize(&self, low: f64, high: f64) -> PayloadRange {
        let low = low.clamp(self.min, self.max);
        let high = high.clamp(self.min, self.max);
        if low <= high {
            PayloadRange::new(low, high)
        } else {
            PayloadRange::new(high, low)
        }
    }
}

/// Every control and output the dashboard declares.
#[derive(Debug, Clone)]
pub struct ControlRegistry {
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
    pub outputs: [OutputId; 3],
}

impl ControlRegistry {
    pub fn declare(dataset: &LaunchDataset) -> Self {
        Self {
            site_dropdown: SiteDropdown::declare(),
            payload_slider: PayloadSlider::declare(dataset),
            outputs: [
                OutputId::SuccessPieChart,
                OutputId::SuccessPayloadScatterChart,
                OutputId::PayloadRangeOutput,
            ],
        }
    }

    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            site: self.site_dropdown.default.clone(),
            payload_range: self.payload_slider.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::{mixed_launches, record};

    #[test]
    fn identifiers_round_trip() {
        for id in [ControlId::SiteDropdown, ControlId::PayloadSlider] {
            assert_eq!(id.as_str().parse::<ControlId>(), Ok(id));
        }
        for id in [
            OutputId::SuccessPieChart,
            OutputId::SuccessPayloadScatterChart,
            OutputId::PayloadRangeOutput,
        ] {
            assert_eq!(id.to_string().parse::<OutputId>(), Ok(id));
        }
        assert_eq!(
            "site-picker".parse::<ControlId>(),
            Err(UnknownId("site-picker".to_string()))
        );
    }

    #[test]
    fn dropdown_has_all_plus_known_sites() {
        let dropdown = SiteDropdown::declare();
        let values: Vec<&str> = dropdown.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["ALL", "CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(dropdown.options[0].label, "All Sites");
        assert_eq!(dropdown.default, SiteSelection::All);
        assert_eq!(dropdown.label_for(&SiteSelection::All), "All Sites");
    }

    #[test]
    fn dropdown_search_is_case_insensitive() {
        let dropdown = SiteDropdown::declare();
        let hits: Vec<&str> = dropdown.search("ccafs").map(|o| o.value.as_str()).collect();
        assert_eq!(hits, vec!["CCAFS LC-40", "CCAFS SLC-40"]);
        assert_eq!(dropdown.search("  ").count(), 5);
        assert_eq!(dropdown.search("mars").count(), 0);
    }

    #[test]
    fn slider_bounds_marks_and_default() {
        let ds = crate::data::model::LaunchDataset::from_records(vec![
            record("KSC LC-39A", 250.7, "FT", 1),
            record("KSC LC-39A", 25600.2, "B5", 1),
        ]);
        let slider = PayloadSlider::declare(&ds);

        assert_eq!(slider.min, 250.0);
        assert_eq!(slider.max, 25601.0);
        assert_eq!(slider.step, 1000.0);
        assert_eq!(slider.marks, vec![250.0, 10250.0, 20250.0]);
        assert_eq!(slider.default, PayloadRange::new(250.7, 25600.2));
    }

    #[test]
    fn slider_normalize_clamps_and_orders() {
        let slider = PayloadSlider::declare(&mixed_launches());
        assert_eq!(slider.normalize(-10.0, 20000.0), PayloadRange::new(0.0, 9600.0));
        assert_eq!(slider.normalize(7000.0, 2000.0), PayloadRange::new(2000.0, 7000.0));
    }

    #[test]
    fn apply_routes_values_by_control() {
        let ds = mixed_launches();
        let mut sel = SelectionState::initial(&ds);
        assert_eq!(sel, ControlRegistry::declare(&ds).default_selection());

        sel.apply(ControlId::SiteDropdown, ControlValue::Text("KSC LC-39A".into()))
            .unwrap();
        assert_eq!(sel.site, SiteSelection::Site("KSC LC-39A".into()));

        sel.apply(ControlId::PayloadSlider, ControlValue::Range([1000.0, 4000.0]))
            .unwrap();
        assert_eq!(sel.payload_range, PayloadRange::new(1000.0, 4000.0));

        let err = sel
            .apply(ControlId::PayloadSlider, ControlValue::Text("ALL".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ControlError::KindMismatch { control: ControlId::PayloadSlider, .. }
        ));
        assert_eq!(sel.payload_range, PayloadRange::new(1000.0, 4000.0));
    }
}
