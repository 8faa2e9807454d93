use std::collections::BTreeMap;
use std::sync::Arc;

use crate::callbacks::{CallbackRegistry, OutputValue};
use crate::color::ColorMap;
use crate::controls::{ControlId, ControlRegistry, ControlValue, OutputId, SelectionState};
use crate::data::model::LaunchDataset;
use crate::figure::{Figure, PieFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<LaunchDataset>,

    /// Declared controls and outputs.
    pub controls: ControlRegistry,

    /// Output → handler table.
    pub callbacks: CallbackRegistry,

    /// Current control values.
    pub selection: SelectionState,

    /// Latest value of every output region.
    pub outputs: BTreeMap<OutputId, OutputValue>,

    /// Booster category colours for the scatter chart.
    pub booster_colors: ColorMap,

    /// Outcome class colours for the pie chart.
    pub class_colors: ColorMap,

    /// Text typed into the searchable site dropdown.
    pub site_query: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let controls = ControlRegistry::declare(&dataset);
        let callbacks = CallbackRegistry::standard();
        let selection = controls.default_selection();
        let outputs = callbacks.render_all(&dataset, &selection).into_iter().collect();

        Self {
            booster_colors: ColorMap::new(dataset.booster_categories().iter().cloned()),
            class_colors: ColorMap::new(["0", "1"]),
            dataset,
            controls,
            callbacks,
            selection,
            outputs,
            site_query: String::new(),
            status_message: None,
        }
    }

    /// Feed a control change through the selection and the callbacks it
    /// triggers. Returns whether anything was recomputed.
    pub fn on_control_change(&mut self, control: ControlId, value: ControlValue) -> bool {
        let before = self.selection.clone();
        if let Err(e) = self.selection.apply(control, value) {
            log::warn!("ignoring control value: {e}");
            self.status_message = Some(e.to_string());
            return false;
        }
        if self.selection == before {
            return false;
        }

        for (output, value) in self.callbacks.dispatch(control, &self.dataset, &self.selection) {
            self.outputs.insert(output, value);
        }
        self.status_message = None;
        true
    }

    /// Select a site by its dropdown value.
    pub fn set_site(&mut self, value: &str) -> bool {
        self.on_control_change(ControlId::SiteDropdown, ControlValue::Text(value.to_string()))
    }

    /// Move the payload handles; the slider keeps them ordered and in bounds.
    pub fn set_payload_range(&mut self, low: f64, high: f64) -> bool {
        let range = self.controls.payload_slider.normalize(low, high);
        self.on_control_change(
            ControlId::PayloadSlider,
            ControlValue::Range([range.low, range.high]),
        )
    }

    pub fn pie(&self) -> Option<&PieFigure> {
        match self.outputs.get(&OutputId::SuccessPieChart) {
            Some(OutputValue::Figure(Figure::Pie(pie))) => Some(pie),
            _ => None,
        }
    }

    pub fn scatter(&self) -> Option<&ScatterFigure> {
        match self
            .outputs
            .get(&OutputId::SuccessPayloadScatterChart)
        {
            Some(OutputValue::Figure(Figure::Scatter(scatter))) => Some(scatter),
            _ => None,
        }
    }

    pub fn range_text(&self) -> &str {
        match self.outputs.get(&OutputId::PayloadRangeOutput) {
            Some(OutputValue::Text(text)) => text,
            _ => "",
        }
    }
}
