use serde::Serialize;

use crate::controls::{ControlId, OutputId, SelectionState};
use crate::data::filter::{outcome_distribution, payload_outcome, range_label};
use crate::data::model::LaunchDataset;
use crate::figure::{Figure, PieFigure, ScatterFigure};

// ---------------------------------------------------------------------------
// Handler-registration table
// ---------------------------------------------------------------------------

/// What a callback produces for its output region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Figure(Figure),
    Text(String),
}

pub type Handler = fn(&LaunchDataset, &SelectionState) -> OutputValue;

/// One output bound to the controls that trigger it.
#[derive(Clone)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
    pub handler: Handler,
}

impl Callback {
    pub fn listens_to(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

fn update_pie_chart(dataset: &LaunchDataset, selection: &SelectionState) -> OutputValue {
    let dist = outcome_distribution(dataset, &selection.site);
    OutputValue::Figure(Figure::Pie(PieFigure::from(&dist)))
}

fn update_scatter_chart(dataset: &LaunchDataset, selection: &SelectionState) -> OutputValue {
    let out = payload_outcome(dataset, &selection.site, selection.payload_range);
    OutputValue::Figure(Figure::Scatter(ScatterFigure::from(&out)))
}

fn display_payload_range(_dataset: &LaunchDataset, selection: &SelectionState) -> OutputValue {
    OutputValue::Text(range_label(selection.payload_range))
}

pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// The dashboard's three callbacks.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            OutputId::SuccessPieChart,
            &[ControlId::SiteDropdown],
            update_pie_chart,
        );
        registry.register(
            OutputId::SuccessPayloadScatterChart,
            &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            update_scatter_chart,
        );
        registry.register(
            OutputId::PayloadRangeOutput,
            &[ControlId::PayloadSlider],
            display_payload_range,
        );
        registry
    }

    /// Bind `handler` to `output`. A later registration for the same output
    /// replaces the earlier one.
    pub fn register(&mut self, output: OutputId, inputs: &'static [ControlId], handler: Handler) {
        self.callbacks.retain(|cb| cb.output != output);
        self.callbacks.push(Callback {
            output,
            inputs,
            handler,
        });
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Outputs that must be recomputed when `control` changes.
    pub fn subscribers(&self, control: ControlId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|cb| cb.listens_to(control))
            .map(|cb| cb.output)
            .collect()
    }

    /// Run every handler subscribed to `control`.
    pub fn dispatch(
        &self,
        control: ControlId,
        dataset: &LaunchDataset,
        selection: &SelectionState,
    ) -> Vec<(OutputId, OutputValue)> {
        let updates: Vec<_> = self
            .callbacks
            .iter()
            .filter(|cb| cb.listens_to(control))
            .map(|cb| (cb.output, (cb.handler)(dataset, selection)))
            .collect();
        log::debug!(
            "{control} changed → {:?}",
            updates.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>()
        );
        updates
    }

    /// Run every handler once, for the initial paint.
    pub fn render_all(
        &self,
        dataset: &LaunchDataset,
        selection: &SelectionState,
    ) -> Vec<(OutputId, OutputValue)> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, (cb.handler)(dataset, selection)))
            .collect()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{ControlValue, SelectionState};
    use crate::data::filter::{PayloadRange, SiteSelection};
    use crate::data::model::fixtures::three_launches;

    fn text(value: &OutputValue) -> &str {
        match value {
            OutputValue::Text(s) => s,
            other => panic!("expected text, got {other:?}"),
        }
    }

    fn figure(value: &OutputValue) -> &Figure {
        match value {
            OutputValue::Figure(f) => f,
            other => panic!("expected figure, got {other:?}"),
        }
    }

    #[test]
    fn subscriptions_match_the_wiring() {
        let registry = CallbackRegistry::standard();
        assert_eq!(
            registry.subscribers(ControlId::SiteDropdown),
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            registry.subscribers(ControlId::PayloadSlider),
            vec![OutputId::SuccessPayloadScatterChart, OutputId::PayloadRangeOutput]
        );
    }

    #[test]
    fn render_all_fills_every_output() {
        let ds = three_launches();
        let sel = SelectionState::initial(&ds);
        let outputs = CallbackRegistry::standard().render_all(&ds, &sel);

        let ids: Vec<OutputId> = outputs.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![
                OutputId::SuccessPieChart,
                OutputId::SuccessPayloadScatterChart,
                OutputId::PayloadRangeOutput,
            ]
        );
        assert_eq!(
            text(&outputs[2].1),
            "Selected Payload Range: 3000 kg to 9000 kg"
        );
        match figure(&outputs[1].1) {
            Figure::Scatter(scatter) => assert_eq!(scatter.points.len(), 3),
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn slider_change_only_recomputes_its_subscribers() {
        let ds = three_launches();
        let mut sel = SelectionState::initial(&ds);
        sel.apply(ControlId::PayloadSlider, ControlValue::Range([1000.0, 7000.0]))
            .unwrap();

        let updates = CallbackRegistry::standard().dispatch(ControlId::PayloadSlider, &ds, &sel);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].0, OutputId::SuccessPayloadScatterChart);
        assert_eq!(
            text(&updates[1].1),
            "Selected Payload Range: 1000 kg to 7000 kg"
        );
    }

    #[test]
    fn site_change_retitles_both_charts() {
        let ds = three_launches();
        let sel = SelectionState {
            site: SiteSelection::Site("KSC LC-39A".into()),
            payload_range: PayloadRange::new(0.0, 10000.0),
        };

        let updates = CallbackRegistry::standard().dispatch(ControlId::SiteDropdown, &ds, &sel);
        assert_eq!(figure(&updates[0].1).title(), "Success Launches for KSC LC-39A");
        assert_eq!(
            figure(&updates[1].1).title(),
            "Payload vs. Outcome for KSC LC-39A"
        );
    }

    #[test]
    fn dispatch_is_repeatable() {
        let ds = three_launches();
        let sel = SelectionState::initial(&ds);
        let registry = CallbackRegistry::standard();
        assert_eq!(
            registry.dispatch(ControlId::SiteDropdown, &ds, &sel),
            registry.dispatch(ControlId::SiteDropdown, &ds, &sel)
        );
    }

    #[test]
    fn re_registering_an_output_replaces_it() {
        fn fixed(_: &LaunchDataset, _: &SelectionState) -> OutputValue {
            OutputValue::Text("fixed".into())
        }

        let mut registry = CallbackRegistry::standard();
        registry.register(OutputId::PayloadRangeOutput, &[ControlId::SiteDropdown], fixed);

        assert_eq!(registry.callbacks().len(), 3);
        assert!(registry
            .subscribers(ControlId::SiteDropdown)
            .contains(&OutputId::PayloadRangeOutput));
        assert!(!registry
            .subscribers(ControlId::PayloadSlider)
            .contains(&OutputId::PayloadRangeOutput));
    }
}
