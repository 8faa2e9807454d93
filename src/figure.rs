use serde::Serialize;

use crate::data::filter::{OutcomeDistribution, PayloadOutcome};
use crate::data::model::{COL_CLASS, COL_PAYLOAD_MASS};

// ---------------------------------------------------------------------------
// Figures handed from the callbacks to the plot widgets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

impl From<&OutcomeDistribution<'_>> for PieFigure {
    fn from(dist: &OutcomeDistribution<'_>) -> Self {
        PieFigure {
            title: dist.title.clone(),
            slices: dist
                .counts
                .iter()
                .map(|(class, count)| PieSlice {
                    label: class.to_string(),
                    value: *count as f64,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Colour group (booster version category).
    pub group: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl From<&PayloadOutcome<'_>> for ScatterFigure {
    fn from(out: &PayloadOutcome<'_>) -> Self {
        ScatterFigure {
            title: out.title.clone(),
            x_label: COL_PAYLOAD_MASS.to_string(),
            y_label: COL_CLASS.to_string(),
            points: out
                .rows
                .iter()
                .map(|rec| ScatterPoint {
                    x: rec.payload_mass_kg,
                    y: rec.outcome_class.as_f64(),
                    group: rec.booster_version_category.clone(),
                    site: rec.launch_site.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    /// An empty figure still carries its title and is drawn as a blank plot.
    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Pie(pie) => pie.slices.is_empty(),
            Figure::Scatter(scatter) => scatter.points.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{outcome_distribution, payload_outcome, PayloadRange, SiteSelection};
    use crate::data::model::fixtures::three_launches;

    #[test]
    fn pie_slices_follow_class_counts() {
        let ds = three_launches();
        let pie = PieFigure::from(&outcome_distribution(&ds, &SiteSelection::All));

        assert_eq!(pie.title, "Total Success Launches for All Sites");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "0".into(), value: 1.0 },
                PieSlice { label: "1".into(), value: 2.0 },
            ]
        );
        assert_eq!(pie.total(), 3.0);
    }

    #[test]
    fn scatter_points_carry_axes_and_group() {
        let ds = three_launches();
        let out = payload_outcome(&ds, &SiteSelection::All, PayloadRange::new(4000.0, 10000.0));
        let scatter = ScatterFigure::from(&out);

        assert_eq!(scatter.x_label, "Payload Mass (kg)");
        assert_eq!(scatter.y_label, "class");
        assert_eq!(scatter.points.len(), 2);
        assert_eq!(scatter.points[1].x, 9000.0);
        assert_eq!(scatter.points[1].y, 1.0);
        assert_eq!(scatter.points[1].group, "v1.1");
    }

    #[test]
    fn empty_figures_keep_their_title() {
        let ds = three_launches();
        let site = SiteSelection::Site("CCAFS LC-40".into());
        let fig = Figure::Pie(PieFigure::from(&outcome_distribution(&ds, &site)));
        assert!(fig.is_empty());
        assert_eq!(fig.title(), "Success Launches for CCAFS LC-40");
    }

    #[test]
    fn figures_serialize_with_a_type_tag() {
        let fig = Figure::Pie(PieFigure {
            title: "t".into(),
            slices: vec![PieSlice { label: "1".into(), value: 4.0 }],
        });
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["slices"][0]["value"], 4.0);
    }
}
