use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

use launch_dash::app::LaunchDashApp;
use launch_dash::config::Args;
use launch_dash::data;
use launch_dash::state::AppState;
use launch_dash::ui;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = match data::loader::load_file(&args.data) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {}: {e}", args.data.display());
            return Err(e).with_context(|| format!("loading {}", args.data.display()));
        }
    };
    log::info!(
        "Loaded {} launches from {} (payload {} – {} kg, {} booster categories)",
        dataset.len(),
        args.data.display(),
        dataset.min_payload(),
        dataset.max_payload(),
        dataset.booster_categories().len()
    );

    let state = AppState::new(Arc::new(dataset));

    if args.print_outputs {
        let outputs: BTreeMap<&str, _> = state
            .controls
            .outputs
            .iter()
            .filter_map(|id| Some((id.as_str(), state.outputs.get(id)?)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&outputs).context("serializing outputs")?
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::DASHBOARD_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("window closed with error: {e}"))
}
