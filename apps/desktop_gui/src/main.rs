mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_startup_config, CliArgs};
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

const APP_NAME: &str = "Ad Creative Optimizer";

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let startup = load_startup_config(&args)?;
    tracing::info!(
        platform = %startup.platform,
        endpoint_prefilled = !startup.endpoint.is_empty(),
        "starting ad optimizer panel"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    let form = startup.into_configuration();
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, form)))),
    )
    .map_err(|err| anyhow!("failed to run desktop panel: {err}"))
}
