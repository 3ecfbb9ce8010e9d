//! tallycalc - a desktop calculator
//!
//! Shows the running expression above the entry and evaluates chains of
//! binary operators as they are typed.

mod app;
mod keys;
mod theme;

use app::TallyApp;
use eframe::NativeOptions;
use tallycore::Config;
use theme::CalcTheme;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "using default settings");
            Config::default()
        }
    };
    if !Config::path().exists() {
        if let Err(e) = config.save() {
            warn!(error = %e, "could not write default settings");
        }
    }
    info!(settings = %Config::path().display(), max_len = config.entry_max_len, "starting tallycalc");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([240.0, 360.0])
            .with_title("tally"),
        ..Default::default()
    };

    eframe::run_native(
        "tally",
        options,
        Box::new(move |cc| {
            CalcTheme::from_config(&config).apply(&cc.egui_ctx);
            Box::new(TallyApp::new(cc, &config))
        }),
    )
}
