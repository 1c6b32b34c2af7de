mod app;
mod color;
mod config;
mod data;
mod error;
mod panel;
mod quotes;
mod showcase;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::DashboardApp;
use clap::Parser;
use config::DashboardConfig;
use eframe::egui;
use quotes::fetch::HttpFetcher;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "bay-dashboard", version, about = "Interactive demo dashboard")]
struct Cli {
    /// TOML configuration file (defaults to ./bay-dashboard.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::load(cli.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::info!("Starting with config {:?}", config);

    let fetcher = HttpFetcher::new(config.crypto.timeout()).context("creating HTTP client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bay Dashboard – HCI demos",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render png/jpg from file:// URIs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(AppState::new(config), Box::new(fetcher))))
        }),
    )
    .map_err(|e| anyhow!("running the UI failed: {e}"))
}
