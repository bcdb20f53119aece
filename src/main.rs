#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::SourceConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global data-source selection, set from command line
static SOURCE_CONFIG: OnceLock<SourceConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

/// Get the selected data-source configuration (defaults to the mock)
pub fn get_source_config() -> SourceConfig {
    SOURCE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - personal portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio - project gallery and contact form")]
struct Args {
    /// Data directory for preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Backend base URL (e.g. http://localhost:5000/api).
    /// When omitted the app runs against the in-memory mock.
    #[arg(short, long)]
    api_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    });
    let _ = DATA_DIR.set(data_dir.clone());

    let source_config = match args.api_url {
        Some(base_url) => SourceConfig::Remote { base_url },
        None => SourceConfig::Mock,
    };
    let _ = SOURCE_CONFIG.set(source_config.clone());

    tracing::info!(
        "Starting portfolio with data dir {:?}, source {:?}",
        data_dir,
        source_config
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
