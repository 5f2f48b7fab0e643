mod app;
mod components;
mod dispatch;
mod entity;
mod state;
mod workflow;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use entity::{ApiClient, AppConfig, get_config_path, load_or_create_config};
use tracing::{error, info, warn};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let config = match load_or_create_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    if let Ok(path) = get_config_path() {
        info!("Using config {}", path.display());
    }
    info!("Backend at {}", config.api_base_url);

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot create API client: {}", e);
            std::process::exit(1);
        }
    };

    let window = config.window.unwrap_or_default().clamped();
    let window_builder = WindowBuilder::new()
        .with_title("Balance Sheet Item Types")
        .with_inner_size(LogicalSize::new(window.width as f64, window.height as f64));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(config)
        .with_context(client)
        .launch(app::App);
}
