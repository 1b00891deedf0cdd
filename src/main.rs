mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::infra::config::AppConfig;
use crate::platform::desktop::dirs::{default_config_path, default_webview_data_dir};

fn main() {
    init_tracing();

    let config = load_config().unwrap_or_else(|err| {
        warn!(error = %err, "falling back to default configuration");
        AppConfig::default()
    });
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> Result<AppConfig> {
    let path = default_config_path()?;
    Ok(AppConfig::load(&path)?)
}
