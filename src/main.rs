mod backend;
mod frontend;

use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::route::Route;
use crate::frontend::components::common::ToastViewport;
use crate::frontend::services::{use_session_provider, use_toaster_provider};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use log::{info, warn};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured filter
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.filter.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        warn!("Falling back to default configuration: {e}");
    }

    let window = &config.window;
    let size = LogicalSize::new(window.width, window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(window.title.as_str())
                .with_inner_size(size)
                .with_resizable(window.resizable),
        )
        .with_menu(None);

    info!("Starting {}", window.title);
    let _ = CONFIG.set(config);

    LaunchBuilder::new().with_cfg(desktop).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let config = CONFIG.get_or_init(AppConfig::default);
    use_session_provider(&config.storage);
    use_toaster_provider(config.ui.toast_duration_ms);

    rsx! {
        style { dangerous_inner_html: CssLoader::get_combined() }
        Router::<Route> {}
        ToastViewport {}
    }
}
