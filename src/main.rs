//! List Editor Frontend Entry Point

mod models;
mod error;
mod config;
mod validation;
mod list;
mod dialog;
mod edit;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    rolling_logger::init(LoggerConfig {
        level: rolling_logger::parse_level(&config.log_level).unwrap_or(LoggerConfig::default().level),
        capacity: config.log_capacity,
        console: true,
    });
    if let Err(err) = &loaded {
        tracing::warn!(%err, "using default editor config");
    }
    tracing::info!(title = %config.title, "list editor starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
