//! Álamo Tickets Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod dates;
mod error;
mod listing;
mod models;
mod pages;
mod routes;
mod storage;
mod store;
mod toast;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    // Only fails when a logger is already installed, which keeps logging working.
    console_log::init_with_level(config.log_level).ok();
    log::info!("[APP] Starting Álamo Tickets against {}", config.api_url);
    mount_to_body(move || view! { <App config /> });
}
