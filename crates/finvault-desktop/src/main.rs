//! FinVault Desktop Application
//!
//! A personal-finance dashboard with mocked analytics and a real
//! settings/profile persistence flow.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod data;
mod format;
mod services;
mod state;
mod theme;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("finvault=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting FinVault...");

    dioxus::launch(app::App);
}
