use wasm_bindgen::prelude::*;

use crate::domain::career::CANDLES;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Installs logging, checks the dataset and mounts the page
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    #[cfg(debug_assertions)]
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    #[cfg(not(debug_assertions))]
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_production());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    if let Err(e) = domain::career::validate_dataset(CANDLES) {
        log_warn!(LogComponent::Domain("Dataset"), "{}", e);
    }

    log_info!(LogComponent::Presentation("Initialize"), "career chart ready: {} candles", CANDLES.len());

    #[cfg(not(feature = "logic-only"))]
    leptos::mount_to_body(app::App);
}
