mod app;
mod config;
mod editor;
mod error;
mod loader;
mod routes;
mod store_models;
mod update_door;
mod utils;

#[cfg(test)]
mod tests;

use app::App;
use config::{read_config, Config};
use log::LevelFilter;
use sycamore::prelude::*;
use utils::init_logging;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match read_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if let Err(e) = init_logging(level) {
        web_sys::console::error_1(&e.to_string().into());
    }
    if let Some(e) = config_error {
        log::warn!("{}, running with defaults", e);
    }
    log::info!("Doors API at {}", config.api_uri);

    sycamore::render(move |cx| {
        provide_context(cx, config);
        view! { cx,
            App {}
        }
    });
}
