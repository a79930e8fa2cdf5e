//! CRM Dashboard Frontend Entry Point

mod config;
mod logger;
mod format;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = config::load_config();
    logger::init_logger(logger::parse_level(&config.log_level));
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    log::info!("starting CRM dashboard (forms: {:?})", config.form_policy());

    mount_to_body(move || view! { <App config=config /> });
}
