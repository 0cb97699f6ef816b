//! Summit Frontend Entry Point

mod api;
mod components;
mod config;
mod context;
mod dialog;
mod dom;
mod logging;
mod markdown;
mod models;
mod pagination;
mod store;
mod tasks;
mod theme;
mod view_model;

use config::SummitConfig;

use components::{builders_view, jobs_view, namespaces_view, summit_list, timeline, DialogController};

const SETUP_FORM_ID: &str = "setupForm";
const SETUP_SUBMIT_ID: &str = "submitButton";

/// Submit the setup form natively from its button
fn install_setup_form() -> Result<(), wasm_bindgen::JsValue> {
    let (Some(form), Some(submit)) = (
        dom::by_id_as::<web_sys::HtmlFormElement>(SETUP_FORM_ID),
        dom::by_id(SETUP_SUBMIT_ID),
    ) else {
        return Ok(());
    };
    dom::listen(&submit, "click", move |ev| {
        ev.prevent_default();
        if let Err(e) = form.submit() {
            log::error!("setup submission failed: {:?}", e);
        }
    })
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SummitConfig::load();
    logging::init(logging::parse_level(&config.log_level));
    if let Some(e) = config_error {
        log::warn!("ignoring invalid summit:config: {}", e);
    }

    if let Err(e) = theme::install() {
        log::error!("theme switcher unavailable: {:?}", e);
    }

    if let Some(list) = summit_list::mount(&config) {
        if let Err(e) = DialogController::install(list) {
            log::error!("creation dialog unavailable: {:?}", e);
        }
    }
    if let Err(e) = builders_view::mount() {
        log::error!("builders view unavailable: {:?}", e);
    }
    // The poller lives on in its timer until the first failed fetch
    jobs_view::mount(config.poll_interval_ms);
    if let Err(e) = namespaces_view::mount() {
        log::error!("namespaces view unavailable: {:?}", e);
    }
    timeline::mount(config.timeline_limit);
    if let Err(e) = install_setup_form() {
        log::error!("setup form unavailable: {:?}", e);
    }
}
