//! Browser host: wires the `util` behavior onto the live page.
//!
//! The wasm start function runs once per page load. Each wiring step is
//! independent; a step that fails is logged and the remaining steps still run.

mod element;
mod exports;
mod forms;
mod listeners;
mod observer;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::SiteError;

pub use element::DomElement;

type WireStep = fn(&Document, &SiteConfig) -> Result<(), SiteError>;

const WIRE_STEPS: [(&str, WireStep); 9] = [
    ("card-reveal", observer::wire_card_reveal),
    ("card-stagger", observer::wire_card_stagger),
    ("scroll-spy", listeners::wire_scroll_spy),
    ("parallax", listeners::wire_parallax),
    ("forms", forms::wire_forms),
    ("lazy-images", observer::wire_lazy_images),
    ("active-page-link", listeners::wire_active_page_link),
    ("current-year", listeners::wire_current_year),
    ("whatsapp-clicks", listeners::wire_whatsapp_clicks),
];

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    let document = match element::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("page wiring skipped: {err}");
            return;
        }
    };
    let config = load_config(&document);
    wire_page(&document, &config);
}

/// Read overrides from `<script id="site-config" type="application/json">`.
fn load_config(document: &Document) -> SiteConfig {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        }
    }
}

fn wire_page(document: &Document, config: &SiteConfig) {
    let mut wired = 0;
    for (name, step) in WIRE_STEPS {
        match step(document, config) {
            Ok(()) => wired += 1,
            Err(err) => log::warn!("{name} wiring failed: {err}"),
        }
    }
    log::info!("visionsphere: {wired}/{} features wired", WIRE_STEPS.len());
}
