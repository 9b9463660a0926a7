//! Page behavior initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load. Each behavior scans for its own selectors and
//! installs listeners; a behavior whose markup is absent is a no-op.
//!
//! ERROR HANDLING
//! ==============
//! A failing installer is logged and skipped so the remaining behaviors still
//! install. Bootstrap-backed behaviors are skipped as a group when the
//! `bootstrap` global is missing.

use web_sys::Document;

use crate::behaviors::*;
use crate::bootstrap;
use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::exports;

type Installer = fn(&Document, &PageConfig) -> Result<(), PageError>;

/// Behaviors that need `window.bootstrap`.
const BOOTSTRAP_BEHAVIORS: [(&str, Installer); 2] = [
    ("tooltips", tooltips::install),
    ("alert dismiss", alerts::install),
];

const BEHAVIORS: [(&str, Installer); 13] = [
    ("anchor scroll", anchor_scroll::install),
    ("form validation", validation::install),
    ("pricing calculator", pricing::install),
    ("image preview", image_preview::install),
    ("live search", search::install),
    ("category filter", category_filter::install),
    ("star rating", rating::install),
    ("delete confirmation", delete_confirm::install),
    ("clipboard copy", clipboard::install),
    ("notification permission", notifications::install),
    ("chat toggle", chat_toggle::install),
    ("geolocation", geolocation::install),
    ("auto-save", auto_save::install),
];

/// Run [`init`] now, or on `DOMContentLoaded` if the document is still loading.
pub fn on_ready(config: PageConfig) -> Result<(), PageError> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        init(&doc, &config);
        return Ok(());
    }
    let mut pending = Some(config);
    let ready_doc = doc.clone();
    dom::listen(&doc, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            init(&ready_doc, &config);
        }
    })
}

/// Install every behavior and publish the helper namespace.
pub fn init(doc: &Document, config: &PageConfig) {
    if bootstrap::available() {
        run(doc, config, &BOOTSTRAP_BEHAVIORS);
    } else {
        log::warn!("bootstrap not loaded; tooltips, popovers and alert dismiss disabled");
    }
    run(doc, config, &BEHAVIORS);

    match dom::window() {
        Ok(window) => {
            if let Err(e) = exports::publish(&window, config) {
                log::warn!("{} helpers not published: {e}", exports::NAMESPACE);
            }
        }
        Err(e) => log::warn!("{} helpers not published: {e}", exports::NAMESPACE),
    }

    log::info!("LocalLink app initialized successfully");
}

fn run(doc: &Document, config: &PageConfig, behaviors: &[(&str, Installer)]) {
    for (name, install) in behaviors {
        if let Err(e) = install(doc, config) {
            log::warn!("{name} not installed: {e}");
        }
    }
}
