//! # locallink
//!
//! Browser behaviors for the LocalLink site, compiled to WebAssembly.
//!
//! The server renders plain Bootstrap markup; this crate attaches the
//! interactive parts once the page is ready: tooltips, smooth anchors, form
//! validation, alert dismissal, the booking price calculator, upload
//! previews, card search and category filters, the star rating picker,
//! delete confirmation, clipboard buttons, notification permission, the chat
//! toggle, geolocation, and form draft auto-save.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`behaviors`] | One module per behavior: pure rule plus browser installer |
//! | [`storage`] | Draft store trait, in-memory store, auto-save lifecycle |
//! | [`format`] | Currency, fixed-point, and date formatting |
//! | [`config`] | Selectors, delays, and log level with host overrides |
//! | [`error`] | [`error::PageError`] |
//! | `page` | Initializer that runs every installer (`browser` only) |
//! | `exports` | `window.LocalLink` helpers (`browser` only) |
//!
//! Everything touching the DOM is behind the `browser` feature; without it
//! the crate builds natively and the pure rules can be tested with
//! `cargo test`.

pub mod behaviors;
pub mod config;
pub mod error;
pub mod format;
pub mod storage;

#[cfg(feature = "browser")]
mod bootstrap;
#[cfg(feature = "browser")]
mod dom;
#[cfg(feature = "browser")]
pub mod exports;
#[cfg(feature = "browser")]
pub mod page;

/// Module entry point: set up panic reporting and logging, load config, and
/// install behaviors once the document is ready.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = dom::window().and_then(|w| config::PageConfig::from_window(&w));
    let level = loaded
        .as_ref()
        .map_or(log::Level::Info, config::PageConfig::log_level);
    let _ = console_log::init_with_level(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{e}; using default config");
        config::PageConfig::default()
    });
    if let Err(e) = page::on_ready(config) {
        log::warn!("page behaviors not installed: {e}");
    }
}
