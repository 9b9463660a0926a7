//! "Use my location" buttons.
//!
//! Each button's callbacks capture that button, so with several location
//! controls on a page the success label lands on the one that was clicked.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

pub const LOCATED_LABEL: &str = r#"<i class="fas fa-check"></i> Location Detected"#;

pub const SUCCESS_CLASS: &str = "btn-success";

pub const LOOKUP_FAILED: &str = "Unable to get your location. Please enter manually.";

pub const UNSUPPORTED: &str = "Geolocation is not supported by this browser.";

/// Log line for a detected position.
pub fn describe(latitude: f64, longitude: f64) -> String {
    format!("Current location: {latitude} {longitude}")
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use crate::dom;

    let window = dom::window()?;
    for button in dom::select_all(doc, &config.location_button_selector)? {
        let window = window.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |_| locate(&window, &target))?;
    }
    Ok(())
}

#[cfg(feature = "browser")]
fn locate(window: &web_sys::Window, button: &web_sys::Element) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::dom;

    let navigator = window.navigator();
    if !dom::has_property(&navigator, "geolocation") {
        let _ = window.alert_with_message(UNSUPPORTED);
        return;
    }
    let geolocation = match navigator.geolocation() {
        Ok(geolocation) => geolocation,
        Err(e) => {
            dom::report("geolocation unavailable", e);
            let _ = window.alert_with_message(UNSUPPORTED);
            return;
        }
    };

    let button = button.clone();
    let on_success = Closure::once_into_js(move |position: JsValue| {
        match coordinates(&position) {
            Some((lat, lng)) => log::info!("{}", describe(lat, lng)),
            None => log::warn!("position without coordinates"),
        }
        button.set_inner_html(LOCATED_LABEL);
        dom::add_class(&button, SUCCESS_CLASS);
    });
    let alert_window = window.clone();
    let on_error = Closure::once_into_js(move |error: JsValue| {
        let message = dom::string_property(&error, "message").unwrap_or_default();
        log::error!("Error getting location: {message}");
        let _ = alert_window.alert_with_message(LOOKUP_FAILED);
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        dom::report("geolocation request failed", e);
    }
}

#[cfg(feature = "browser")]
fn coordinates(position: &wasm_bindgen::JsValue) -> Option<(f64, f64)> {
    let coords = js_sys::Reflect::get(position, &"coords".into()).ok()?;
    let lat = js_sys::Reflect::get(&coords, &"latitude".into()).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&coords, &"longitude".into()).ok()?.as_f64()?;
    Some((lat, lng))
}
