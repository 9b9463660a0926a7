//! Helpers other page scripts call through `window.LocalLink`.
//!
//! The same functions are also exported from the wasm module under their
//! camelCase names for scripts that import it directly.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::behaviors::notifications;
use crate::config::PageConfig;
use crate::error::PageError;
use crate::format;

/// Global the helpers are published under.
pub const NAMESPACE: &str = "LocalLink";

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    format::format_currency(amount)
}

/// Accepts a date string, epoch milliseconds, or a `Date`.
///
/// # Errors
///
/// Throws a `RangeError` when the value is not a valid date.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> Result<String, JsValue> {
    let formatted = if let Some(millis) = value.as_f64() {
        format::format_timestamp_ms(millis)
    } else if let Some(raw) = value.as_string() {
        format::format_date(&raw)
    } else if let Some(date) = value.dyn_ref::<js_sys::Date>() {
        format::format_timestamp_ms(date.get_time())
    } else {
        None
    };
    formatted.ok_or_else(|| js_sys::RangeError::new("Invalid time value").into())
}

/// Best-effort desktop notification; a third `type` argument is ignored.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(title: JsValue, message: JsValue) {
    notify(&title, &message, &PageConfig::default().notification_icon);
}

fn notify(title: &JsValue, message: &JsValue, icon: &str) {
    let title = title.as_string().unwrap_or_default();
    let message = message.as_string().unwrap_or_default();
    notifications::show(&title, &message, icon);
}

/// Install the helpers as `window.LocalLink`.
pub fn publish(window: &web_sys::Window, config: &PageConfig) -> Result<(), PageError> {
    let namespace = js_sys::Object::new();
    let icon = config.notification_icon.clone();

    let currency = Closure::<dyn Fn(f64) -> String>::new(format_currency);
    let date = Closure::<dyn Fn(JsValue) -> Result<String, JsValue>>::new(format_date);
    let notification = Closure::<dyn Fn(JsValue, JsValue)>::new(move |title, message| {
        notify(&title, &message, &icon);
    });

    js_sys::Reflect::set(&namespace, &"formatCurrency".into(), &currency.into_js_value())?;
    js_sys::Reflect::set(&namespace, &"formatDate".into(), &date.into_js_value())?;
    js_sys::Reflect::set(
        &namespace,
        &"showNotification".into(),
        &notification.into_js_value(),
    )?;
    js_sys::Reflect::set(window, &NAMESPACE.into(), &namespace)?;
    Ok(())
}
