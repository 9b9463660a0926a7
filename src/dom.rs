//! Thin web-sys helpers used by the behavior installers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::MissingDocument)
}

/// All elements matching `selector`, in document order.
pub fn select_all(doc: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn select_one(doc: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    Ok(doc.query_selector(selector)?)
}

/// Attach `handler` for `event` on `target` for the life of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Set inline `display` to `block` or `none`.
pub fn set_visible(el: &Element, visible: bool) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let value = if visible { "block" } else { "none" };
    if let Err(e) = el.style().set_property("display", value) {
        log::warn!("failed to set display: {}", PageError::from(e));
    }
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

/// Whether `name` is a property of `target`, i.e. the capability exists.
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &name.into()).unwrap_or(false)
}

/// Read a string property, `None` when absent or not a string.
pub fn string_property(target: &JsValue, name: &str) -> Option<String> {
    js_sys::Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Assign a string `value` property (inputs, textareas, selects).
pub fn set_value(el: &Element, value: &str) {
    if let Err(e) = js_sys::Reflect::set(el, &"value".into(), &value.into()) {
        log::warn!("failed to set value: {}", PageError::from(e));
    }
}

/// Log a failed async JS call without propagating it.
pub fn report(context: &str, err: JsValue) {
    log::warn!("{context}: {}", PageError::from(err));
}
