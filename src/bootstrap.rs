//! Bindings to the Bootstrap widgets the templates load globally.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type Tooltip;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Tooltip")]
    pub fn new(el: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Popover)]
    pub type Popover;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Popover")]
    pub fn new(el: &Element) -> Result<Popover, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    pub type Alert;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Alert")]
    pub fn new(el: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Alert")]
    pub fn close(this: &Alert) -> Result<(), JsValue>;
}

/// Whether the `bootstrap` global is loaded.
pub fn available() -> bool {
    crate::dom::has_property(&js_sys::global(), "bootstrap")
}
