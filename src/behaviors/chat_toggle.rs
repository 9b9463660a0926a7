//! Chat panel show/hide.

use web_sys::Document;

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

pub const HIDDEN_CLASS: &str = "d-none";

pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let (Some(toggle), Some(panel)) = (
        dom::select_one(doc, &config.chat_toggle_selector)?,
        dom::select_one(doc, &config.chat_window_selector)?,
    ) else {
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_| dom::toggle_class(&panel, HIDDEN_CLASS))
}
