//! Confirmation prompt in front of delete controls.

use web_sys::Document;

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";

pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let window = dom::window()?;
    for button in dom::select_all(doc, &config.delete_button_selector)? {
        let window = window.clone();
        dom::listen(&button, "click", move |ev| {
            // A prompt that cannot be shown counts as a refusal.
            if !window.confirm_with_message(CONFIRM_DELETE).unwrap_or(false) {
                ev.prevent_default();
            }
        })?;
    }
    Ok(())
}
