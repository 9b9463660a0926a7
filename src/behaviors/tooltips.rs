//! Bootstrap tooltip and popover activation.

use web_sys::Document;

use crate::bootstrap::{Popover, Tooltip};
use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    for el in dom::select_all(doc, &config.tooltip_selector)? {
        if let Err(e) = Tooltip::new(&el) {
            dom::report("tooltip init failed", e);
        }
    }
    for el in dom::select_all(doc, &config.popover_selector)? {
        if let Err(e) = Popover::new(&el) {
            dom::report("popover init failed", e);
        }
    }
    Ok(())
}
