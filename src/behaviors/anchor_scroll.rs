//! Smooth scrolling for same-page anchor links.

#[cfg(test)]
#[path = "anchor_scroll_test.rs"]
mod anchor_scroll_test;

/// Element id an in-page `href` points at.
///
/// `None` for a bare `#` or an href that is not a fragment.
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use crate::dom;

    for anchor in dom::select_all(doc, &config.anchor_selector)? {
        let doc = doc.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            // The default jump is cancelled even when the target is missing.
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = target_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        })?;
    }
    Ok(())
}
