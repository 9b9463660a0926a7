//! Category filter buttons.

#[cfg(test)]
#[path = "category_filter_test.rs"]
mod category_filter_test;

/// Filter value that shows every item.
pub const FILTER_ALL: &str = "all";

pub const ACTIVE_CLASS: &str = "active";

/// Whether an item tagged `category` stays visible under `filter`.
///
/// A button without a filter value shows exactly the untagged items.
pub fn item_visible(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(FILTER_ALL) || filter == category
}

/// Active state for `count` buttons after the one at `clicked` is pressed.
///
/// Exactly one flag is set; an out-of-range index clears them all.
pub fn active_flags(count: usize, clicked: usize) -> Vec<bool> {
    (0..count).map(|i| i == clicked).collect()
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use std::rc::Rc;

    use crate::dom;

    let buttons = Rc::new(dom::select_all(doc, &config.filter_button_selector)?);
    let items = Rc::new(dom::select_all(doc, &config.filterable_item_selector)?);

    for (index, button) in buttons.iter().enumerate() {
        let clicked = button.clone();
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        dom::listen(button, "click", move |_| {
            let filter = clicked.get_attribute("data-filter");
            let flags = active_flags(buttons.len(), index);
            for (other, active) in buttons.iter().zip(flags) {
                if active {
                    dom::add_class(other, ACTIVE_CLASS);
                } else {
                    dom::remove_class(other, ACTIVE_CLASS);
                }
            }
            for item in items.iter() {
                let category = item.get_attribute("data-category");
                dom::set_visible(item, item_visible(filter.as_deref(), category.as_deref()));
            }
        })?;
    }
    Ok(())
}
