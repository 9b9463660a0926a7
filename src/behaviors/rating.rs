//! Star rating picker.
//!
//! A star's rank comes from its `data-rating`; highlighting follows document
//! order, so the first `rank` stars light up.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use super::pricing::parse_int_prefix;

pub const LIT_CLASS: &str = "text-warning";

/// Parse a `data-rating` value into a rank of at least one.
pub fn parse_rank(raw: Option<&str>) -> Option<u32> {
    let value = parse_int_prefix(raw?);
    if !value.is_finite() || value < 1.0 || value > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(value as u32)
}

/// Whether the star at `position` (0-based, document order) is lit.
pub fn is_lit(position: usize, rank: u32) -> bool {
    u32::try_from(position).map_or(false, |p| p < rank)
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use std::rc::Rc;

    use crate::dom;

    let stars = Rc::new(dom::select_all(doc, &config.rating_star_selector)?);
    for star in stars.iter() {
        let clicked = star.clone();
        let stars = Rc::clone(&stars);
        let doc = doc.clone();
        let input_selector = config.rating_input_selector.clone();
        dom::listen(star, "click", move |_| {
            let raw = clicked.get_attribute("data-rating");
            let Some(rank) = parse_rank(raw.as_deref()) else {
                log::warn!("ignoring star with rating {raw:?}");
                return;
            };
            if let Ok(Some(input)) = dom::select_one(&doc, &input_selector) {
                dom::set_value(&input, &rank.to_string());
            }
            for (position, s) in stars.iter().enumerate() {
                if is_lit(position, rank) {
                    dom::add_class(s, LIT_CLASS);
                } else {
                    dom::remove_class(s, LIT_CLASS);
                }
            }
        })?;
    }
    Ok(())
}
