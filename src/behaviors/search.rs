//! Live search over listing cards.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Case-insensitive substring match; an empty query matches every card.
pub fn card_matches(card_text: &str, query: &str) -> bool {
    card_text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use crate::dom;

    let Some(input) = dom::select_one(doc, &config.search_input_selector)? else {
        log::debug!("search field not on this page");
        return Ok(());
    };
    let field = input.clone();
    let doc = doc.clone();
    let card_selector = config.card_selector.clone();
    dom::listen(&input, "input", move |_| {
        let query = dom::string_property(&field, "value").unwrap_or_default();
        let cards = match dom::select_all(&doc, &card_selector) {
            Ok(cards) => cards,
            Err(e) => {
                log::warn!("search skipped: {e}");
                return;
            }
        };
        for card in cards {
            let text = card.text_content().unwrap_or_default();
            dom::set_visible(&card, card_matches(&text, &query));
        }
    })
}
