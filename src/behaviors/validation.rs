//! Native form validation gate.
//!
//! Login and register forms validate themselves server-side and are left
//! alone so the two checks never fight over the same submit.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Class added to a form after its first submit attempt.
pub const VALIDATED_CLASS: &str = "was-validated";

const EXCLUDED_ACTIONS: [&str; 2] = ["login", "register"];

/// Whether a form with this `action` attribute is skipped.
pub fn is_excluded_action(action: Option<&str>) -> bool {
    action.is_some_and(|action| EXCLUDED_ACTIONS.iter().any(|needle| action.contains(needle)))
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlFormElement;

    use crate::dom;

    for el in dom::select_all(doc, &config.validation_selector)? {
        if is_excluded_action(el.get_attribute("action").as_deref()) {
            continue;
        }
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        dom::listen(&form, "submit", move |ev| {
            if !target.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            dom::add_class(&target, VALIDATED_CLASS);
        })?;
    }
    Ok(())
}
