//! Form auto-save to local storage.
//!
//! Drafts are restored when the page loads, rewritten on every edit, and
//! dropped when the form is submitted. See [`crate::storage`] for the store.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;
use crate::storage::{
    AutoSave, Draft, DraftStore, LocalStorage, MemoryStore, is_tracked_tag, name_selector,
};

pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let forms = dom::select_all(doc, &config.auto_save_selector)?;
    if forms.is_empty() {
        return Ok(());
    }
    let store: Box<dyn DraftStore> = match LocalStorage::open(&dom::window()?) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{e}; drafts kept for this page only");
            Box::new(MemoryStore::new())
        }
    };
    let autosave = Rc::new(AutoSave::new(store, config.draft_key_prefix.clone()));

    for el in forms {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let form_id = form.id();
        if let Some(draft) = autosave.restore(&form_id) {
            apply_draft(&form, &draft);
        }

        let on_input = {
            let autosave = Rc::clone(&autosave);
            let form = form.clone();
            let form_id = form_id.clone();
            move |ev: web_sys::Event| {
                let from_control = ev
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|t| is_tracked_tag(&t.tag_name()));
                if !from_control {
                    return;
                }
                let saved = collect_draft(&form).and_then(|draft| autosave.save(&form_id, &draft));
                if let Err(e) = saved {
                    log::warn!("draft not saved for form {form_id:?}: {e}");
                }
            }
        };
        dom::listen(&form, "input", on_input)?;

        let autosave = Rc::clone(&autosave);
        dom::listen(&form, "submit", move |_| autosave.discard(&form_id))?;
    }
    Ok(())
}

fn apply_draft(form: &HtmlFormElement, draft: &Draft) {
    for (name, value) in draft.iter() {
        if let Ok(Some(control)) = form.query_selector(&name_selector(name)) {
            dom::set_value(&control, value);
        }
    }
}

/// Current string-valued fields of `form`; file fields are skipped.
fn collect_draft(form: &HtmlFormElement) -> Result<Draft, PageError> {
    let data = web_sys::FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Draft::default());
    };
    let mut fields = Vec::new();
    for entry in entries {
        let pair: js_sys::Array = entry?.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(Draft::from_entries(fields))
}
