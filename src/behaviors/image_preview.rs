//! Image preview for file uploads.
//!
//! The input's `data-preview` names the id of the element that receives the
//! chosen file as a data URL. No type or size checks are made here; the
//! server validates uploads.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, File, FileReader, HtmlImageElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    for el in dom::select_all(doc, &config.file_input_selector)? {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let doc = doc.clone();
        let target = input.clone();
        dom::listen(&input, "change", move |_| {
            let Some(preview_id) = target.get_attribute("data-preview") else {
                return;
            };
            let Some(file) = target.files().and_then(|files| files.get(0)) else {
                return;
            };
            let doc = doc.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_data_url(&file).await {
                    Ok(url) => show_preview(&doc, &preview_id, &url),
                    Err(e) => log::warn!("image preview failed: {e}"),
                }
            });
        })?;
    }
    Ok(())
}

fn show_preview(doc: &Document, preview_id: &str, url: &str) {
    let Some(preview) = doc.get_element_by_id(preview_id) else {
        return;
    };
    match preview.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.set_src(url),
        None => {
            let _ = preview.set_attribute("src", url);
        }
    }
    dom::set_visible(&preview, true);
}

/// Read `file` into a `data:` URL.
async fn read_data_url(file: &File) -> Result<String, PageError> {
    let reader = FileReader::new()?;
    let (tx, rx) = oneshot::channel::<Result<String, PageError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(Event)>::new(move |_| {
            let result = reader
                .result()
                .map_err(PageError::from)
                .and_then(|v| {
                    v.as_string()
                        .ok_or_else(|| PageError::Js("reader result is not a string".to_owned()))
                });
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(PageError::Js("file read failed".to_owned())));
            }
        })
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;

    let result = rx
        .await
        .unwrap_or_else(|_| Err(PageError::Js("file read abandoned".to_owned())));
    reader.set_onload(None);
    reader.set_onerror(None);
    result
}
