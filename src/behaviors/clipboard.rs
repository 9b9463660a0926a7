//! Copy-to-clipboard buttons.
//!
//! After a successful write the button shows a confirmation label for the
//! revert delay. The original label is parked in a data attribute so a second
//! click during the delay does not capture the confirmation as "original".

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Label shown while the confirmation is up.
pub const COPIED_LABEL: &str = r#"<i class="fas fa-check"></i> Copied!"#;

pub const SUCCESS_CLASS: &str = "btn-success";

/// Attribute holding the label to restore.
pub const ORIGINAL_LABEL_ATTR: &str = "data-original-label";

/// What a copy button shows, mirrored from the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLabel {
    pub html: String,
    /// Label parked while the confirmation is showing.
    pub parked: Option<String>,
    pub success: bool,
}

impl ButtonLabel {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            parked: None,
            success: false,
        }
    }

    /// Show the confirmation, parking the current label unless one is
    /// already parked.
    pub fn confirm(&mut self) {
        if self.parked.is_none() {
            self.parked = Some(std::mem::take(&mut self.html));
        }
        COPIED_LABEL.clone_into(&mut self.html);
        self.success = true;
    }

    /// Restore the parked label. A second revert finds nothing parked and
    /// leaves the button alone.
    pub fn revert(&mut self) {
        if let Some(original) = self.parked.take() {
            self.html = original;
            self.success = false;
        }
    }
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use crate::dom;

    let window = dom::window()?;
    for button in dom::select_all(doc, &config.copy_button_selector)? {
        let window = window.clone();
        let target = button.clone();
        let revert_ms = config.copy_revert_ms;
        dom::listen(&button, "click", move |_| {
            let Some(text) = target.get_attribute("data-copy") else {
                log::debug!("copy button without data-copy");
                return;
            };
            copy(&window, target.clone(), text, revert_ms);
        })?;
    }
    Ok(())
}

#[cfg(feature = "browser")]
fn copy(window: &web_sys::Window, button: web_sys::Element, text: String, revert_ms: u32) {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use crate::dom;

    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into()).unwrap_or_default();
    if clipboard.is_undefined() || clipboard.is_null() {
        log::warn!("clipboard API unavailable");
        return;
    }
    let promise = clipboard.unchecked_into::<web_sys::Clipboard>().write_text(&text);

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            dom::report("clipboard write failed", e);
            return;
        }
        let mut label = read_label(&button);
        label.confirm();
        write_label(&button, &label);

        Timeout::new(revert_ms, move || {
            let mut label = read_label(&button);
            label.revert();
            write_label(&button, &label);
        })
        .forget();
    });
}

#[cfg(feature = "browser")]
fn read_label(button: &web_sys::Element) -> ButtonLabel {
    ButtonLabel {
        html: button.inner_html(),
        parked: button.get_attribute(ORIGINAL_LABEL_ATTR),
        success: button.class_list().contains(SUCCESS_CLASS),
    }
}

#[cfg(feature = "browser")]
fn write_label(button: &web_sys::Element, label: &ButtonLabel) {
    use crate::dom;

    if button.inner_html() != label.html {
        button.set_inner_html(&label.html);
    }
    match &label.parked {
        Some(parked) => {
            let _ = button.set_attribute(ORIGINAL_LABEL_ATTR, parked);
        }
        None => {
            let _ = button.remove_attribute(ORIGINAL_LABEL_ATTR);
        }
    }
    if label.success {
        dom::add_class(button, SUCCESS_CLASS);
    } else {
        dom::remove_class(button, SUCCESS_CLASS);
    }
}
