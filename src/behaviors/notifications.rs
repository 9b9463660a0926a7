//! Desktop notification permission and display.

use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Notification, NotificationOptions, NotificationPermission};

use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

fn supported(window: &web_sys::Window) -> bool {
    dom::has_property(window, "Notification")
}

/// Ask for permission once, only while the user has not decided.
pub fn install(_doc: &Document, _config: &PageConfig) -> Result<(), PageError> {
    let window = dom::window()?;
    if !supported(&window) || Notification::permission() != NotificationPermission::Default {
        return Ok(());
    }
    let promise = Notification::request_permission()?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            dom::report("notification permission request failed", e);
        }
    });
    Ok(())
}

/// Show a notification if permission was granted; otherwise do nothing.
pub fn show(title: &str, message: &str, icon: &str) {
    let Ok(window) = dom::window() else {
        return;
    };
    if !supported(&window) || Notification::permission() != NotificationPermission::Granted {
        return;
    }
    let opts = NotificationOptions::new();
    opts.set_body(message);
    opts.set_icon(icon);
    if let Err(e) = Notification::new_with_options(title, &opts) {
        dom::report("notification failed", e);
    }
}
