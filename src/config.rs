//! Page configuration: selectors, storage prefix, timer delays, log level.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the markup the LocalLink templates render. A host page can
//! override any field by assigning a plain object to `window.LOCALLINK_CONFIG`
//! before the module starts; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Global the host page may set to override defaults.
pub const CONFIG_GLOBAL: &str = "LOCALLINK_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub tooltip_selector: String,
    pub popover_selector: String,
    pub anchor_selector: String,
    pub validation_selector: String,
    pub alert_selector: String,
    pub hourly_rate_selector: String,
    pub duration_selector: String,
    pub total_cost_selector: String,
    pub file_input_selector: String,
    pub search_input_selector: String,
    pub card_selector: String,
    pub filter_button_selector: String,
    pub filterable_item_selector: String,
    pub rating_star_selector: String,
    pub rating_input_selector: String,
    pub delete_button_selector: String,
    pub copy_button_selector: String,
    pub chat_toggle_selector: String,
    pub chat_window_selector: String,
    pub location_button_selector: String,
    pub auto_save_selector: String,
    /// Prefix for draft keys; the form id is appended.
    pub draft_key_prefix: String,
    pub alert_dismiss_ms: u32,
    pub copy_revert_ms: u32,
    pub notification_icon: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_owned(),
            popover_selector: r#"[data-bs-toggle="popover"]"#.to_owned(),
            anchor_selector: r##"a[href^="#"]"##.to_owned(),
            validation_selector: ".needs-validation".to_owned(),
            alert_selector: ".alert".to_owned(),
            hourly_rate_selector: "#hourly_rate".to_owned(),
            duration_selector: "#duration".to_owned(),
            total_cost_selector: "#total_cost".to_owned(),
            file_input_selector: r#"input[type="file"]"#.to_owned(),
            search_input_selector: "#search_locals".to_owned(),
            card_selector: ".local-card".to_owned(),
            filter_button_selector: ".filter-btn".to_owned(),
            filterable_item_selector: ".filterable-item".to_owned(),
            rating_star_selector: ".rating-star".to_owned(),
            rating_input_selector: "#rating".to_owned(),
            delete_button_selector: ".delete-btn".to_owned(),
            copy_button_selector: ".copy-btn".to_owned(),
            chat_toggle_selector: "#chat-toggle".to_owned(),
            chat_window_selector: "#chat-window".to_owned(),
            location_button_selector: "#get-location".to_owned(),
            auto_save_selector: ".auto-save".to_owned(),
            draft_key_prefix: "form_".to_owned(),
            alert_dismiss_ms: 5_000,
            copy_revert_ms: 2_000,
            notification_icon: "/static/images/logo.png".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse `log_level`, falling back to `Info` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }

    /// Read overrides from `window.LOCALLINK_CONFIG`.
    ///
    /// A missing global yields the defaults; an undecodable one is reported
    /// as [`PageError::Config`](crate::error::PageError::Config).
    #[cfg(feature = "browser")]
    pub fn from_window(window: &web_sys::Window) -> Result<Self, crate::error::PageError> {
        let raw = js_sys::Reflect::get(window, &CONFIG_GLOBAL.into())?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw)
            .map_err(|e| crate::error::PageError::Config(e.to_string()))
    }
}
