//! Error type shared by the page glue.
//!
//! ERROR HANDLING
//! ==============
//! Installers return `Result<_, PageError>` so setup code can use `?`. Event
//! handlers have nowhere to propagate to; they log the error and carry on.
//! Nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("draft encoding failed: {0}")]
    Draft(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(text)
    }
}
