//! Alert auto-dismiss.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::bootstrap::Alert;
use crate::config::PageConfig;
use crate::dom;
use crate::error::PageError;

/// Close every alert on the page once the dismiss delay elapses.
///
/// Alerts are collected when the timer fires, not at install time.
pub fn install(doc: &Document, config: &PageConfig) -> Result<(), PageError> {
    let doc = doc.clone();
    let selector = config.alert_selector.clone();
    Timeout::new(config.alert_dismiss_ms, move || {
        let alerts = match dom::select_all(&doc, &selector) {
            Ok(alerts) => alerts,
            Err(e) => {
                log::warn!("alert dismiss skipped: {e}");
                return;
            }
        };
        for el in alerts {
            match Alert::new(&el) {
                Ok(alert) => {
                    if let Err(e) = alert.close() {
                        dom::report("alert close failed", e);
                    }
                }
                Err(e) => dom::report("alert init failed", e),
            }
        }
    })
    .forget();
    Ok(())
}
