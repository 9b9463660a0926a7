//! Page behaviors, one module each.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every behavior is independent: it scans the document once for its
//! selectors, attaches listeners, and does nothing when nothing matches.
//! Pure rules (price math, search and filter predicates, rating ranks) live
//! alongside the browser installers so they can be tested natively.

pub mod anchor_scroll;
pub mod category_filter;
pub mod clipboard;
pub mod geolocation;
pub mod pricing;
pub mod rating;
pub mod search;
pub mod validation;

#[cfg(feature = "browser")]
pub mod alerts;
#[cfg(feature = "browser")]
pub mod auto_save;
#[cfg(feature = "browser")]
pub mod chat_toggle;
#[cfg(feature = "browser")]
pub mod delete_confirm;
#[cfg(feature = "browser")]
pub mod image_preview;
#[cfg(feature = "browser")]
pub mod notifications;
#[cfg(feature = "browser")]
pub mod tooltips;
