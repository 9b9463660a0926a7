//! Form draft persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auto-saving forms keep a draft per form id: written on every input,
//! restored on load, removed on submit. Storage sits behind [`DraftStore`] so
//! the lifecycle runs against `localStorage` in the browser and against
//! [`MemoryStore`] in tests or when `localStorage` is unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PageError;

/// Key-value store holding serialized drafts.
pub trait DraftStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
    fn remove(&self, key: &str);
}

impl<S: DraftStore + ?Sized> DraftStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store; lives as long as the page.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DraftStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
#[cfg(feature = "browser")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "browser")]
impl LocalStorage {
    pub fn open(window: &web_sys::Window) -> Result<Self, PageError> {
        let storage = window
            .local_storage()?
            .ok_or(PageError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "browser")]
impl DraftStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::warn!("failed to remove {key}: {}", PageError::from(e));
        }
    }
}

/// Field name to value for one form, serialized as a flat JSON object.
///
/// Fields keep the order they were first seen in, so the stored object lists
/// them in form order; a repeated name updates the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    fields: Vec<(String, String)>,
}

impl Draft {
    /// Build from `(name, value)` pairs; a repeated name keeps its last value.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut draft = Self::default();
        for (name, value) in entries {
            draft.insert(name.into(), value.into());
        }
        draft
    }

    pub fn insert(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Draft {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for Draft {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DraftVisitor;

        impl<'de> Visitor<'de> for DraftVisitor {
            type Value = Draft;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of field names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Draft, A::Error> {
                let mut draft = Draft::default();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    draft.insert(name, value);
                }
                Ok(draft)
            }
        }

        deserializer.deserialize_map(DraftVisitor)
    }
}

/// Draft lifecycle for auto-saving forms.
pub struct AutoSave<S> {
    store: S,
    prefix: String,
}

impl<S: DraftStore> AutoSave<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, form_id: &str) -> String {
        format!("{}{form_id}", self.prefix)
    }

    /// Load the saved draft. A corrupt entry is logged and treated as absent.
    pub fn restore(&self, form_id: &str) -> Option<Draft> {
        let key = self.key(form_id);
        let raw = self.store.get(&key)?;
        match Draft::parse(&raw) {
            Ok(draft) => Some(draft),
            Err(e) => {
                log::warn!("ignoring saved draft {key}: {e}");
                None
            }
        }
    }

    pub fn save(&self, form_id: &str, draft: &Draft) -> Result<(), PageError> {
        self.store.set(&self.key(form_id), &draft.to_json()?)
    }

    pub fn discard(&self, form_id: &str) {
        self.store.remove(&self.key(form_id));
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Whether an input event from an element with this tag name should save.
pub fn is_tracked_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Selector matching form controls named `name`, quoted for CSS.
pub fn name_selector(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("[name=\"{escaped}\"]")
}
