//! Key/value backends for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the session into `localStorage`; this crate reads and
//! clears it. `MemoryStorage` stands in for the browser store in tests and
//! non-browser builds.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;

pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw entries.
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .extend(items.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl SessionStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`, resolved on each call so a store that becomes
/// available later (or is blocked by privacy settings) is handled uniformly.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(crate::error::HeaderError::StorageUnavailable)
    }

    fn failed(op: &'static str, key: &str) -> crate::error::HeaderError {
        crate::error::HeaderError::Storage { op, key: key.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?.get_item(key).map_err(|_| Self::failed("read", key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?.set_item(key, value).map_err(|_| Self::failed("write", key))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::storage()?.remove_item(key).map_err(|_| Self::failed("remove", key))
    }
}
