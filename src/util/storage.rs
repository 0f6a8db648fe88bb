//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage can be unavailable (privacy modes, sandboxed iframes). Reads then
//! report no preference and writes are logged and dropped, so the theme still
//! works for the current page view.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::PreferenceStore;

/// Single `localStorage` key.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; {} not persisted", self.key);
                return;
            };
            if let Err(e) = storage.set_item(&self.key, value) {
                log::warn!("failed to persist {}: {e:?}", self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}
