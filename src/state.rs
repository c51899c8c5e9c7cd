// =============================================================================
// Folio Web - Content Store
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Storage Backends
// 3. Content Store
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::ContentApi;

/// Storage key for the persisted edit-mode flag.
const EDIT_MODE_KEY: &str = "edit-mode";

// -----------------------------------------------------------------------------
// 2. Storage Backends
// -----------------------------------------------------------------------------

/// Raw key/value persistence for site content. Writes are best-effort;
/// a failed write is logged, never surfaced. `Send + Sync` so the store
/// can live in Leptos context and reactive closures.
pub trait ContentStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: &Value);
}

/// Browser localStorage backend.
pub struct BrowserStorage;

impl ContentStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<Value> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &Value) {
        use gloo_storage::Storage;
        if let Err(e) = gloo_storage::LocalStorage::set(key, value) {
            log::warn!("localStorage write failed for '{}': {}", key, e);
        }
    }
}

/// In-memory backend for native builds and tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.clone());
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Content Store
// -----------------------------------------------------------------------------

/// The content store provided via Leptos context: local persistence plus
/// durable file commit, with the global edit-mode flag.
#[derive(Clone)]
pub struct ContentStore {
    storage: Arc<dyn ContentStorage>,
    edit_mode: RwSignal<bool>,

    /// Content API base URL.
    api_url: String,
}

impl ContentStore {
    /// Create a store over an explicit backend.
    pub fn new(storage: Arc<dyn ContentStorage>, api_url: impl Into<String>) -> Self {
        // Restore the edit-mode flag so the mode survives reloads.
        let edit_mode = storage
            .get(EDIT_MODE_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Self {
            storage,
            edit_mode: RwSignal::new(edit_mode),
            api_url: api_url.into(),
        }
    }

    /// Create a store over the platform backend: localStorage in the
    /// browser, in-memory elsewhere.
    pub fn for_platform(api_url: impl Into<String>) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Arc::new(BrowserStorage), api_url)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(Arc::new(MemoryStorage::new()), api_url)
        }
    }

    /// Read a stored value. Absent or malformed data reads as `None`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.storage.get(key)?;
        serde_json::from_value(value).ok()
    }

    /// Read a stored value as raw JSON.
    pub fn read_raw(&self, key: &str) -> Option<Value> {
        self.storage.get(key)
    }

    /// Persist a value synchronously within the caller's control flow.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(v) => self.storage.set(key, &v),
            Err(e) => log::error!("failed to serialize '{}': {}", key, e),
        }
    }

    /// Reactive read of the global edit-mode flag.
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    /// Set the edit-mode flag and persist it.
    pub fn set_edit_mode(&self, enabled: bool) {
        self.edit_mode.set(enabled);
        self.storage.set(EDIT_MODE_KEY, &Value::Bool(enabled));
    }

    /// Toggle the edit-mode flag.
    pub fn toggle_edit_mode(&self) {
        self.set_edit_mode(!self.edit_mode.get_untracked());
    }

    /// Push a section durably to the content API, fire-and-forget. The
    /// result is not surfaced to the caller; failures are logged only.
    pub fn commit<T: Serialize>(&self, section: &str, subsection: &str, value: &T) {
        let payload = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                log::error!("failed to serialize commit for {}/{}: {}", section, subsection, e);
                return;
            }
        };

        let api = ContentApi::new(self.api_url.clone());
        let section = section.to_string();
        let subsection = subsection.to_string();
        spawn_local(async move {
            if let Err(e) = api.save_section(&section, &subsection, &payload).await {
                log::warn!("content commit failed for {}/{}: {}", section, subsection, e);
            }
        });
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FooterConfig, FOOTER_INFO_KEY};

    fn memory_store() -> ContentStore {
        ContentStore::new(Arc::new(MemoryStorage::new()), "http://localhost:3000")
    }

    #[test]
    fn store_is_usable_from_context_and_callbacks() {
        // Leptos context values and Callback closures require Send + Sync.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentStore>();
    }

    #[test]
    fn read_of_missing_key_is_none() {
        let store = memory_store();
        assert!(store.read::<FooterConfig>(FOOTER_INFO_KEY).is_none());
        assert!(store.read_raw(FOOTER_INFO_KEY).is_none());
    }

    #[test]
    fn write_then_read_reflects_single_field_change() {
        let store = memory_store();
        let config = FooterConfig {
            phone: "02-555-0100".to_string(),
            ..FooterConfig::default()
        };
        store.write(FOOTER_INFO_KEY, &config);

        let read: FooterConfig = store.read(FOOTER_INFO_KEY).unwrap();
        assert_eq!(read.phone, "02-555-0100");
        assert_eq!(
            FooterConfig { phone: FooterConfig::default().phone, ..read },
            FooterConfig::default()
        );
    }

    #[test]
    fn malformed_stored_value_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set(FOOTER_INFO_KEY, &Value::String("not a config".into()));
        let store = ContentStore::new(Arc::new(storage), "http://localhost:3000");
        assert!(store.read::<FooterConfig>(FOOTER_INFO_KEY).is_none());
    }

    #[test]
    fn edit_mode_persists_across_store_instances() {
        let storage = MemoryStorage::new();
        let store = ContentStore::new(Arc::new(storage.clone()), "http://localhost:3000");
        assert!(!store.is_edit_mode());

        store.set_edit_mode(true);
        let restored = ContentStore::new(Arc::new(storage), "http://localhost:3000");
        assert!(restored.is_edit_mode());
    }
}
