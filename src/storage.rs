use folio_core::{KeyValueStore, MemoryStore, SiteError, SiteResult};
use web_sys as web;

/// Browser local storage, or an in-memory map when storage is blocked.
pub struct BrowserStore {
    local: Option<web::Storage>,
    fallback: MemoryStore,
}

impl BrowserStore {
    pub fn open() -> Self {
        let local = web::window().and_then(|w| w.local_storage().ok().flatten());
        if local.is_none() {
            log::debug!("[sound] local storage unavailable, preference kept in memory");
        }
        Self {
            local,
            fallback: MemoryStore::default(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.local {
            Some(s) => s.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        match &self.local {
            Some(s) => s
                .set_item(key, value)
                .map_err(|e| SiteError::Storage(format!("{:?}", e))),
            None => self.fallback.set(key, value),
        }
    }
}
