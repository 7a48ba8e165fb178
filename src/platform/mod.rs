// src/platform/mod.rs - Platform abstraction for storage and HTTP transport

//! The panel runs in two environments: the browser (wasm32) and a desktop
//! shell. Everything that touches the host lives behind these providers so
//! the API client and session store stay platform-agnostic.

use crate::error::Result;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Key-value persistence for the session token/user and the language
/// preference. Synchronous on purpose: the 401 handler must clear the token
/// before the redirect, and both backends (localStorage, a small JSON file)
/// are synchronous anyway.
pub trait StorageProvider {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One outbound HTTP request, already fully assembled by the API client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport. Futures are not `Send` on wasm (fetch resolves on the JS
/// event loop), hence the split attribute.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait HttpProvider {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Creates the providers for the current platform. Infallible: a host
/// without persistent storage gets the in-memory fallback and the session
/// simply does not survive a restart.
pub fn create_providers() -> Providers {
    #[cfg(not(target_arch = "wasm32"))]
    return native::create_providers();

    #[cfg(target_arch = "wasm32")]
    return web::create_providers();
}

pub struct Providers {
    pub storage: std::sync::Arc<dyn StorageProvider>,
    pub http: std::sync::Arc<dyn HttpProvider>,
}

/// Fallback storage when the platform store is unavailable; also used by
/// tests that need a `StorageProvider` without touching the filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| crate::error::Error::storage(key, "storage lock poisoned"))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| crate::error::Error::storage(key, "storage lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| crate::error::Error::storage(key, "storage lock poisoned"))?
            .remove(key);
        Ok(())
    }
}

/// Performs a full navigation to the login route after a 401. In the
/// browser this replaces the document; the desktop shell relies on the
/// route guard reacting to the cleared session instead.
pub fn hard_navigate_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get("language").unwrap(), None);
        storage.set("language", "de").unwrap();
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("de"));
        storage.remove("language").unwrap();
        assert_eq!(storage.get("language").unwrap(), None);
    }
}
