// src/platform/native.rs - Desktop implementations (file storage, reqwest)

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::platform::{
    HttpProvider, HttpRequest, HttpResponse, MemoryStorage, Providers, StorageProvider,
};

pub fn create_providers() -> Providers {
    let storage: Arc<dyn StorageProvider> = match FileStorage::new() {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "config directory unavailable; session will not persist");
            Arc::new(MemoryStorage::default())
        }
    };
    Providers {
        storage,
        http: Arc::new(ReqwestHttp::new()),
    }
}

/// File-per-key storage under the user config directory. Holds the session
/// JSON and the language preference, so the directory stays tiny.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::storage("config_dir", "no user config directory"))?
            .join("sellerdesk");
        Self::with_dir(dir)
    }

    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants ("session", "language"); no escaping needed.
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageProvider for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// reqwest-backed transport for the desktop shell.
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HttpProvider for ReqwestHttp {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| Error::network(&request.url, e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::network(&request.url, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(&request.url, e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::with_dir(dir.path().join("store")).unwrap();

        assert_eq!(storage.get("session").unwrap(), None);
        storage.set("session", "{\"token\":\"abc\"}").unwrap();
        assert_eq!(
            storage.get("session").unwrap().as_deref(),
            Some("{\"token\":\"abc\"}")
        );

        storage.remove("session").unwrap();
        assert_eq!(storage.get("session").unwrap(), None);
        // Removing a missing key is not an error.
        storage.remove("session").unwrap();
    }
}
