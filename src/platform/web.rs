// src/platform/web.rs - Browser implementations (localStorage, fetch)

use std::sync::Arc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Storage};

use crate::error::{Error, Result};
use crate::platform::{HttpProvider, HttpRequest, HttpResponse, Providers, StorageProvider};

pub fn create_providers() -> Providers {
    Providers {
        storage: Arc::new(WebStorage),
        http: Arc::new(FetchHttp),
    }
}

/// localStorage-backed persistence.
pub struct WebStorage;

impl WebStorage {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::storage("localStorage", "localStorage not available"))
    }
}

impl StorageProvider for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::storage(key, format!("Failed to get item: {:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::storage(key, format!("Failed to set item: {:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("Failed to remove item: {:?}", e)))
    }
}

/// Fetch API transport.
pub struct FetchHttp;

#[async_trait::async_trait(?Send)]
impl HttpProvider for FetchHttp {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        let window = web_sys::window()
            .ok_or_else(|| Error::network(&request.url, "no window object"))?;

        let opts = RequestInit::new();
        opts.set_method(&request.method);

        if let Some(body) = &request.body {
            let array = js_sys::Uint8Array::from(body.as_slice());
            opts.set_body(&array.into());
        }

        let req = Request::new_with_str_and_init(&request.url, &opts).map_err(|e| {
            Error::network(&request.url, format!("Failed to create request: {:?}", e))
        })?;

        for (key, value) in &request.headers {
            req.headers().set(key, value).map_err(|e| {
                Error::network(&request.url, format!("Failed to set header: {:?}", e))
            })?;
        }

        let response_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| Error::network(&request.url, format!("Fetch failed: {:?}", e)))?;

        let response: Response = response_value
            .dyn_into()
            .map_err(|_| Error::network(&request.url, "fetch did not return a Response"))?;
        let status = response.status();

        let buffer = response
            .array_buffer()
            .map_err(|e| Error::network(&request.url, format!("No response body: {:?}", e)))?;
        let buffer = JsFuture::from(buffer).await.map_err(|e| {
            Error::network(&request.url, format!("Failed to read response body: {:?}", e))
        })?;

        Ok(HttpResponse {
            status,
            body: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }
}
