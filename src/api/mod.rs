// src/api/mod.rs - HTTP client adapter for the seller REST API

//! A single call surface over the platform transport. Every request gets
//! `Accept: application/json`, an `Accept-Language`, and a bearer token when
//! a session exists. Any 401 clears the persisted session and the session
//! signal and forces navigation to the login route, regardless of which
//! screen made the call.

use std::sync::Arc;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::models::Session;
use crate::platform::{self, HttpProvider, HttpRequest, StorageProvider};

pub mod endpoints;
pub mod envelope;
pub mod multipart;

pub use envelope::{PageMeta, Paginated};
pub use multipart::{FilePart, MultipartForm};

/// Storage key for the persisted session JSON.
pub const SESSION_KEY: &str = "session";
/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Joins the configured base URL with an endpoint path.
fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Assembles the headers every request carries.
fn build_headers(
    token: Option<&str>,
    language: &str,
    content_type: Option<&str>,
) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("Accept-Language".to_string(), language.to_string()),
    ];
    if let Some(token) = token {
        headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
    }
    if let Some(content_type) = content_type {
        headers.push(("Content-Type".to_string(), content_type.to_string()));
    }
    headers
}

/// Transport plus the global 401 rule, kept apart from the signal plumbing
/// so a stub transport can drive it in tests. A 401 removes the persisted
/// session before any caller sees the error; a dead token is never replayed
/// on the next launch.
async fn dispatch(
    http: &dyn HttpProvider,
    storage: &dyn StorageProvider,
    request: HttpRequest,
) -> Result<platform::HttpResponse> {
    let response = http.request(request).await?;
    if response.status == 401 {
        warn!("received 401; clearing session and redirecting to login");
        if let Err(e) = storage.remove(SESSION_KEY) {
            warn!(error = %e, "failed to clear persisted session");
        }
        return Err(Error::unauthorized());
    }
    Ok(response)
}

#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpProvider>,
    storage: Arc<dyn StorageProvider>,
    config: AppConfig,
    /// The in-memory session; shared with the route guard and the header.
    session: Signal<Option<Session>>,
    language: Signal<String>,
}

impl ApiClient {
    pub fn new(
        http: Arc<dyn HttpProvider>,
        storage: Arc<dyn StorageProvider>,
        config: AppConfig,
        session: Signal<Option<Session>>,
        language: Signal<String>,
    ) -> Self {
        Self {
            http,
            storage,
            config,
            session,
            language,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Persists a fresh session (login success).
    pub fn store_session(&self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
                    warn!(error = %e, "failed to persist session");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize session"),
        }
        let mut signal = self.session;
        signal.set(Some(session));
    }

    /// Persists the language preference and applies it to every later
    /// request's `Accept-Language`.
    pub fn set_language(&self, language: &str) {
        if let Err(e) = self.storage.set(LANGUAGE_KEY, language) {
            warn!(error = %e, "failed to persist language preference");
        }
        let mut signal = self.language;
        signal.set(language.to_string());
    }

    /// Clears the persisted and in-memory session (logout or 401).
    pub fn clear_session(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!(error = %e, "failed to clear persisted session");
        }
        let mut signal = self.session;
        signal.set(None);
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Vec<u8>>,
        content_type: Option<&str>,
    ) -> Result<platform::HttpResponse> {
        let url = join_url(&self.config.api_base_url, path);
        let token = self
            .session
            .peek()
            .as_ref()
            .map(|session| session.token.clone());
        let language = self.language.peek().clone();
        debug!(%method, %path, "api request");

        let result = dispatch(
            self.http.as_ref(),
            self.storage.as_ref(),
            HttpRequest {
                method: method.to_string(),
                url,
                headers: build_headers(token.as_deref(), &language, content_type),
                body,
            },
        )
        .await;

        // The in-memory half of the 401 rule: drop the session signal so
        // the route guard reacts, then leave the authenticated area.
        if matches!(&result, Err(e) if e.is_unauthorized()) {
            let mut signal = self.session;
            signal.set(None);
            platform::hard_navigate_to_login();
        }
        result
    }

    fn json_body<B: Serialize>(body: &B) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(body)?)
    }

    /// GET returning one entity from an item envelope.
    pub async fn get_item<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send("GET", path, None, None).await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        envelope::parse_item(&response.body)
    }

    /// GET returning a paginated collection from a list envelope.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Paginated<T>> {
        let response = self.send("GET", path, None, None).await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        envelope::parse_list(&response.body)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send("POST", path, Some(Self::json_body(body)?), Some("application/json"))
            .await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        envelope::parse_item(&response.body)
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send("PUT", path, Some(Self::json_body(body)?), Some("application/json"))
            .await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        envelope::parse_item(&response.body)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.send("DELETE", path, None, None).await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        Ok(())
    }

    /// POST a multipart body; used whenever any file field is populated.
    /// Update semantics go through `form.method_override("PUT")`.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<T> {
        let content_type = form.content_type();
        let response = self
            .send("POST", path, Some(form.into_body()), Some(&content_type))
            .await?;
        if !response.is_success() {
            return Err(envelope::parse_error(response.status, path, &response.body));
        }
        envelope::parse_item(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.shop.test/api/v1/", "/seller/products"),
            "https://api.shop.test/api/v1/seller/products"
        );
        assert_eq!(join_url("/api/v1", "/public/colors"), "/api/v1/public/colors");
    }

    #[test]
    fn test_headers_with_token() {
        let headers = build_headers(Some("tok_abc"), "de", None);
        assert!(headers.contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(headers.contains(&("Accept-Language".to_string(), "de".to_string())));
        assert!(headers.contains(&("Authorization".to_string(), "Bearer tok_abc".to_string())));
    }

    #[test]
    fn test_headers_anonymous() {
        let headers = build_headers(None, "en", Some("application/json"));
        assert!(!headers.iter().any(|(k, _)| k == "Authorization"));
        assert!(headers.contains(&("Content-Type".to_string(), "application/json".to_string())));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod dispatch_tests {
    use super::*;
    use crate::platform::{HttpResponse, MemoryStorage};

    struct StubHttp {
        status: u16,
    }

    #[async_trait::async_trait]
    impl HttpProvider for StubHttp {
        async fn request(&self, _request: HttpRequest) -> Result<HttpResponse> {
            Ok(HttpResponse {
                status: self.status,
                body: b"{}".to_vec(),
            })
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: "GET".to_string(),
            url: "/api/v1/seller/orders".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_unauthorized_response_clears_persisted_session() {
        let storage = MemoryStorage::default();
        storage
            .set(SESSION_KEY, "{\"token\":\"tok_dead\"}")
            .unwrap();

        let result = dispatch(&StubHttp { status: 401 }, &storage, request()).await;

        assert!(matches!(result, Err(e) if e.is_unauthorized()));
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_success_passes_through_and_keeps_session() {
        let storage = MemoryStorage::default();
        storage
            .set(SESSION_KEY, "{\"token\":\"tok_live\"}")
            .unwrap();

        let response = dispatch(&StubHttp { status: 200 }, &storage, request())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(storage.get(SESSION_KEY).unwrap().is_some());
    }
}
