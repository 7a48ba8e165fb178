// src/api/envelope.rs - Typed response envelopes and pagination metadata

//! Every endpoint deserializes through exactly one of these shapes, so
//! callers never branch on `data.data.items` vs `data.data` themselves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldErrors, Result};

/// `{ "data": T, "message": ... }` for single-item and action endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "data": { "items": [...], "meta": {...} } }` for list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Paginated<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based.
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    pub total: u64,
}

impl PageMeta {
    /// The "previous" control is disabled exactly on the first page.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// The "next" control is disabled exactly on the last page.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Body shape of a 422 validation response.
#[derive(Debug, Clone, Deserialize)]
struct ValidationBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: std::collections::HashMap<String, Vec<String>>,
}

pub fn parse_item<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: ItemEnvelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

pub fn parse_list<T: DeserializeOwned>(body: &[u8]) -> Result<Paginated<T>> {
    let envelope: ListEnvelope<T> = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

/// Maps a non-success response to a typed error. 422 bodies become
/// field-keyed validation errors; everything else keeps its status.
pub fn parse_error(status: u16, endpoint: &str, body: &[u8]) -> Error {
    match status {
        401 => Error::unauthorized(),
        404 => Error::not_found(endpoint),
        422 => {
            let parsed: ValidationBody = serde_json::from_slice(body).unwrap_or(ValidationBody {
                message: None,
                errors: Default::default(),
            });
            if parsed.errors.is_empty() {
                Error::http(
                    422,
                    endpoint,
                    parsed.message.unwrap_or_else(|| "Validation failed".into()),
                )
            } else {
                Error::validation(FieldErrors(parsed.errors))
            }
        }
        _ => {
            let message = serde_json::from_slice::<ValidationBody>(body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            Error::http(status, endpoint, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Thing {
        id: u64,
        name: String,
    }

    #[test]
    fn test_parse_item() {
        let body = br#"{"data":{"id":1,"name":"widget"},"message":"ok"}"#;
        let thing: Thing = parse_item(body).unwrap();
        assert_eq!(
            thing,
            Thing {
                id: 1,
                name: "widget".into()
            }
        );
    }

    #[test]
    fn test_parse_list_with_meta() {
        let body = br#"{"data":{"items":[{"id":1,"name":"a"},{"id":2,"name":"b"}],
            "meta":{"current_page":2,"last_page":5,"per_page":15,"total":68}}}"#;
        let page: Paginated<Thing> = parse_list(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.current_page, 2);
        assert!(page.meta.has_prev());
        assert!(page.meta.has_next());
    }

    #[test]
    fn test_pager_boundaries() {
        let first = PageMeta {
            current_page: 1,
            last_page: 4,
            per_page: 15,
            total: 50,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageMeta {
            current_page: 4,
            ..first.clone()
        };
        assert!(last.has_prev());
        assert!(!last.has_next());

        let only = PageMeta {
            current_page: 1,
            last_page: 1,
            per_page: 15,
            total: 3,
        };
        assert!(!only.has_prev());
        assert!(!only.has_next());
    }

    #[test]
    fn test_parse_422_into_field_errors() {
        let body = br#"{"message":"The given data was invalid.",
            "errors":{"code":["Code already in use"],"discount_percent":["Must be positive"]}}"#;
        let error = parse_error(422, "/seller/coupons", body);
        let fields = error.field_errors().expect("field errors");
        assert_eq!(fields.first("code"), Some("Code already in use"));
        assert_eq!(fields.first("discount_percent"), Some("Must be positive"));
    }

    #[test]
    fn test_parse_error_statuses() {
        assert!(parse_error(401, "/seller/orders", b"{}").is_unauthorized());
        assert!(parse_error(404, "/seller/orders/9", b"{}").is_not_found());
        let server = parse_error(500, "/seller/orders", b"not json");
        assert!(matches!(
            server.kind,
            crate::error::ErrorKind::Http { status: 500, .. }
        ));
    }
}
