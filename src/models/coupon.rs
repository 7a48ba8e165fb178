// src/models/coupon.rs - Coupons and the allowed-email list codec

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: u64,
    pub code: String,
    pub discount_percent: f64,
    pub is_active: bool,
    /// None means the coupon is open to every customer.
    #[serde(default)]
    pub allowed_emails: Option<Vec<String>>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Parses the comma-delimited editing representation back into the wire
/// array. An empty or whitespace-only string means "no restriction" and
/// serializes as null.
pub fn parse_email_list(input: &str) -> Option<Vec<String>> {
    let emails: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if emails.is_empty() {
        None
    } else {
        Some(emails)
    }
}

/// Joins the wire array into the comma-delimited editing representation.
pub fn format_email_list(emails: &Option<Vec<String>>) -> String {
    match emails {
        Some(list) => list.join(", "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email_list() {
        assert_eq!(
            parse_email_list("a@x.com, b@x.com"),
            Some(vec!["a@x.com".to_string(), "b@x.com".to_string()])
        );
        assert_eq!(parse_email_list(""), None);
        assert_eq!(parse_email_list("   "), None);
        assert_eq!(parse_email_list(",,a@x.com,,"), Some(vec!["a@x.com".to_string()]));
    }

    #[test]
    fn test_email_list_roundtrip() {
        let emails = Some(vec!["a@x.com".to_string(), "b@x.com".to_string()]);
        assert_eq!(parse_email_list(&format_email_list(&emails)), emails);
        assert_eq!(format_email_list(&None), "");
    }

    #[test]
    fn test_none_serializes_as_null() {
        let coupon = Coupon {
            id: 1,
            code: "WELCOME10".into(),
            discount_percent: 10.0,
            is_active: true,
            allowed_emails: parse_email_list(""),
            usage_limit: None,
            expires_at: None,
        };
        let value = serde_json::to_value(&coupon).unwrap();
        assert!(value["allowed_emails"].is_null());
    }
}
