// src/api/endpoints.rs - Path and query-string builders for the seller API

use crate::models::OrderStatus;

pub mod auth {
    pub const LOGIN: &str = "/seller/auth/login";
    pub const REGISTER: &str = "/seller/auth/register";
    pub const FORGOT_PASSWORD: &str = "/seller/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/seller/auth/reset-password";
    pub const VERIFY_EMAIL: &str = "/seller/auth/verify-email";
    pub const RESEND_VERIFICATION: &str = "/seller/auth/resend-verification-email";
}

pub mod products {
    pub const LIST: &str = "/seller/products";

    pub fn detail(id: u64) -> String {
        format!("/seller/products/{}", id)
    }

    pub fn status(id: u64) -> String {
        format!("/seller/products/{}/status", id)
    }

    pub fn variant_status(variant_id: u64) -> String {
        format!("/seller/products/variants/{}/status", variant_id)
    }
}

pub mod orders {
    pub const LIST: &str = "/seller/orders";
    pub const KPI: &str = "/seller/orders/kpi";

    pub fn detail(id: u64) -> String {
        format!("/seller/orders/{}", id)
    }

    pub fn status(id: u64) -> String {
        format!("/seller/orders/{}/status", id)
    }
}

pub mod inventory {
    pub const LIST: &str = "/seller/inventory";

    pub fn detail(id: u64) -> String {
        format!("/seller/inventory/{}", id)
    }
}

pub mod customers {
    pub const LIST: &str = "/seller/customers";

    pub fn detail(id: u64) -> String {
        format!("/seller/customers/{}", id)
    }

    pub fn orders(id: u64) -> String {
        format!("/seller/customers/{}/orders", id)
    }
}

pub mod promotions {
    pub const LIST: &str = "/seller/promotions";

    pub fn detail(id: u64) -> String {
        format!("/seller/promotions/{}", id)
    }
}

pub mod coupons {
    pub const LIST: &str = "/seller/coupons";

    pub fn detail(id: u64) -> String {
        format!("/seller/coupons/{}", id)
    }
}

pub mod profile {
    pub const SHOW: &str = "/seller/profile";
    pub const KYC_STATUS: &str = "/seller/profile/kyc-status";
    pub const KYC: &str = "/seller/profile/kyc";
    pub const TERMS: &str = "/seller/profile/terms";
    pub const TERMS_ACCEPT: &str = "/seller/profile/terms/accept";
}

pub mod team {
    pub const MEMBERS: &str = "/seller/team/members";
    pub const ROLES: &str = "/seller/team/roles";
    pub const PERMISSIONS: &str = "/seller/team/roles/permissions";

    pub fn member(id: u64) -> String {
        format!("/seller/team/members/{}", id)
    }

    pub fn member_status(id: u64) -> String {
        format!("/seller/team/members/{}/status", id)
    }
}

pub mod reference {
    pub const COUNTRIES: &str = "/public/countries";
    pub const CURRENCIES: &str = "/public/currencies";
    pub const CATEGORIES: &str = "/public/categories/subcategory";
    pub const BRANDS: &str = "/public/brands";
    pub const STYLES: &str = "/public/styles";
    pub const COLORS: &str = "/public/colors";
    pub const SIZES: &str = "/public/sizes";
}

/// Filter state a list page sends along with its page number. The settled
/// (debounced) search text lives here, never the per-keystroke value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    /// Additional `key=value` filters (e.g. `status=active`).
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            search: None,
            filters: Vec::new(),
        }
    }

    pub fn search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        if !trimmed.is_empty() {
            self.search = Some(trimmed.to_string());
        }
        self
    }

    pub fn filter(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.filters.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Renders `?page=..&per_page=..[&search=..][&k=v..]` with proper
    /// percent-encoding.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            format!("page={}", self.page),
            format!("per_page={}", self.per_page),
        ];
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        for (key, value) in &self.filters {
            pairs.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        format!("?{}", pairs.join("&"))
    }

    /// Stable signature of everything except the page number. List pages
    /// watch it and fall back to the first page when it changes, so a
    /// settled filter is always paired with `page=1`.
    pub fn filter_signature(&self) -> String {
        let mut parts = Vec::new();
        if let Some(search) = &self.search {
            parts.push(format!("search={}", search));
        }
        let mut filters = self.filters.clone();
        filters.sort();
        for (key, value) in filters {
            parts.push(format!("{}={}", key, value));
        }
        parts.join("&")
    }
}

/// Status-change payloads are status-only by design: a flip never resubmits
/// the whole entity.
pub fn order_status_payload(status: OrderStatus) -> serde_json::Value {
    serde_json::json!({ "status": status.as_str() })
}

/// Same rule for coupons: activation flips ride alone, never alongside the
/// rest of the coupon.
pub fn coupon_status_payload(is_active: bool) -> serde_json::Value {
    serde_json::json!({ "is_active": is_active })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_paths() {
        assert_eq!(products::detail(42), "/seller/products/42");
        assert_eq!(products::variant_status(7), "/seller/products/variants/7/status");
        assert_eq!(customers::orders(3), "/seller/customers/3/orders");
        assert_eq!(team::member_status(9), "/seller/team/members/9/status");
    }

    #[test]
    fn test_query_string_encoding() {
        let query = ListQuery::new(2, 15)
            .search("red shoes & boots")
            .filter("status", "active");
        assert_eq!(
            query.to_query_string(),
            "?page=2&per_page=15&search=red%20shoes%20%26%20boots&status=active"
        );
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let query = ListQuery::new(1, 15).search("   ");
        assert_eq!(query.to_query_string(), "?page=1&per_page=15");
        assert_eq!(query.filter_signature(), "");
    }

    #[test]
    fn test_filter_signature_ignores_page_and_order() {
        let a = ListQuery::new(1, 15)
            .search("tea")
            .filter("status", "draft")
            .filter("brand", "2");
        let b = ListQuery::new(9, 15)
            .search("tea")
            .filter("brand", "2")
            .filter("status", "draft");
        assert_eq!(a.filter_signature(), b.filter_signature());

        let c = ListQuery::new(1, 15).search("coffee");
        assert_ne!(a.filter_signature(), c.filter_signature());
    }

    #[test]
    fn test_order_status_payload() {
        let payload = order_status_payload(OrderStatus::Shipped);
        assert_eq!(payload, serde_json::json!({ "status": "shipped" }));
    }

    #[test]
    fn test_coupon_status_payload_is_flag_only() {
        assert_eq!(
            coupon_status_payload(false),
            serde_json::json!({ "is_active": false })
        );
    }
}
