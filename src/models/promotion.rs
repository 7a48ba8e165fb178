// src/models/promotion.rs - Promotions and their scope rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a promotion covers the whole catalog or an explicit product set.
/// With `SelectedProducts` the id list must be non-empty; with `AllProducts`
/// the submitted list is forced empty (see `forms::validate_promotion`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionScope {
    AllProducts,
    SelectedProducts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    Draft,
    Active,
    Disabled,
    Expired,
}

impl PromotionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Disabled => "Disabled",
            Self::Expired => "Expired",
        }
    }
}

/// Nested on the wire; flattened into top-level form fields for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionConditions {
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub min_quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: u64,
    pub name: String,
    pub discount_percent: f64,
    pub scope: PromotionScope,
    #[serde(default)]
    pub product_ids: Vec<u64>,
    #[serde(default)]
    pub conditions: PromotionConditions,
    pub status: PromotionStatus,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_wire_format() {
        assert_eq!(
            serde_json::to_string(&PromotionScope::SelectedProducts).unwrap(),
            "\"selected_products\""
        );
        let scope: PromotionScope = serde_json::from_str("\"all_products\"").unwrap();
        assert_eq!(scope, PromotionScope::AllProducts);
    }

    #[test]
    fn test_conditions_default_when_absent() {
        let raw = r#"{
            "id": 3,
            "name": "Spring sale",
            "discount_percent": 15.0,
            "scope": "all_products",
            "status": "active"
        }"#;
        let promo: Promotion = serde_json::from_str(raw).unwrap();
        assert_eq!(promo.conditions, PromotionConditions::default());
        assert!(promo.product_ids.is_empty());
    }
}
