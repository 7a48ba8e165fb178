// src/models/order.rs - Orders, line items, and dashboard KPIs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
        }
    }

    /// All statuses, for the status-change select on the detail view.
    pub fn all() -> &'static [OrderStatus] {
        &[
            Self::Pending,
            Self::Processing,
            Self::Shipped,
            Self::Delivered,
            Self::Cancelled,
            Self::Refunded,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u64,
    pub product_name: String,
    #[serde(default)]
    pub variant_label: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub number: String,
    pub customer_name: String,
    pub total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Aggregates from `GET /seller/orders/kpi`, shown as dashboard stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderKpi {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub delivered_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_snake_case_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Refunded);
    }

    #[test]
    fn test_order_tolerates_missing_optionals() {
        let raw = r#"{
            "id": 12,
            "number": "ORD-0012",
            "customer_name": "Mara Quinn",
            "total": 89.9,
            "status": "pending"
        }"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.currency, "USD");
        assert!(order.items.is_empty());
        assert!(order.created_at.is_none());
    }
}
