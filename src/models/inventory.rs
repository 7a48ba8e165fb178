// src/models/inventory.rs - Read-only inventory rows

use serde::{Deserialize, Serialize};

use super::product::VariantStatus;

/// One stock row per variant. Inventory is read-only in the panel; stock
/// changes flow through product edits and order fulfilment server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub product_id: u64,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub variant_label: Option<String>,
    pub quantity: u32,
    pub status: VariantStatus,
}
