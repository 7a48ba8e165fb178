// src/models/product.rs - Products and their owned variants

use serde::{Deserialize, Serialize};

/// Product lifecycle status. Transitions happen through the dedicated
/// status endpoint, never through a full edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Draft,
    Active,
    Archived,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }

    /// The status the row-level toggle flips to.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Draft,
            Self::Draft | Self::Archived => Self::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantStatus {
    InStock,
    OutOfStock,
    ComingSoon,
    Archived,
}

impl VariantStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::OutOfStock => "Out of stock",
            Self::ComingSoon => "Coming soon",
            Self::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// One image attached to a variant. Exactly one per variant is the main
/// image; the rest are sub-images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImage {
    #[serde(default)]
    pub id: Option<u64>,
    pub url: String,
    #[serde(default)]
    pub is_main: bool,
}

/// A sellable variant of a product. `final_price` is computed server-side
/// (promotions applied) and must never be written by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: Option<u64>,
    pub price: f64,
    #[serde(default)]
    pub final_price: Option<f64>,
    pub quantity: u32,
    #[serde(default)]
    pub color_id: Option<u64>,
    #[serde(default)]
    pub size_id: Option<u64>,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub is_default: bool,
    pub status: VariantStatus,
    #[serde(default)]
    pub images: Vec<VariantImage>,
}

impl Variant {
    /// A blank row for the variant editor.
    pub fn blank() -> Self {
        Self {
            id: None,
            price: 0.0,
            final_price: None,
            quantity: 0,
            color_id: None,
            size_id: None,
            dimensions: Dimensions::default(),
            is_default: false,
            status: VariantStatus::InStock,
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub subcategory_id: Option<u64>,
    #[serde(default)]
    pub brand_id: Option<u64>,
    #[serde(default)]
    pub style_id: Option<u64>,
    pub status: ProductStatus,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.is_default)
    }
}

/// Marks the variant at `index` as the default and clears the flag on every
/// sibling. Out-of-range indexes leave the list untouched. After a
/// successful call exactly one variant carries the flag.
pub fn set_default_variant(variants: &mut [Variant], index: usize) {
    if index >= variants.len() {
        return;
    }
    for (i, variant) in variants.iter_mut().enumerate() {
        variant.is_default = i == index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(n: usize) -> Vec<Variant> {
        (0..n)
            .map(|i| {
                let mut v = Variant::blank();
                v.id = Some(i as u64 + 1);
                v
            })
            .collect()
    }

    #[test]
    fn test_set_default_clears_previous() {
        let mut list = variants(3);
        list[0].is_default = true;

        set_default_variant(&mut list, 2);

        let defaults: Vec<_> = list.iter().filter(|v| v.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, Some(3));
    }

    #[test]
    fn test_set_default_single_variant() {
        let mut list = variants(1);
        set_default_variant(&mut list, 0);
        assert!(list[0].is_default);
    }

    #[test]
    fn test_set_default_out_of_range_is_noop() {
        let mut list = variants(2);
        list[1].is_default = true;

        set_default_variant(&mut list, 5);

        assert!(!list[0].is_default);
        assert!(list[1].is_default);
    }

    #[test]
    fn test_exactly_one_default_for_any_length() {
        for n in 1..6 {
            let mut list = variants(n);
            // Pathological start: everything flagged.
            for v in list.iter_mut() {
                v.is_default = true;
            }
            set_default_variant(&mut list, n - 1);
            assert_eq!(list.iter().filter(|v| v.is_default).count(), 1);
        }
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(ProductStatus::Active.toggled(), ProductStatus::Draft);
        assert_eq!(ProductStatus::Draft.toggled(), ProductStatus::Active);
        assert_eq!(ProductStatus::Archived.toggled(), ProductStatus::Active);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&VariantStatus::OutOfStock).unwrap(),
            "\"out_of_stock\""
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Draft).unwrap(),
            "\"draft\""
        );
    }
}
