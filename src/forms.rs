// src/forms.rs - Client-side form validation

//! Field-level validation that runs before submission. Server-side 422
//! responses use the same `FieldErrors` shape, so the form renders both the
//! same way.

use crate::error::FieldErrors;
use crate::models::product::Variant;
use crate::models::promotion::PromotionScope;

pub fn require(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
    }
}

pub fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, "Email is required");
    } else if !looks_like_email(trimmed) {
        errors.push(field, "Enter a valid email address");
    }
}

/// Intentionally loose; the server is the authority on deliverability.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

pub fn require_positive(errors: &mut FieldErrors, field: &str, value: f64, label: &str) {
    if value <= 0.0 {
        errors.push(field, format!("{} must be greater than zero", label));
    }
}

pub fn require_percent(errors: &mut FieldErrors, field: &str, value: f64, label: &str) {
    if !(0.0..=100.0).contains(&value) || value == 0.0 {
        errors.push(field, format!("{} must be between 0 and 100", label));
    }
}

/// Promotion scope rule: a product list is required only in
/// `selected_products` mode. In `all_products` mode the submitted list is
/// forced empty regardless of what the picker held.
pub fn validate_promotion_products(
    errors: &mut FieldErrors,
    scope: PromotionScope,
    product_ids: &[u64],
) -> Vec<u64> {
    match scope {
        PromotionScope::SelectedProducts => {
            if product_ids.is_empty() {
                errors.push("product_ids", "Select at least one product");
            }
            product_ids.to_vec()
        }
        PromotionScope::AllProducts => Vec::new(),
    }
}

/// Variant rows must be non-empty, carry exactly one default, and each
/// price must be positive.
pub fn validate_variants(errors: &mut FieldErrors, variants: &[Variant]) {
    if variants.is_empty() {
        errors.push("variants", "At least one variant is required");
        return;
    }
    let defaults = variants.iter().filter(|v| v.is_default).count();
    if defaults != 1 {
        errors.push("variants", "Exactly one variant must be the default");
    }
    for (i, variant) in variants.iter().enumerate() {
        if variant.price <= 0.0 {
            errors.push(format!("variants.{}.price", i), "Price must be greater than zero");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", "  ", "Name");
        require(&mut errors, "code", "SAVE10", "Code");
        assert_eq!(errors.first("name"), Some("Name is required"));
        assert_eq!(errors.first("code"), None);
    }

    #[test]
    fn test_email_shapes() {
        let mut errors = FieldErrors::new();
        require_email(&mut errors, "email", "a@x.com");
        assert!(errors.is_empty());

        require_email(&mut errors, "email", "not-an-email");
        assert_eq!(errors.first("email"), Some("Enter a valid email address"));
    }

    #[test]
    fn test_selected_products_requires_nonempty_list() {
        let mut errors = FieldErrors::new();
        let kept = validate_promotion_products(&mut errors, PromotionScope::SelectedProducts, &[]);
        assert!(kept.is_empty());
        assert_eq!(errors.first("product_ids"), Some("Select at least one product"));

        let mut errors = FieldErrors::new();
        let kept =
            validate_promotion_products(&mut errors, PromotionScope::SelectedProducts, &[3, 9]);
        assert!(errors.is_empty());
        assert_eq!(kept, vec![3, 9]);
    }

    #[test]
    fn test_all_products_forces_empty_list() {
        let mut errors = FieldErrors::new();
        // The picker may still hold ids; they must not be submitted.
        let kept = validate_promotion_products(&mut errors, PromotionScope::AllProducts, &[1, 2]);
        assert!(errors.is_empty());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_variants_need_exactly_one_default() {
        let mut errors = FieldErrors::new();
        validate_variants(&mut errors, &[]);
        assert_eq!(errors.first("variants"), Some("At least one variant is required"));

        let mut a = Variant::blank();
        a.price = 10.0;
        let mut b = Variant::blank();
        b.price = 12.0;

        let mut errors = FieldErrors::new();
        validate_variants(&mut errors, &[a.clone(), b.clone()]);
        assert_eq!(
            errors.first("variants"),
            Some("Exactly one variant must be the default")
        );

        a.is_default = true;
        let mut errors = FieldErrors::new();
        validate_variants(&mut errors, &[a, b]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_variant_price_must_be_positive() {
        let mut v = Variant::blank();
        v.is_default = true;
        let mut errors = FieldErrors::new();
        validate_variants(&mut errors, &[v]);
        assert_eq!(
            errors.first("variants.0.price"),
            Some("Price must be greater than zero")
        );
    }
}
