// src/ui/pages/promotions.rs - Promotion list and modal editor

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::forms;
use crate::models::{Promotion, PromotionScope};
use crate::query::{use_debounced, use_filter_reset, use_mutation, use_page_query, ResourceKind};
use crate::ui::components::{
    status_badge, ConfirmDialog, Modal, NumberField, Pager, SearchToolbar, SelectField, TextField,
};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::state::use_notify;
use crate::utils::format_date;

#[component]
pub fn Promotions() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);
    // None = closed, Some(None) = create, Some(Some(p)) = edit.
    let mut editor = use_signal::<Option<Option<Promotion>>>(|| None);
    let mut delete_target = use_signal::<Option<(u64, String)>>(|| None);
    let delete_mutation = use_mutation();

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter_signature()
    });

    let query = use_page_query::<Promotion>(ResourceKind::Promotions, move || {
        let list = ListQuery::new(*page.read(), per_page).search(&search.settled.read());
        format!("{}{}", endpoints::promotions::LIST, list.to_query_string())
    });

    let delete_api = api.clone();
    let on_confirm_delete = move |_| {
        let Some((id, name)) = delete_target.read().clone() else {
            return;
        };
        let api = delete_api.clone();
        delete_mutation.execute(
            &[ResourceKind::Promotions, ResourceKind::Products],
            async move { api.delete(&endpoints::promotions::detail(id)).await },
            move |_| {
                notify.success("Promotion deleted", &name);
                delete_target.set(None);
            },
        );
    };

    rsx! {
        PageWrapper {
            title: "Promotions",
            actions: Some(rsx! {
                button {
                    r#type: "button",
                    class: "px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                    onclick: move |_| editor.set(Some(None)),
                    "New promotion"
                }
            }),

            SearchToolbar {
                placeholder: "Search promotions...",
                search,
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No promotions yet. Create one to discount your catalog.".to_string() }
                } else {
                    div {
                        class: format!(
                            "bg-white rounded-lg shadow overflow-hidden {}",
                            if *query.is_fetching.read() { "opacity-60" } else { "" }
                        ),
                        table {
                            class: "hidden md:table min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Discount" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Scope" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Runs" }
                                    th { class: "px-6 py-3" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for promo in &page_data.items {
                                    PromotionRow {
                                        key: "{promo.id}",
                                        promotion: promo.clone(),
                                        on_edit: move |p: Promotion| editor.set(Some(Some(p))),
                                        on_delete: move |(id, name)| delete_target.set(Some((id, name))),
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for promo in &page_data.items {
                                PromotionCard {
                                    key: "{promo.id}",
                                    promotion: promo.clone(),
                                    on_edit: move |p: Promotion| editor.set(Some(Some(p))),
                                    on_delete: move |(id, name)| delete_target.set(Some((id, name))),
                                }
                            }
                        }
                        Pager {
                            meta: page_data.meta.clone(),
                            fetching: *query.is_fetching.read(),
                            on_page: move |p| page.set(p),
                        }
                    }
                }
            }

            if let Some(initial) = editor.read().clone() {
                PromotionEditor {
                    key: "{initial.as_ref().map(|p| p.id).unwrap_or(0)}",
                    initial,
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some((_, name)) = delete_target.read().clone() {
                ConfirmDialog {
                    title: "Delete promotion".to_string(),
                    message: format!("Delete '{}'? Discounted prices revert immediately.", name),
                    confirm_label: "Delete".to_string(),
                    pending: *delete_mutation.pending.read(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PromotionRowProps {
    promotion: Promotion,
    on_edit: Callback<Promotion>,
    on_delete: Callback<(u64, String)>,
}

fn scope_label(promo: &Promotion) -> String {
    match promo.scope {
        PromotionScope::AllProducts => "All products".to_string(),
        PromotionScope::SelectedProducts => format!("{} products", promo.product_ids.len()),
    }
}

fn runs_label(promo: &Promotion) -> String {
    match (&promo.starts_at, &promo.ends_at) {
        (Some(start), Some(end)) => format!("{} – {}", format_date(start), format_date(end)),
        (Some(start), None) => format!("From {}", format_date(start)),
        (None, Some(end)) => format!("Until {}", format_date(end)),
        (None, None) => "Always".to_string(),
    }
}

#[component]
fn PromotionRow(props: PromotionRowProps) -> Element {
    let promo = props.promotion.clone();
    let edit_promo = promo.clone();
    let delete_id = promo.id;
    let delete_name = promo.name.clone();
    let scope_label = scope_label(&promo);
    let runs = runs_label(&promo);

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{promo.name}" }
            td { class: "px-6 py-4 text-sm text-gray-700", "{promo.discount_percent}%" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{scope_label}" }
            td { class: "px-6 py-4", {status_badge(&promo.status)} }
            td { class: "px-6 py-4 text-sm text-gray-500", "{runs}" }
            td {
                class: "px-6 py-4 text-right space-x-3",
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_promo.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_name.clone())),
                    "Delete"
                }
            }
        }
    }
}

/// Stacked-card form of a promotion row for narrow viewports.
#[component]
fn PromotionCard(props: PromotionRowProps) -> Element {
    let promo = props.promotion.clone();
    let edit_promo = promo.clone();
    let delete_id = promo.id;
    let delete_name = promo.name.clone();
    let scope = scope_label(&promo);
    let runs = runs_label(&promo);

    rsx! {
        div {
            class: "px-4 py-4 space-y-2",
            div {
                class: "flex items-center justify-between",
                p { class: "text-sm font-medium text-gray-900", "{promo.name}" }
                {status_badge(&promo.status)}
            }
            p { class: "text-sm text-gray-500", "{promo.discount_percent}% off · {scope}" }
            p { class: "text-sm text-gray-500", "{runs}" }
            div {
                class: "flex space-x-4 text-sm",
                button {
                    r#type: "button",
                    class: "font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_promo.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_name.clone())),
                    "Delete"
                }
            }
        }
    }
}

/// Comma or whitespace separated product ids; non-numeric tokens are kept
/// out of the parsed list and reported as a field error.
fn parse_product_ids(raw: &str) -> Result<Vec<u64>, String> {
    let mut ids = Vec::new();
    for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<u64>() {
            Ok(id) => ids.push(id),
            Err(_) => return Err(format!("'{}' is not a product id", token)),
        }
    }
    Ok(ids)
}

#[derive(Props, Clone, PartialEq)]
struct PromotionEditorProps {
    /// `None` creates, `Some` edits.
    initial: Option<Promotion>,
    on_close: Callback<()>,
}

#[component]
fn PromotionEditor(props: PromotionEditorProps) -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let mutation = use_mutation();

    let initial = props.initial.clone();
    let editing_id = initial.as_ref().map(|p| p.id);

    let mut name = use_signal(|| initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let mut discount = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.discount_percent.to_string())
            .unwrap_or_default()
    });
    let mut scope = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.scope)
            .unwrap_or(PromotionScope::AllProducts)
    });
    let mut product_ids = use_signal(|| {
        initial
            .as_ref()
            .map(|p| {
                p.product_ids
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    });
    let mut min_price = use_signal(|| {
        initial
            .as_ref()
            .and_then(|p| p.conditions.min_price)
            .map(|v| v.to_string())
            .unwrap_or_default()
    });
    let mut min_quantity = use_signal(|| {
        initial
            .as_ref()
            .and_then(|p| p.conditions.min_quantity)
            .map(|v| v.to_string())
            .unwrap_or_default()
    });
    let mut starts_at = use_signal(|| {
        initial
            .as_ref()
            .and_then(|p| p.starts_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let mut ends_at = use_signal(|| {
        initial
            .as_ref()
            .and_then(|p| p.ends_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    let submit_api = api.clone();
    let on_close = props.on_close;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut errors = crate::error::FieldErrors::new();
        forms::require(&mut errors, "name", &name.read(), "Name");
        let discount_value = discount.read().parse::<f64>().unwrap_or(0.0);
        forms::require_percent(&mut errors, "discount_percent", discount_value, "Discount");

        let picked_ids = match parse_product_ids(&product_ids.read()) {
            Ok(ids) => ids,
            Err(message) => {
                errors.push("product_ids", message);
                Vec::new()
            }
        };
        let submitted_ids =
            forms::validate_promotion_products(&mut errors, *scope.read(), &picked_ids);

        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let conditions = serde_json::json!({
            "min_price": min_price.read().parse::<f64>().ok(),
            "min_quantity": min_quantity.read().parse::<u32>().ok(),
        });
        let payload = serde_json::json!({
            "name": name.read().trim(),
            "discount_percent": discount_value,
            "scope": *scope.read(),
            "product_ids": submitted_ids,
            "conditions": conditions,
            "starts_at": non_empty(&starts_at.read()),
            "ends_at": non_empty(&ends_at.read()),
        });

        let api = submit_api.clone();
        mutation.execute(
            &[ResourceKind::Promotions, ResourceKind::Products],
            async move {
                match editing_id {
                    Some(id) => {
                        api.put_json::<_, serde_json::Value>(
                            &endpoints::promotions::detail(id),
                            &payload,
                        )
                        .await
                    }
                    None => {
                        api.post_json::<_, serde_json::Value>(endpoints::promotions::LIST, &payload)
                            .await
                    }
                }
            },
            move |_| {
                notify.success(
                    "Promotion saved",
                    if editing_id.is_some() { "Changes applied" } else { "Promotion created" },
                );
                on_close.call(());
            },
        );
    };

    let errors = mutation.field_errors.read().clone();
    let scope_value = match *scope.read() {
        PromotionScope::AllProducts => "all_products",
        PromotionScope::SelectedProducts => "selected_products",
    };

    rsx! {
        Modal {
            title: if editing_id.is_some() { "Edit promotion".to_string() } else { "New promotion".to_string() },
            on_close: props.on_close,

            form {
                class: "space-y-4",
                onsubmit: on_submit,

                if let Some(message) = mutation.error.read().as_ref() {
                    div {
                        class: "rounded-md bg-red-50 p-4",
                        p { class: "text-sm font-medium text-red-800", "{message}" }
                    }
                }

                TextField {
                    label: "Name",
                    value: name.read().clone(),
                    error: errors.first("name").map(str::to_string),
                    on_input: move |v| name.set(v),
                }
                NumberField {
                    label: "Discount (%)",
                    value: discount.read().clone(),
                    error: errors.first("discount_percent").map(str::to_string),
                    on_input: move |v| discount.set(v),
                }
                SelectField {
                    label: "Applies to",
                    value: scope_value.to_string(),
                    options: vec![
                        ("all_products".to_string(), "All products".to_string()),
                        ("selected_products".to_string(), "Selected products".to_string()),
                    ],
                    on_change: move |v: String| {
                        scope.set(if v == "selected_products" {
                            PromotionScope::SelectedProducts
                        } else {
                            PromotionScope::AllProducts
                        });
                    },
                }
                if *scope.read() == PromotionScope::SelectedProducts {
                    TextField {
                        label: "Product ids",
                        value: product_ids.read().clone(),
                        placeholder: "e.g. 12, 47, 105",
                        error: errors.first("product_ids").map(str::to_string),
                        on_input: move |v| product_ids.set(v),
                    }
                }

                div {
                    class: "grid grid-cols-2 gap-4",
                    NumberField {
                        label: "Minimum order price",
                        value: min_price.read().clone(),
                        error: errors.first("conditions.min_price").map(str::to_string),
                        on_input: move |v| min_price.set(v),
                    }
                    NumberField {
                        label: "Minimum quantity",
                        value: min_quantity.read().clone(),
                        step: "1",
                        error: errors.first("conditions.min_quantity").map(str::to_string),
                        on_input: move |v| min_quantity.set(v),
                    }
                }

                div {
                    class: "grid grid-cols-2 gap-4",
                    TextField {
                        label: "Starts",
                        input_type: "date",
                        value: starts_at.read().clone(),
                        error: errors.first("starts_at").map(str::to_string),
                        on_input: move |v| starts_at.set(v),
                    }
                    TextField {
                        label: "Ends",
                        input_type: "date",
                        value: ends_at.read().clone(),
                        error: errors.first("ends_at").map(str::to_string),
                        on_input: move |v| ends_at.set(v),
                    }
                }

                div {
                    class: "flex justify-end space-x-3 pt-2",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-sm font-medium rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                        disabled: *mutation.pending.read(),
                        if *mutation.pending.read() { "Saving..." } else { "Save promotion" }
                    }
                }
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_ids() {
        assert_eq!(parse_product_ids("12, 47 105").unwrap(), vec![12, 47, 105]);
        assert_eq!(parse_product_ids("").unwrap(), Vec::<u64>::new());
        assert!(parse_product_ids("12, abc").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty("2026-01-01"), Some("2026-01-01".to_string()));
    }

    fn promo(scope: PromotionScope, product_ids: Vec<u64>) -> Promotion {
        Promotion {
            id: 1,
            name: "Summer sale".to_string(),
            discount_percent: 15.0,
            scope,
            product_ids,
            conditions: Default::default(),
            status: crate::models::PromotionStatus::Active,
            starts_at: None,
            ends_at: None,
        }
    }

    // Both the table row and the stacked card render these summaries.
    #[test]
    fn test_scope_label_counts_selected_products() {
        assert_eq!(
            scope_label(&promo(PromotionScope::AllProducts, vec![])),
            "All products"
        );
        assert_eq!(
            scope_label(&promo(PromotionScope::SelectedProducts, vec![3, 9])),
            "2 products"
        );
    }

    #[test]
    fn test_runs_label_without_dates_is_always() {
        assert_eq!(runs_label(&promo(PromotionScope::AllProducts, vec![])), "Always");
    }
}
