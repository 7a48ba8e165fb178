// src/ui/pages/product_detail.rs - Product show view with inline edit toggle

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient};
use crate::models::{Product, Variant, VariantStatus};
use crate::query::{use_detail_query, use_mutation, ResourceKind};
use crate::ui::components::status_badge;
use crate::ui::pages::{PageError, PageSkeleton, PageWrapper, ProductForm};
use crate::ui::router::{nav, Route};
use crate::ui::state::use_notify;
use crate::utils::{format_date, format_money};

#[component]
pub fn ProductDetail(id: u64) -> Element {
    let mut editing = use_signal(|| false);

    if editing() {
        return rsx! {
            div {
                button {
                    r#type: "button",
                    class: "mb-4 text-sm text-blue-600 hover:text-blue-500",
                    onclick: move |_| editing.set(false),
                    "← Back to product"
                }
                ProductForm { id: Some(id) }
            }
        };
    }

    rsx! {
        ProductShow { id, on_edit: move |_| editing.set(true) }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProductShowProps {
    id: u64,
    on_edit: Callback<()>,
}

#[component]
fn ProductShow(props: ProductShowProps) -> Element {
    let api = use_context::<ApiClient>();
    let route = use_route::<Route>();
    let notify = use_notify();
    let id = props.id;
    let stale = api.config().list_stale_secs;

    let query = use_detail_query::<Product>(ResourceKind::Products, Some(stale), move || {
        endpoints::products::detail(id)
    });
    let status_mutation = use_mutation();
    let variant_mutation = use_mutation();

    let toggle_api = api.clone();
    let on_toggle_status = move |product: Product| {
        let api = toggle_api.clone();
        let next = product.status.toggled();
        let payload = serde_json::json!({ "status": next });
        status_mutation.execute(
            &[ResourceKind::Products],
            async move {
                api.put_json::<_, serde_json::Value>(&endpoints::products::status(product.id), &payload)
                    .await
            },
            move |_| notify.success("Status updated", next.label()),
        );
    };

    let variant_api = api.clone();
    let on_variant_status = move |(variant_id, status): (u64, VariantStatus)| {
        let api = variant_api.clone();
        let payload = serde_json::json!({ "status": status });
        variant_mutation.execute(
            &[ResourceKind::Products, ResourceKind::Inventory],
            async move {
                api.put_json::<_, serde_json::Value>(
                    &endpoints::products::variant_status(variant_id),
                    &payload,
                )
                .await
            },
            move |_| notify.success("Variant updated", status.label()),
        );
    };

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageWrapper {
                title: "Product",
                PageError { message, back: nav::parent_list(&route) }
            }
        };
    }
    let data = query.data.read().clone();
    let Some(product) = data else {
        return rsx! {
            PageWrapper { title: "Product", PageSkeleton {} }
        };
    };

    let toggle_product = product.clone();
    let toggle_label = product.status.toggled().label();

    rsx! {
        PageWrapper {
            title: "{product.name}",
            subtitle: product.created_at.as_ref().map(|c| format!("Created {}", format_date(c))),
            actions: Some(rsx! {
                div {
                    class: "flex space-x-3",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                        disabled: *status_mutation.pending.read(),
                        onclick: move |_| on_toggle_status(toggle_product.clone()),
                        "Set {toggle_label}"
                    }
                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                        onclick: move |_| props.on_edit.call(()),
                        "Edit"
                    }
                }
            }),

            div {
                class: "bg-white rounded-lg shadow px-6 py-5 space-y-3",
                div {
                    class: "flex items-center space-x-3",
                    {status_badge(&product.status)}
                }
                if !product.description.is_empty() {
                    p { class: "text-sm text-gray-700", "{product.description}" }
                }
            }

            div {
                class: "bg-white rounded-lg shadow overflow-hidden",
                div {
                    class: "px-6 py-4 border-b border-gray-200",
                    h2 { class: "text-lg font-medium text-gray-900", "Variants" }
                }
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    thead {
                        class: "bg-gray-50",
                        tr {
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Price" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Final price" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Quantity" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Default" }
                            th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-gray-200",
                        for variant in product.variants.clone() {
                            VariantStatusRow {
                                key: "{variant.id:?}",
                                variant: variant.clone(),
                                pending: *variant_mutation.pending.read(),
                                on_status: on_variant_status.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct VariantStatusRowProps {
    variant: Variant,
    pending: bool,
    on_status: Callback<(u64, VariantStatus)>,
}

#[component]
fn VariantStatusRow(props: VariantStatusRowProps) -> Element {
    let variant = props.variant.clone();
    let variant_id = variant.id;
    let current = serde_json::to_value(variant.status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    rsx! {
        tr {
            td {
                class: "px-6 py-4 text-sm text-gray-700",
                "{format_money(variant.price, \"USD\")}"
            }
            td {
                class: "px-6 py-4 text-sm text-gray-700",
                if let Some(final_price) = variant.final_price {
                    "{format_money(final_price, \"USD\")}"
                } else {
                    "—"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-700", "{variant.quantity}" }
            td {
                class: "px-6 py-4 text-sm text-gray-700",
                if variant.is_default { "Yes" } else { "—" }
            }
            td {
                class: "px-6 py-4",
                if let Some(variant_id) = variant_id {
                    select {
                        class: "rounded-md border border-gray-300 px-2 py-1 text-sm",
                        value: "{current}",
                        disabled: props.pending,
                        onchange: move |evt| {
                            if let Ok(status) = serde_json::from_value::<VariantStatus>(
                                serde_json::Value::String(evt.value()),
                            ) {
                                props.on_status.call((variant_id, status));
                            }
                        },
                        option { value: "in_stock", "In stock" }
                        option { value: "out_of_stock", "Out of stock" }
                        option { value: "coming_soon", "Coming soon" }
                        option { value: "archived", "Archived" }
                    }
                } else {
                    {status_badge(&variant.status)}
                }
            }
        }
    }
}
