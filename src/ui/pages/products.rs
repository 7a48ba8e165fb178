// src/ui/pages/products.rs - Product list with search, filter, and row actions

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient, endpoints::ListQuery};
use crate::models::Product;
use crate::query::{use_debounced, use_filter_reset, use_mutation, use_page_query, ResourceKind};
use crate::ui::components::{status_badge, ConfirmDialog, Pager, SearchToolbar};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::Route;
use crate::ui::state::use_notify;
use crate::utils::format_money;

#[component]
pub fn Products() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);
    let status_filter = use_signal(String::new);

    // Any settled filter change starts over from the first page.
    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter("status", &status_filter.read())
            .filter_signature()
    });

    let query = use_page_query::<Product>(ResourceKind::Products, move || {
        let list = ListQuery::new(*page.read(), per_page)
            .search(&search.settled.read())
            .filter("status", &status_filter.read());
        format!("{}{}", endpoints::products::LIST, list.to_query_string())
    });

    let delete_mutation = use_mutation();
    let status_mutation = use_mutation();
    let mut delete_target = use_signal(|| None::<(u64, String)>);

    let delete_api = api.clone();
    let on_confirm_delete = move |_| {
        if let Some((id, _)) = delete_target.peek().clone() {
            let api = delete_api.clone();
            delete_mutation.execute(
                &[ResourceKind::Products, ResourceKind::Inventory],
                async move { api.delete(&endpoints::products::detail(id)).await },
                move |_| {
                    delete_target.set(None);
                    notify.success("Product deleted", "");
                },
            );
        }
    };

    let toggle_api = api.clone();
    let on_toggle = move |product: Product| {
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

    let mut filter_signal = status_filter;

    rsx! {
        PageWrapper {
            title: "Products",
            actions: Some(rsx! {
                Link {
                    to: Route::ProductCreate {},
                    class: "inline-flex items-center px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                    "New product"
                }
            }),

            SearchToolbar {
                placeholder: "Search products...",
                search,
                select {
                    class: "rounded-md border border-gray-300 px-3 py-2 text-sm",
                    value: "{status_filter}",
                    onchange: move |evt| filter_signal.set(evt.value()),
                    option { value: "", "All statuses" }
                    option { value: "draft", "Draft" }
                    option { value: "active", "Active" }
                    option { value: "archived", "Archived" }
                }
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No products match the current filters.".to_string() }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Price" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Variants" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3", "" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for product in page_data.items.clone() {
                                    ProductRow {
                                        key: "{product.id}",
                                        product: product.clone(),
                                        on_toggle: on_toggle.clone(),
                                        on_delete: move |(id, name)| delete_target.set(Some((id, name))),
                                    }
                                }
                            }
                        }
                        // Narrow viewports get the same rows and actions as
                        // stacked cards.
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for product in page_data.items.clone() {
                                ProductCard {
                                    key: "{product.id}",
                                    product: product.clone(),
                                    on_toggle: on_toggle.clone(),
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

            if let Some((_, name)) = delete_target.read().as_ref() {
                ConfirmDialog {
                    title: "Delete product",
                    message: format!("\"{}\" and all of its variants will be removed. This cannot be undone.", name),
                    confirm_label: "Delete",
                    pending: *delete_mutation.pending.read(),
                    on_confirm: on_confirm_delete.clone(),
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ProductRowProps {
    product: Product,
    on_toggle: Callback<Product>,
    on_delete: Callback<(u64, String)>,
}

#[component]
fn ProductRow(props: ProductRowProps) -> Element {
    let product = props.product.clone();
    let price = product
        .default_variant()
        .map(|v| format_money(v.final_price.unwrap_or(v.price), "USD"))
        .unwrap_or_else(|| "—".to_string());
    let toggle_label = product.status.toggled().label();

    let toggle_product = product.clone();
    let delete_id = product.id;
    let delete_name = product.name.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 text-sm font-medium text-blue-600",
                Link {
                    to: Route::ProductDetail { id: product.id },
                    "{product.name}"
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-700", "{price}" }
            td { class: "px-6 py-4 text-sm text-gray-700", "{product.variants.len()}" }
            td { class: "px-6 py-4", {status_badge(&product.status)} }
            td {
                class: "px-6 py-4 text-right text-sm space-x-3 whitespace-nowrap",
                button {
                    r#type: "button",
                    class: "text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_toggle.call(toggle_product.clone()),
                    "Set {toggle_label}"
                }
                button {
                    r#type: "button",
                    class: "text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_name.clone())),
                    "Delete"
                }
            }
        }
    }
}

/// Stacked-card rendering of a product row for narrow viewports; exposes
/// the same navigation and actions as the table.
#[component]
fn ProductCard(props: ProductRowProps) -> Element {
    let product = props.product.clone();
    let price = product
        .default_variant()
        .map(|v| format_money(v.final_price.unwrap_or(v.price), "USD"))
        .unwrap_or_else(|| "—".to_string());
    let toggle_label = product.status.toggled().label();

    let toggle_product = product.clone();
    let delete_id = product.id;
    let delete_name = product.name.clone();

    rsx! {
        div {
            class: "px-4 py-4 space-y-2",
            div {
                class: "flex items-center justify-between",
                Link {
                    to: Route::ProductDetail { id: product.id },
                    class: "text-sm font-medium text-blue-600",
                    "{product.name}"
                }
                {status_badge(&product.status)}
            }
            p {
                class: "text-sm text-gray-500",
                "{price} · {product.variants.len()} variants"
            }
            div {
                class: "flex space-x-4 text-sm",
                button {
                    r#type: "button",
                    class: "font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_toggle.call(toggle_product.clone()),
                    "Set {toggle_label}"
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
