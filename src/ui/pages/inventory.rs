// src/ui/pages/inventory.rs - Read-only stock levels

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::models::InventoryItem;
use crate::query::{
    use_debounced, use_detail_query, use_filter_reset, use_page_query, ResourceKind,
};
use crate::ui::router::nav;
use crate::ui::components::{status_badge, Pager, SearchToolbar};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::Route;

#[component]
pub fn Inventory() -> Element {
    let api = use_context::<ApiClient>();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter_signature()
    });

    let query = use_page_query::<InventoryItem>(ResourceKind::Inventory, move || {
        let list = ListQuery::new(*page.read(), per_page).search(&search.settled.read());
        format!("{}{}", endpoints::inventory::LIST, list.to_query_string())
    });

    rsx! {
        PageWrapper {
            title: "Inventory",
            subtitle: Some("Stock is adjusted through product edits and order fulfilment.".to_string()),

            SearchToolbar {
                placeholder: "Search by product or SKU...",
                search,
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No stock rows match the current filters.".to_string() }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Product" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "SKU" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Variant" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Quantity" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for item in &page_data.items {
                                    tr {
                                        key: "{item.id}",
                                        class: "hover:bg-gray-50",
                                        td {
                                            class: "px-6 py-4 text-sm font-medium text-blue-600",
                                            Link {
                                                to: Route::InventoryDetail { id: item.id },
                                                "{item.product_name}"
                                            }
                                        }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-500",
                                            "{item.sku.as_deref().unwrap_or(\"—\")}"
                                        }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-500",
                                            "{item.variant_label.as_deref().unwrap_or(\"—\")}"
                                        }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{item.quantity}" }
                                        td { class: "px-6 py-4", {status_badge(&item.status)} }
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for item in &page_data.items {
                                div {
                                    key: "{item.id}",
                                    class: "px-4 py-4 space-y-1",
                                    div {
                                        class: "flex items-center justify-between",
                                        Link {
                                            to: Route::InventoryDetail { id: item.id },
                                            class: "text-sm font-medium text-blue-600",
                                            "{item.product_name}"
                                        }
                                        {status_badge(&item.status)}
                                    }
                                    p {
                                        class: "text-sm text-gray-500",
                                        "{item.sku.as_deref().unwrap_or(\"—\")} · {item.variant_label.as_deref().unwrap_or(\"—\")}"
                                    }
                                    p { class: "text-sm text-gray-700", "{item.quantity} in stock" }
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
        }
    }
}

#[component]
pub fn InventoryDetail(id: u64) -> Element {
    let api = use_context::<ApiClient>();
    let route = use_route::<Route>();
    let stale = api.config().list_stale_secs;

    let query = use_detail_query::<InventoryItem>(ResourceKind::Inventory, Some(stale), move || {
        endpoints::inventory::detail(id)
    });

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageWrapper {
                title: "Stock item",
                PageError { message, back: nav::parent_list(&route) }
            }
        };
    }
    let data = query.data.read().clone();
    let Some(item) = data else {
        return rsx! {
            PageWrapper { title: "Stock item", PageSkeleton {} }
        };
    };

    rsx! {
        PageWrapper {
            title: "{item.product_name}",
            subtitle: item.variant_label.clone(),

            div {
                class: "bg-white rounded-lg shadow px-6 py-5 grid grid-cols-1 sm:grid-cols-3 gap-4",
                div {
                    p { class: "text-sm text-gray-500", "SKU" }
                    p { class: "mt-1 text-sm text-gray-900", "{item.sku.as_deref().unwrap_or(\"—\")}" }
                }
                div {
                    p { class: "text-sm text-gray-500", "Quantity on hand" }
                    p { class: "mt-1 text-2xl font-semibold text-gray-900", "{item.quantity}" }
                }
                div {
                    p { class: "text-sm text-gray-500", "Status" }
                    div { class: "mt-1", {status_badge(&item.status)} }
                }
            }

            p {
                class: "text-sm text-gray-500",
                "Stock levels are read-only here. Edit the "
                Link {
                    to: Route::ProductDetail { id: item.product_id },
                    class: "text-blue-600 hover:text-blue-500",
                    "product"
                }
                " to change quantities."
            }
        }
    }
}
