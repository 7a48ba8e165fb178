// src/ui/pages/orders.rs - Order list with search and status filter

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::models::{Order, OrderStatus};
use crate::query::{use_debounced, use_filter_reset, use_page_query, ResourceKind};
use crate::ui::components::{status_badge, Pager, SearchToolbar};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::Route;
use crate::utils::{format_date, format_money};

#[component]
pub fn Orders() -> Element {
    let api = use_context::<ApiClient>();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);
    let status_filter = use_signal(String::new);

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter("status", &status_filter.read())
            .filter_signature()
    });

    let query = use_page_query::<Order>(ResourceKind::Orders, move || {
        let list = ListQuery::new(*page.read(), per_page)
            .search(&search.settled.read())
            .filter("status", &status_filter.read());
        format!("{}{}", endpoints::orders::LIST, list.to_query_string())
    });

    let mut filter_signal = status_filter;

    rsx! {
        PageWrapper {
            title: "Orders",

            SearchToolbar {
                placeholder: "Search by number or customer...",
                search,
                select {
                    class: "rounded-md border border-gray-300 px-3 py-2 text-sm",
                    value: "{status_filter}",
                    onchange: move |evt| filter_signal.set(evt.value()),
                    option { value: "", "All statuses" }
                    for status in OrderStatus::all() {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No orders match the current filters.".to_string() }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Number" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Customer" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Total" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Placed" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for order in &page_data.items {
                                    tr {
                                        key: "{order.id}",
                                        class: "hover:bg-gray-50",
                                        td {
                                            class: "px-6 py-4 text-sm font-medium text-blue-600",
                                            Link {
                                                to: Route::OrderDetail { id: order.id },
                                                "{order.number}"
                                            }
                                        }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{order.customer_name}" }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-700",
                                            "{format_money(order.total, &order.currency)}"
                                        }
                                        td { class: "px-6 py-4", {status_badge(&order.status)} }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-500",
                                            if let Some(created) = &order.created_at {
                                                "{format_date(created)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for order in &page_data.items {
                                div {
                                    key: "{order.id}",
                                    class: "px-4 py-4 space-y-1",
                                    div {
                                        class: "flex items-center justify-between",
                                        Link {
                                            to: Route::OrderDetail { id: order.id },
                                            class: "text-sm font-medium text-blue-600",
                                            "{order.number}"
                                        }
                                        {status_badge(&order.status)}
                                    }
                                    p { class: "text-sm text-gray-700", "{order.customer_name}" }
                                    p {
                                        class: "text-sm text-gray-500",
                                        "{format_money(order.total, &order.currency)}"
                                        if let Some(created) = &order.created_at {
                                            " · {format_date(created)}"
                                        }
                                    }
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
