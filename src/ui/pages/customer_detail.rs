// src/ui/pages/customer_detail.rs - Customer profile with their order history

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::models::{Customer, Order};
use crate::query::{use_detail_query, use_page_query, ResourceKind};
use crate::ui::components::{status_badge, Pager};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::{nav, Route};
use crate::utils::{format_date, format_money};

#[component]
pub fn CustomerDetail(id: u64) -> Element {
    let api = use_context::<ApiClient>();
    let route = use_route::<Route>();
    let stale = api.config().list_stale_secs;

    let query = use_detail_query::<Customer>(ResourceKind::Customers, Some(stale), move || {
        endpoints::customers::detail(id)
    });

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageWrapper {
                title: "Customer",
                PageError { message, back: nav::parent_list(&route) }
            }
        };
    }
    let data = query.data.read().clone();
    let Some(customer) = data else {
        return rsx! {
            PageWrapper { title: "Customer", PageSkeleton {} }
        };
    };

    rsx! {
        PageWrapper {
            title: "{customer.full_name()}",
            subtitle: customer.created_at.as_ref().map(|c| format!("Customer since {}", format_date(c))),

            div {
                class: "bg-white rounded-lg shadow px-6 py-5 grid grid-cols-1 sm:grid-cols-3 gap-4",
                div {
                    p { class: "text-sm text-gray-500", "Email" }
                    p { class: "mt-1 text-sm text-gray-900", "{customer.email}" }
                }
                div {
                    p { class: "text-sm text-gray-500", "Phone" }
                    p { class: "mt-1 text-sm text-gray-900", "{customer.phone.as_deref().unwrap_or(\"—\")}" }
                }
                div {
                    p { class: "text-sm text-gray-500", "Lifetime spend" }
                    p {
                        class: "mt-1 text-sm text-gray-900",
                        "{format_money(customer.total_spent, \"USD\")} across {customer.orders_count} orders"
                    }
                }
            }

            CustomerOrders { customer_id: id }
        }
    }
}

#[component]
fn CustomerOrders(customer_id: u64) -> Element {
    let api = use_context::<ApiClient>();
    let per_page = api.config().per_page;
    let mut page = use_signal(|| 1u32);

    let query = use_page_query::<Order>(ResourceKind::Orders, move || {
        let list = ListQuery::new(*page.read(), per_page);
        format!(
            "{}{}",
            endpoints::customers::orders(customer_id),
            list.to_query_string()
        )
    });

    rsx! {
        div {
            class: "bg-white rounded-lg shadow overflow-hidden",
            div {
                class: "px-6 py-4 border-b border-gray-200",
                h2 { class: "text-lg font-medium text-gray-900", "Orders" }
            }
            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "This customer has not placed any orders yet.".to_string() }
                } else {
                    table {
                        class: format!(
                            "hidden md:table min-w-full divide-y divide-gray-200 {}",
                            if *query.is_fetching.read() { "opacity-60" } else { "" }
                        ),
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Number" }
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
                        class: format!(
                            "md:hidden divide-y divide-gray-200 {}",
                            if *query.is_fetching.read() { "opacity-60" } else { "" }
                        ),
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
