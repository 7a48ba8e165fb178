// src/ui/pages/dashboard.rs - KPI cards and recent orders

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient};
use crate::models::{Order, OrderKpi};
use crate::query::{use_detail_query, use_page_query, ResourceKind};
use crate::ui::components::status_badge;
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::Route;
use crate::utils::{format_date, format_money};

#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let stale = api.config().list_stale_secs;
    let per_page = 5;

    let kpi = use_detail_query::<OrderKpi>(ResourceKind::OrderKpi, Some(stale), || {
        endpoints::orders::KPI.to_string()
    });
    let recent = use_page_query::<Order>(ResourceKind::Orders, move || {
        format!("{}?page=1&per_page={}", endpoints::orders::LIST, per_page)
    });

    rsx! {
        PageWrapper {
            title: "Dashboard",
            subtitle: Some("A quick look at how the store is doing.".to_string()),

            if let Some(kpi) = kpi.data.read().as_ref() {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                    StatCard { label: "Total orders", value: kpi.total_orders.to_string() }
                    StatCard { label: "Pending", value: kpi.pending_orders.to_string() }
                    StatCard { label: "Delivered", value: kpi.delivered_orders.to_string() }
                    StatCard { label: "Revenue", value: format_money(kpi.total_revenue, "USD") }
                }
            } else if kpi.error.read().is_some() {
                PageError { message: kpi.error.read().as_ref().map(|e| e.message.clone()).unwrap_or_default() }
            } else {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 animate-pulse",
                    for _ in 0..4 {
                        div { class: "h-24 bg-gray-200 rounded-lg" }
                    }
                }
            }

            div {
                class: "bg-white rounded-lg shadow",
                div {
                    class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between",
                    h2 { class: "text-lg font-medium text-gray-900", "Recent orders" }
                    Link {
                        to: Route::Orders {},
                        class: "text-sm text-blue-600 hover:text-blue-500",
                        "View all"
                    }
                }
                if let Some(page) = recent.data.read().as_ref() {
                    if page.items.is_empty() {
                        EmptyState { message: "No orders yet.".to_string() }
                    } else {
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            tbody {
                                class: "divide-y divide-gray-200",
                                for order in &page.items {
                                    tr {
                                        key: "{order.id}",
                                        class: "hover:bg-gray-50",
                                        td {
                                            class: "px-6 py-3 text-sm font-medium text-blue-600",
                                            Link {
                                                to: Route::OrderDetail { id: order.id },
                                                "{order.number}"
                                            }
                                        }
                                        td { class: "px-6 py-3 text-sm text-gray-700", "{order.customer_name}" }
                                        td {
                                            class: "px-6 py-3 text-sm text-gray-700",
                                            "{format_money(order.total, &order.currency)}"
                                        }
                                        td { class: "px-6 py-3", {status_badge(&order.status)} }
                                        td {
                                            class: "px-6 py-3 text-sm text-gray-500",
                                            if let Some(created) = &order.created_at {
                                                "{format_date(created)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else if recent.error.read().is_some() {
                    div {
                        class: "p-6",
                        PageError { message: recent.error.read().as_ref().map(|e| e.message.clone()).unwrap_or_default() }
                    }
                } else {
                    div { class: "p-6", PageSkeleton {} }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow px-6 py-5",
            p { class: "text-sm font-medium text-gray-500", "{label}" }
            p { class: "mt-1 text-2xl font-semibold text-gray-900", "{value}" }
        }
    }
}
