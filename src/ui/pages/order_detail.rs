// src/ui/pages/order_detail.rs - Order show view with status changes

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient};
use crate::models::{Order, OrderStatus};
use crate::query::{use_detail_query, use_mutation, ResourceKind};
use crate::ui::components::status_badge;
use crate::ui::pages::{PageError, PageSkeleton, PageWrapper};
use crate::ui::router::{nav, Route};
use crate::ui::state::use_notify;
use crate::utils::{format_date, format_money};

#[component]
pub fn OrderDetail(id: u64) -> Element {
    let api = use_context::<ApiClient>();
    let route = use_route::<Route>();
    let notify = use_notify();
    let stale = api.config().list_stale_secs;

    let query = use_detail_query::<Order>(ResourceKind::Orders, Some(stale), move || {
        endpoints::orders::detail(id)
    });
    let mutation = use_mutation();

    let status_api = api.clone();
    let on_status = move |status: OrderStatus| {
        let api = status_api.clone();
        let payload = endpoints::order_status_payload(status);
        mutation.execute(
            &[ResourceKind::Orders, ResourceKind::OrderKpi],
            async move {
                api.put_json::<_, serde_json::Value>(&endpoints::orders::status(id), &payload)
                    .await
            },
            move |_| notify.success("Order updated", status.label()),
        );
    };

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageWrapper {
                title: "Order",
                PageError { message, back: nav::parent_list(&route) }
            }
        };
    }
    let data = query.data.read().clone();
    let Some(order) = data else {
        return rsx! {
            PageWrapper { title: "Order", PageSkeleton {} }
        };
    };

    let current = order.status.as_str().to_string();

    rsx! {
        PageWrapper {
            title: "Order {order.number}",
            subtitle: order.created_at.as_ref().map(|c| format!("Placed {}", format_date(c))),
            actions: Some(rsx! {
                select {
                    class: "rounded-md border border-gray-300 px-3 py-2 text-sm disabled:opacity-50",
                    value: "{current}",
                    disabled: *mutation.pending.read(),
                    onchange: move |evt| {
                        if let Ok(status) = serde_json::from_value::<OrderStatus>(
                            serde_json::Value::String(evt.value()),
                        ) {
                            on_status(status);
                        }
                    },
                    for status in OrderStatus::all() {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
            }),

            if let Some(message) = mutation.error.read().as_ref() {
                div {
                    class: "rounded-md bg-red-50 p-4",
                    p { class: "text-sm font-medium text-red-800", "{message}" }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2 bg-white rounded-lg shadow overflow-hidden",
                    div {
                        class: "px-6 py-4 border-b border-gray-200",
                        h2 { class: "text-lg font-medium text-gray-900", "Items" }
                    }
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Product" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Qty" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Unit" }
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Subtotal" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for item in &order.items {
                                tr {
                                    key: "{item.id}",
                                    td {
                                        class: "px-6 py-4 text-sm text-gray-700",
                                        "{item.product_name}"
                                        if let Some(label) = &item.variant_label {
                                            span { class: "text-gray-400", " · {label}" }
                                        }
                                    }
                                    td { class: "px-6 py-4 text-sm text-gray-700", "{item.quantity}" }
                                    td {
                                        class: "px-6 py-4 text-sm text-gray-700",
                                        "{format_money(item.unit_price, &order.currency)}"
                                    }
                                    td {
                                        class: "px-6 py-4 text-sm text-gray-700",
                                        "{format_money(item.subtotal, &order.currency)}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "px-6 py-4 border-t border-gray-200 flex justify-end",
                        p {
                            class: "text-sm font-medium text-gray-900",
                            "Total: {format_money(order.total, &order.currency)}"
                        }
                    }
                }

                div {
                    class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
                    h2 { class: "text-lg font-medium text-gray-900", "Details" }
                    div {
                        p { class: "text-sm text-gray-500", "Status" }
                        div { class: "mt-1", {status_badge(&order.status)} }
                    }
                    div {
                        p { class: "text-sm text-gray-500", "Customer" }
                        p { class: "mt-1 text-sm text-gray-900", "{order.customer_name}" }
                    }
                    if let Some(address) = &order.shipping_address {
                        div {
                            p { class: "text-sm text-gray-500", "Shipping address" }
                            p { class: "mt-1 text-sm text-gray-900", "{address}" }
                        }
                    }
                }
            }
        }
    }
}
