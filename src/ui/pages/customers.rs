// src/ui/pages/customers.rs - Customer directory

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::models::Customer;
use crate::query::{use_debounced, use_filter_reset, use_page_query, ResourceKind};
use crate::ui::components::{Pager, SearchToolbar};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::Route;
use crate::utils::format_money;

#[component]
pub fn Customers() -> Element {
    let api = use_context::<ApiClient>();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter_signature()
    });

    let query = use_page_query::<Customer>(ResourceKind::Customers, move || {
        let list = ListQuery::new(*page.read(), per_page).search(&search.settled.read());
        format!("{}{}", endpoints::customers::LIST, list.to_query_string())
    });

    rsx! {
        PageWrapper {
            title: "Customers",

            SearchToolbar {
                placeholder: "Search by name or email...",
                search,
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No customers match the current filters.".to_string() }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Email" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Phone" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Orders" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Total spent" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for customer in &page_data.items {
                                    tr {
                                        key: "{customer.id}",
                                        class: "hover:bg-gray-50",
                                        td {
                                            class: "px-6 py-4 text-sm font-medium text-blue-600",
                                            Link {
                                                to: Route::CustomerDetail { id: customer.id },
                                                "{customer.full_name()}"
                                            }
                                        }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{customer.email}" }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-500",
                                            "{customer.phone.as_deref().unwrap_or(\"—\")}"
                                        }
                                        td { class: "px-6 py-4 text-sm text-gray-700", "{customer.orders_count}" }
                                        td {
                                            class: "px-6 py-4 text-sm text-gray-700",
                                            "{format_money(customer.total_spent, \"USD\")}"
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for customer in &page_data.items {
                                div {
                                    key: "{customer.id}",
                                    class: "px-4 py-4 space-y-1",
                                    Link {
                                        to: Route::CustomerDetail { id: customer.id },
                                        class: "text-sm font-medium text-blue-600",
                                        "{customer.full_name()}"
                                    }
                                    p { class: "text-sm text-gray-700", "{customer.email}" }
                                    p {
                                        class: "text-sm text-gray-500",
                                        "{customer.orders_count} orders · {format_money(customer.total_spent, \"USD\")}"
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
