// src/ui/pages/mod.rs - Page components

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::FilePart;
use crate::ui::router::{nav, Route};

mod auth;
mod coupons;
mod customer_detail;
mod customers;
mod dashboard;
mod inventory;
mod not_found;
mod order_detail;
mod orders;
mod product_detail;
mod product_form;
mod products;
mod profile;
mod promotions;
mod team;

pub use auth::{ForgotPassword, Login, Register, ResetPassword, VerifyEmail};
pub use coupons::Coupons;
pub use customer_detail::CustomerDetail;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use inventory::{Inventory, InventoryDetail};
pub use not_found::NotFound;
pub use order_detail::OrderDetail;
pub use orders::Orders;
pub use product_detail::ProductDetail;
pub use product_form::ProductForm;
pub use products::Products;
pub use profile::Profile;
pub use promotions::Promotions;
pub use team::Team;

/// Shared page header with optional subtitle and action buttons.
#[component]
pub fn PageWrapper(
    title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "md:flex md:items-center md:justify-between",
                div {
                    class: "flex-1 min-w-0",
                    h1 {
                        class: "text-2xl font-bold leading-7 text-gray-900 sm:truncate",
                        "{title}"
                    }
                    if let Some(subtitle) = subtitle {
                        p { class: "mt-1 text-sm text-gray-500", "{subtitle}" }
                    }
                }
                if let Some(actions) = actions {
                    div { class: "mt-4 flex md:mt-0 md:ml-4", {actions} }
                }
            }
            {children}
        }
    }
}

/// Pulsing placeholder shown on a first load, before any data exists.
#[component]
pub fn PageSkeleton() -> Element {
    rsx! {
        div {
            class: "space-y-4 animate-pulse",
            div { class: "h-8 bg-gray-200 rounded w-1/3" }
            for _ in 0..5 {
                div { class: "h-12 bg-gray-200 rounded" }
            }
        }
    }
}

/// Error panel for failed loads, with the message the API produced. Detail
/// views pass `back` so a dead link still offers a way to the owning list.
#[component]
pub fn PageError(message: String, #[props(default = None)] back: Option<Route>) -> Element {
    rsx! {
        div {
            class: "rounded-md bg-red-50 border border-red-200 p-4",
            p { class: "text-sm font-medium text-red-800", "Something went wrong" }
            p { class: "mt-1 text-sm text-red-700", "{message}" }
            if let Some(back) = back {
                Link {
                    to: back.clone(),
                    class: "mt-3 inline-block text-sm font-medium text-red-800 underline hover:text-red-600",
                    "Back to {nav::route_title(&back)}"
                }
            }
        }
    }
}

/// Drops a picked upload by its list position. Out-of-range indices are
/// ignored (a click racing a re-render).
pub(crate) fn remove_picked(files: &mut Vec<FilePart>, index: usize) {
    if index < files.len() {
        files.remove(index);
    }
}

/// Empty-state panel for lists with no rows for the current filters.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "text-center bg-white rounded-lg border border-dashed border-gray-300 px-6 py-12",
            p { class: "text-sm text-gray-500", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_picked_drops_only_that_file() {
        let mut files = vec![
            FilePart::new("front.jpg".to_string(), vec![1]),
            FilePart::new("back.jpg".to_string(), vec![2]),
        ];
        remove_picked(&mut files, 0);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "back.jpg");

        // A stale index from a superseded render is a no-op.
        remove_picked(&mut files, 5);
        assert_eq!(files.len(), 1);
    }
}
