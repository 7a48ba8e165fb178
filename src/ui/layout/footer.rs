// src/ui/layout/footer.rs

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "border-t border-gray-200 bg-white",
            div {
                class: "px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between text-sm text-gray-500",
                span { "SellerDesk v{crate::VERSION}" }
                span { class: "hidden sm:block", "Seller administration panel" }
            }
        }
    }
}
