// src/ui/pages/not_found.rs

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "text-center",
            p { class: "text-6xl font-bold text-gray-300", "404" }
            h1 { class: "mt-4 text-2xl font-bold text-gray-900", "Page not found" }
            p { class: "mt-2 text-sm text-gray-500", "No page exists at /{path}" }
            Link {
                to: Route::Dashboard {},
                class: "mt-6 inline-block px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                "Back to dashboard"
            }
        }
    }
}
