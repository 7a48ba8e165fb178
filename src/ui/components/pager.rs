// src/ui/components/pager.rs - List pagination controls

use dioxus::prelude::*;

use crate::api::PageMeta;

#[derive(Props, Clone, PartialEq)]
pub struct PagerProps {
    pub meta: PageMeta,
    /// True while a refetch is in flight; both controls disable so rapid
    /// clicking cannot queue up page changes.
    pub fetching: bool,
    pub on_page: Callback<u32>,
}

#[component]
pub fn Pager(props: PagerProps) -> Element {
    let meta = props.meta.clone();
    let prev_disabled = !meta.has_prev() || props.fetching;
    let next_disabled = !meta.has_next() || props.fetching;
    let prev_page = meta.current_page.saturating_sub(1).max(1);
    let next_page = meta.current_page + 1;

    rsx! {
        div {
            class: "flex items-center justify-between border-t border-gray-200 bg-white px-4 py-3 sm:px-6",
            p {
                class: "text-sm text-gray-700",
                "Page {meta.current_page} of {meta.last_page} · {meta.total} total"
            }
            div {
                class: "flex space-x-2",
                button {
                    r#type: "button",
                    class: "relative inline-flex items-center rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                    disabled: prev_disabled,
                    onclick: move |_| props.on_page.call(prev_page),
                    "Previous"
                }
                button {
                    r#type: "button",
                    class: "relative inline-flex items-center rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50",
                    disabled: next_disabled,
                    onclick: move |_| props.on_page.call(next_page),
                    "Next"
                }
            }
        }
    }
}
