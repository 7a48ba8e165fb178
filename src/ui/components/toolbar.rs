// src/ui/components/toolbar.rs - Search input bound to debounced state

use dioxus::prelude::*;

use crate::query::Debounced;

#[derive(Props, Clone, PartialEq)]
pub struct SearchToolbarProps {
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
    /// The page's debounced search state. The input shows the immediate
    /// value; queries elsewhere read the settled one.
    pub search: Debounced,
    /// Extra filter controls rendered to the right of the input.
    #[props(default)]
    pub children: Element,
}

#[component]
pub fn SearchToolbar(props: SearchToolbarProps) -> Element {
    let search = props.search;
    let value = search.immediate.read().clone();

    rsx! {
        div {
            class: "flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3 mb-4",
            div {
                class: "relative flex-1 max-w-md",
                div {
                    class: "pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3",
                    svg {
                        class: "h-5 w-5 text-gray-400",
                        xmlns: "http://www.w3.org/2000/svg",
                        fill: "none",
                        view_box: "0 0 24 24",
                        stroke: "currentColor",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                        }
                    }
                }
                input {
                    r#type: "search",
                    class: "block w-full rounded-md border border-gray-300 pl-10 pr-3 py-2 text-sm placeholder-gray-400 focus:border-blue-500 focus:ring-blue-500",
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            div { class: "flex items-center gap-2", {props.children} }
        }
    }
}
