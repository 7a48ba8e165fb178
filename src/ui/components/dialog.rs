// src/ui/components/dialog.rs - Modal and confirmation dialog

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Element,
}

/// Centered modal over a dimmed backdrop. Clicking the backdrop or the
/// close button dismisses it; content clicks do not.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 overflow-y-auto",
            div {
                class: "fixed inset-0 bg-gray-600 bg-opacity-75",
                onclick: move |_| props.on_close.call(()),
            }
            div {
                class: "flex min-h-screen items-center justify-center p-4",
                div {
                    class: "relative bg-white rounded-lg shadow-xl max-w-2xl w-full",
                    div {
                        class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                        h3 { class: "text-lg font-medium text-gray-900", "{props.title}" }
                        button {
                            r#type: "button",
                            class: "text-gray-400 hover:text-gray-500",
                            onclick: move |_| props.on_close.call(()),
                            span { class: "sr-only", "Close" }
                            svg {
                                class: "h-6 w-6",
                                xmlns: "http://www.w3.org/2000/svg",
                                fill: "none",
                                view_box: "0 0 24 24",
                                stroke: "currentColor",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M6 18L18 6M6 6l12 12"
                                }
                            }
                        }
                    }
                    div { class: "px-6 py-4", {props.children} }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    #[props(default = "Confirm".to_string())]
    pub confirm_label: String,
    /// Disables the confirm button while the mutation runs.
    #[props(default = false)]
    pub pending: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Destructive actions (delete product, delete coupon, remove member) go
/// through this dialog; nothing is issued until the user confirms.
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 overflow-y-auto",
            div {
                class: "fixed inset-0 bg-gray-600 bg-opacity-75",
                onclick: move |_| props.on_cancel.call(()),
            }
            div {
                class: "flex min-h-screen items-center justify-center p-4",
                div {
                    class: "relative bg-white rounded-lg shadow-xl max-w-md w-full px-6 py-5",
                    h3 { class: "text-lg font-medium text-gray-900", "{props.title}" }
                    p { class: "mt-2 text-sm text-gray-500", "{props.message}" }
                    div {
                        class: "mt-5 flex justify-end space-x-3",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-sm font-medium rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-sm font-medium rounded-md bg-red-600 text-white hover:bg-red-700 disabled:opacity-50",
                            disabled: props.pending,
                            onclick: move |_| props.on_confirm.call(()),
                            "{props.confirm_label}"
                        }
                    }
                }
            }
        }
    }
}
