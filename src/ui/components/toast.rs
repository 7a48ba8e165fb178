// src/ui/components/toast.rs - Transient notification stack

use dioxus::prelude::*;

use crate::ui::state::{use_app, use_notify};

/// Renders the toasts pushed through `Notifier`. Each one auto-dismisses
/// after its TTL; the close button dismisses early.
#[component]
pub fn ToastStack() -> Element {
    let app = use_app();
    let notify = use_notify();
    let notifications = app.notifications.read().clone();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col space-y-2 w-80",
            for notification in notifications {
                div {
                    key: "{notification.id}",
                    class: "border-l-4 rounded-md shadow-lg p-4 {notification.kind.accent_class()}",
                    div {
                        class: "flex items-start justify-between",
                        div {
                            p { class: "text-sm font-medium", "{notification.title}" }
                            if !notification.message.is_empty() {
                                p { class: "mt-1 text-sm opacity-90", "{notification.message}" }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "ml-3 opacity-60 hover:opacity-100",
                            onclick: move |_| notify.dismiss(notification.id),
                            span { class: "sr-only", "Dismiss" }
                            svg {
                                class: "h-4 w-4",
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
                }
            }
        }
    }
}
