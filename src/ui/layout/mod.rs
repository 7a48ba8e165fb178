// src/ui/layout/mod.rs - Dashboard chrome around every protected page

use dioxus::prelude::*;

mod footer;
mod header;
mod sidebar;

pub use footer::Footer;
pub use header::Header;
pub use sidebar::Sidebar;

use crate::ui::components::ToastStack;

/// The authenticated shell: header, collapsible sidebar, content area, and
/// the toast stack. Auth pages render outside of this.
#[component]
pub fn Layout(children: Element) -> Element {
    let mut sidebar_collapsed = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            Header {
                on_menu_toggle: move |_| {
                    let open = *mobile_open.peek();
                    mobile_open.set(!open);
                },
                on_sidebar_toggle: move |_| {
                    let collapsed = *sidebar_collapsed.peek();
                    sidebar_collapsed.set(!collapsed);
                },
            }

            Sidebar {
                collapsed: sidebar_collapsed(),
                mobile_open: mobile_open(),
                on_close: move |_| mobile_open.set(false),
            }

            div {
                class: format!(
                    "flex flex-col min-h-screen pt-16 transition-all duration-200 {}",
                    if sidebar_collapsed() { "lg:pl-16" } else { "lg:pl-64" }
                ),
                main {
                    class: "flex-1 px-4 sm:px-6 lg:px-8 py-6",
                    {children}
                }
                Footer {}
            }

            ToastStack {}
        }
    }
}
