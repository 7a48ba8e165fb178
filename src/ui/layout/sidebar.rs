// src/ui/layout/sidebar.rs - Section navigation

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::ui::router::{nav, Route};

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Collapsed to icons-only on desktop.
    pub collapsed: bool,
    /// Overlay state on small screens.
    pub mobile_open: bool,
    pub on_close: Callback<()>,
}

struct NavEntry {
    label: &'static str,
    route: Route,
    /// SVG path data for the entry's icon.
    icon: &'static str,
}

fn entries() -> Vec<NavEntry> {
    vec![
        NavEntry {
            label: "Dashboard",
            route: Route::Dashboard {},
            icon: "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
        },
        NavEntry {
            label: "Products",
            route: Route::Products {},
            icon: "M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4",
        },
        NavEntry {
            label: "Orders",
            route: Route::Orders {},
            icon: "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
        },
        NavEntry {
            label: "Inventory",
            route: Route::Inventory {},
            icon: "M5 8h14M5 8a2 2 0 110-4h14a2 2 0 110 4M5 8v10a2 2 0 002 2h10a2 2 0 002-2V8m-9 4h4",
        },
        NavEntry {
            label: "Customers",
            route: Route::Customers {},
            icon: "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
        },
        NavEntry {
            label: "Promotions",
            route: Route::Promotions {},
            icon: "M11 5.882V19.24a1.76 1.76 0 01-3.417.592l-2.147-6.15M18 13a3 3 0 100-6M5.436 13.683A4.001 4.001 0 017 6h1.832c4.1 0 7.625-1.234 9.168-3v14c-1.543-1.766-5.067-3-9.168-3H7a3.988 3.988 0 01-1.564-.317z",
        },
        NavEntry {
            label: "Coupons",
            route: Route::Coupons {},
            icon: "M15 5v2m0 4v2m0 4v2M5 5a2 2 0 00-2 2v3a2 2 0 110 4v3a2 2 0 002 2h14a2 2 0 002-2v-3a2 2 0 110-4V7a2 2 0 00-2-2H5z",
        },
        NavEntry {
            label: "Team",
            route: Route::Team {},
            icon: "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
        },
        NavEntry {
            label: "Profile",
            route: Route::Profile {},
            icon: "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        },
    ]
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        // Desktop sidebar
        div {
            class: format!(
                "hidden lg:flex lg:flex-col lg:fixed lg:inset-y-0 lg:z-40 lg:transition-all lg:duration-200 {}",
                if props.collapsed { "lg:w-16" } else { "lg:w-64" }
            ),
            div {
                class: "flex flex-col flex-grow bg-white border-r border-gray-200 pt-16 pb-4 overflow-y-auto",
                nav {
                    class: "flex-1 px-2 mt-4 space-y-1",
                    for entry in entries() {
                        NavLink {
                            label: entry.label,
                            icon: entry.icon,
                            route: entry.route.clone(),
                            active: nav::is_active_route(&current_route, &entry.route),
                            collapsed: props.collapsed,
                            on_navigate: None,
                        }
                    }
                }
            }
        }

        // Mobile overlay
        if props.mobile_open {
            div {
                class: "lg:hidden fixed inset-0 z-50 flex",
                div {
                    class: "fixed inset-0 bg-gray-600 bg-opacity-75",
                    onclick: move |_| props.on_close.call(()),
                }
                div {
                    class: "relative flex flex-col flex-1 w-64 max-w-xs bg-white pt-16 pb-4 overflow-y-auto",
                    nav {
                        class: "flex-1 px-2 mt-4 space-y-1",
                        for entry in entries() {
                            NavLink {
                                label: entry.label,
                                icon: entry.icon,
                                route: entry.route.clone(),
                                active: nav::is_active_route(&current_route, &entry.route),
                                collapsed: false,
                                on_navigate: Some(props.on_close),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    label: &'static str,
    icon: &'static str,
    route: Route,
    active: bool,
    collapsed: bool,
    on_navigate: Option<Callback<()>>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let class = if props.active {
        "bg-blue-50 text-blue-700 group flex items-center px-2 py-2 text-sm font-medium rounded-md"
    } else {
        "text-gray-600 hover:bg-gray-50 hover:text-gray-900 group flex items-center px-2 py-2 text-sm font-medium rounded-md"
    };

    rsx! {
        Link {
            to: props.route.clone(),
            class: "{class}",
            onclick: move |_| {
                if let Some(on_navigate) = &props.on_navigate {
                    on_navigate.call(());
                }
            },
            svg {
                class: "h-5 w-5 flex-shrink-0",
                xmlns: "http://www.w3.org/2000/svg",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "{props.icon}"
                }
            }
            if !props.collapsed {
                span { class: "ml-3", "{props.label}" }
            }
        }
    }
}
