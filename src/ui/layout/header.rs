// src/ui/layout/header.rs - Top bar with branding, language, and user menu

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::api::ApiClient;
use crate::ui::{router::Route, state::use_app};

/// Languages offered in the header switcher. The picked code is persisted
/// and sent as `Accept-Language` on every request.
const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("de", "Deutsch"), ("fr", "Français")];

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub on_menu_toggle: Callback<()>,
    pub on_sidebar_toggle: Callback<()>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let app = use_app();
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut user_menu_open = use_signal(|| false);

    let user = app.session.read().as_ref().map(|s| s.user.clone());
    let language = app.language.read().clone();

    let logout_api = api.clone();
    let on_logout = move |_| {
        user_menu_open.set(false);
        logout_api.clear_session();
        navigator.push(Route::Login {});
    };

    rsx! {
        header {
            class: "fixed top-0 inset-x-0 z-50 bg-white border-b border-gray-200",
            div {
                class: "flex items-center justify-between h-16 px-4 sm:px-6 lg:px-8",

                div {
                    class: "flex items-center",
                    // Mobile menu button
                    button {
                        r#type: "button",
                        class: "inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 lg:hidden",
                        onclick: move |_| props.on_menu_toggle.call(()),
                        span { class: "sr-only", "Open main menu" }
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
                                d: "M4 6h16M4 12h16M4 18h16"
                            }
                        }
                    }
                    // Desktop sidebar toggle
                    button {
                        r#type: "button",
                        class: "hidden lg:inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-gray-500 hover:bg-gray-100 mr-4",
                        onclick: move |_| props.on_sidebar_toggle.call(()),
                        span { class: "sr-only", "Toggle sidebar" }
                        svg {
                            class: "h-5 w-5",
                            xmlns: "http://www.w3.org/2000/svg",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M4 6h16M4 12h8m-8 6h16"
                            }
                        }
                    }
                    Link {
                        to: Route::Dashboard {},
                        class: "flex items-center",
                        div {
                            class: "h-8 w-8 bg-blue-600 rounded-lg flex items-center justify-center",
                            span { class: "text-white font-bold text-sm", "S" }
                        }
                        span {
                            class: "ml-2 text-xl font-bold text-gray-900 hidden sm:block",
                            "SellerDesk"
                        }
                    }
                }

                div {
                    class: "flex items-center space-x-4",

                    select {
                        class: "text-sm border-gray-300 rounded-md text-gray-700",
                        value: "{language}",
                        onchange: move |evt| api.set_language(&evt.value()),
                        for (code, label) in LANGUAGES {
                            option { value: *code, "{label}" }
                        }
                    }

                    if let Some(user) = user {
                        div {
                            class: "relative",
                            button {
                                r#type: "button",
                                class: "flex items-center space-x-2 p-1 rounded-full hover:bg-gray-100",
                                onclick: move |_| {
                                    let open = *user_menu_open.peek();
                                    user_menu_open.set(!open);
                                },
                                if let Some(image) = &user.image {
                                    img {
                                        class: "h-8 w-8 rounded-full object-cover",
                                        src: "{image}",
                                        alt: "{user.full_name()}",
                                    }
                                } else {
                                    div {
                                        class: "h-8 w-8 rounded-full bg-blue-100 flex items-center justify-center",
                                        span {
                                            class: "text-sm font-medium text-blue-700",
                                            "{user.initials()}"
                                        }
                                    }
                                }
                                span {
                                    class: "hidden sm:block text-sm font-medium text-gray-700",
                                    "{user.full_name()}"
                                }
                            }

                            if user_menu_open() {
                                div {
                                    class: "absolute right-0 mt-2 w-48 bg-white rounded-md shadow-lg border border-gray-200 py-1 z-50",
                                    Link {
                                        to: Route::Profile {},
                                        class: "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                                        onclick: move |_| user_menu_open.set(false),
                                        "Profile"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                                        onclick: on_logout,
                                        "Sign out"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
