// src/ui/router.rs

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{layout::Layout, pages, state::use_session};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[route("/verify-email/:token")]
    VerifyEmail { token: String },
    #[route("/")]
    #[redirect("/dashboard", || Route::Dashboard {})]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/products")]
    Products {},
    #[route("/products/new")]
    ProductCreate {},
    #[route("/products/:id")]
    ProductDetail { id: u64 },
    #[route("/orders")]
    Orders {},
    #[route("/orders/:id")]
    OrderDetail { id: u64 },
    #[route("/inventory")]
    Inventory {},
    #[route("/inventory/:id")]
    InventoryDetail { id: u64 },
    #[route("/customers")]
    Customers {},
    #[route("/customers/:id")]
    CustomerDetail { id: u64 },
    #[route("/promotions")]
    Promotions {},
    #[route("/coupons")]
    Coupons {},
    #[route("/team")]
    Team {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Auth routes are not wrapped in the guard: they stay reachable while
// authenticated (only dashboard routes are protected).

#[component]
pub fn Login() -> Element {
    rsx! { pages::Login {} }
}

#[component]
pub fn Register() -> Element {
    rsx! { pages::Register {} }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! { pages::ForgotPassword {} }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    rsx! { pages::ResetPassword { token } }
}

#[component]
pub fn VerifyEmail(token: String) -> Element {
    rsx! { pages::VerifyEmail { token } }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Dashboard {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Dashboard {}
        }
    }
}

#[component]
pub fn Products() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Products {}
        }
    }
}

#[component]
pub fn ProductCreate() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::ProductForm { id: None }
        }
    }
}

#[component]
pub fn ProductDetail(id: u64) -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::ProductDetail { id }
        }
    }
}

#[component]
pub fn Orders() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Orders {}
        }
    }
}

#[component]
pub fn OrderDetail(id: u64) -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::OrderDetail { id }
        }
    }
}

#[component]
pub fn Inventory() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Inventory {}
        }
    }
}

#[component]
pub fn InventoryDetail(id: u64) -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::InventoryDetail { id }
        }
    }
}

#[component]
pub fn Customers() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Customers {}
        }
    }
}

#[component]
pub fn CustomerDetail(id: u64) -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::CustomerDetail { id }
        }
    }
}

#[component]
pub fn Promotions() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Promotions {}
        }
    }
}

#[component]
pub fn Coupons() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Coupons {}
        }
    }
}

#[component]
pub fn Team() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Team {}
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        AuthenticatedLayout {
            pages::Profile {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            pages::NotFound { path }
        }
    }
}

/// Guard for dashboard routes: anonymous visitors are redirected to the
/// auth entry. A 401 anywhere clears the session signal, so a navigation
/// back here lands on the redirect branch.
#[component]
pub fn AuthenticatedLayout(children: Element) -> Element {
    let session = use_session();
    let navigator = use_navigator();

    if session.read().is_some() {
        rsx! {
            Layout {
                {children}
            }
        }
    } else {
        navigator.push(Route::Login {});
        rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-50",
                div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
                p { class: "mt-4 text-gray-600", "Redirecting to login..." }
            }
        }
    }
}

pub mod nav {
    use super::*;

    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        std::mem::discriminant(current) == std::mem::discriminant(target)
    }

    /// The list screen that owns a detail route; error panels on a failed
    /// detail fetch link back to it.
    pub fn parent_list(route: &Route) -> Option<Route> {
        match route {
            Route::ProductDetail { .. } | Route::ProductCreate { .. } => Some(Route::Products {}),
            Route::OrderDetail { .. } => Some(Route::Orders {}),
            Route::InventoryDetail { .. } => Some(Route::Inventory {}),
            Route::CustomerDetail { .. } => Some(Route::Customers {}),
            _ => None,
        }
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Login { .. } => "Sign in",
            Route::Register { .. } => "Register",
            Route::ForgotPassword { .. } => "Forgot password",
            Route::ResetPassword { .. } => "Reset password",
            Route::VerifyEmail { .. } => "Verify email",
            Route::Home { .. } | Route::Dashboard { .. } => "Dashboard",
            Route::Products { .. } | Route::ProductCreate { .. } | Route::ProductDetail { .. } => {
                "Products"
            }
            Route::Orders { .. } | Route::OrderDetail { .. } => "Orders",
            Route::Inventory { .. } | Route::InventoryDetail { .. } => "Inventory",
            Route::Customers { .. } | Route::CustomerDetail { .. } => "Customers",
            Route::Promotions { .. } => "Promotions",
            Route::Coupons { .. } => "Coupons",
            Route::Team { .. } => "Team",
            Route::Profile { .. } => "Profile",
            Route::NotFound { .. } => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        assert_eq!(Route::Dashboard {}, Route::Dashboard {});
        assert_ne!(
            Route::ProductDetail { id: 1 },
            Route::ProductDetail { id: 2 }
        );
    }

    #[test]
    fn test_detail_routes_share_section_title() {
        assert_eq!(nav::route_title(&Route::Products {}), "Products");
        assert_eq!(nav::route_title(&Route::ProductDetail { id: 3 }), "Products");
        assert_eq!(nav::route_title(&Route::OrderDetail { id: 3 }), "Orders");
    }

    #[test]
    fn test_detail_routes_link_back_to_their_list() {
        assert_eq!(
            nav::parent_list(&Route::ProductDetail { id: 7 }),
            Some(Route::Products {})
        );
        assert_eq!(
            nav::parent_list(&Route::OrderDetail { id: 7 }),
            Some(Route::Orders {})
        );
        assert_eq!(
            nav::parent_list(&Route::InventoryDetail { id: 7 }),
            Some(Route::Inventory {})
        );
        assert_eq!(
            nav::parent_list(&Route::CustomerDetail { id: 7 }),
            Some(Route::Customers {})
        );
        assert_eq!(nav::parent_list(&Route::Products {}), None);
    }

    #[test]
    fn test_is_active_route_ignores_params() {
        assert!(nav::is_active_route(
            &Route::ProductDetail { id: 1 },
            &Route::ProductDetail { id: 99 }
        ));
        assert!(!nav::is_active_route(&Route::Products {}, &Route::Orders {}));
    }
}
