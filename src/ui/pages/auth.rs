// src/ui/pages/auth.rs - Login, registration, and password/email flows

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient};
use crate::error::FieldErrors;
use crate::forms;
use crate::models::auth::{Credentials, RegisterForm, ResetPasswordPayload, Session};
use crate::query::use_mutation;
use crate::ui::components::FieldError;
use crate::ui::router::Route;
use crate::ui::state::use_notify;

/// Centered card shared by every unauthenticated screen.
#[component]
fn AuthShell(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
            div {
                class: "max-w-md w-full space-y-8",
                div {
                    class: "text-center",
                    div {
                        class: "mx-auto h-12 w-12 bg-blue-600 rounded-lg flex items-center justify-center",
                        span { class: "text-white font-bold text-xl", "S" }
                    }
                    h2 { class: "mt-4 text-3xl font-extrabold text-gray-900", "{title}" }
                    p { class: "mt-2 text-sm text-gray-600", "{subtitle}" }
                }
                div {
                    class: "bg-white rounded-lg shadow px-6 py-8 space-y-6",
                    {children}
                }
            }
        }
    }
}

#[component]
fn AuthError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div {
                class: "rounded-md bg-red-50 p-4",
                p { class: "text-sm font-medium text-red-800", "{message}" }
            }
        },
        None => rsx! {},
    }
}

fn labeled_input(
    label: &'static str,
    input_type: &'static str,
    mut value: Signal<String>,
    error: Option<String>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                r#type: "{input_type}",
                class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:ring-blue-500",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            FieldError { error }
        }
    }
}

const SUBMIT_CLASS: &str = "w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50";

#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mutation = use_mutation();

    let email = use_signal(String::new);
    let password = use_signal(String::new);

    let submit_api = api.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require_email(&mut errors, "email", &email.peek());
        forms::require(&mut errors, "password", &password.peek(), "Password");
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = submit_api.clone();
        let credentials = Credentials {
            email: email.peek().trim().to_string(),
            password: password.peek().clone(),
        };
        let success_api = submit_api.clone();
        mutation.execute(
            &[],
            async move { api.post_json::<_, Session>(endpoints::auth::LOGIN, &credentials).await },
            move |session| {
                success_api.store_session(session);
                navigator.push(Route::Dashboard {});
            },
        );
    };

    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        AuthShell {
            title: "Sign in to SellerDesk",
            subtitle: "Manage your store from one place.",
            form {
                class: "space-y-4",
                onsubmit: on_submit,
                AuthError { message: mutation.error.read().clone() }
                {labeled_input("Email", "email", email, field_errors.first("email").map(str::to_string))}
                {labeled_input("Password", "password", password, field_errors.first("password").map(str::to_string))}
                button {
                    r#type: "submit",
                    class: SUBMIT_CLASS,
                    disabled: *mutation.pending.read(),
                    if *mutation.pending.read() { "Signing in..." } else { "Sign in" }
                }
                div {
                    class: "flex items-center justify-between text-sm",
                    Link {
                        to: Route::ForgotPassword {},
                        class: "text-blue-600 hover:text-blue-500",
                        "Forgot password?"
                    }
                    Link {
                        to: Route::Register {},
                        class: "text-blue-600 hover:text-blue-500",
                        "Create an account"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let notify = use_notify();
    let mutation = use_mutation();

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let password_confirmation = use_signal(String::new);

    let submit_api = api.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require(&mut errors, "first_name", &first_name.peek(), "First name");
        forms::require(&mut errors, "last_name", &last_name.peek(), "Last name");
        forms::require_email(&mut errors, "email", &email.peek());
        forms::require(&mut errors, "password", &password.peek(), "Password");
        if *password.peek() != *password_confirmation.peek() {
            errors.push("password_confirmation", "Passwords do not match");
        }
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = submit_api.clone();
        let form = RegisterForm {
            first_name: first_name.peek().trim().to_string(),
            last_name: last_name.peek().trim().to_string(),
            email: email.peek().trim().to_string(),
            password: password.peek().clone(),
            password_confirmation: password_confirmation.peek().clone(),
        };
        mutation.execute(
            &[],
            async move {
                api.post_json::<_, serde_json::Value>(endpoints::auth::REGISTER, &form)
                    .await
            },
            move |_| {
                notify.success("Account created", "Check your inbox to verify your email.");
                navigator.push(Route::Login {});
            },
        );
    };

    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        AuthShell {
            title: "Create your seller account",
            subtitle: "Start selling in a few minutes.",
            form {
                class: "space-y-4",
                onsubmit: on_submit,
                AuthError { message: mutation.error.read().clone() }
                div {
                    class: "grid grid-cols-2 gap-4",
                    {labeled_input("First name", "text", first_name, field_errors.first("first_name").map(str::to_string))}
                    {labeled_input("Last name", "text", last_name, field_errors.first("last_name").map(str::to_string))}
                }
                {labeled_input("Email", "email", email, field_errors.first("email").map(str::to_string))}
                {labeled_input("Password", "password", password, field_errors.first("password").map(str::to_string))}
                {labeled_input("Confirm password", "password", password_confirmation, field_errors.first("password_confirmation").map(str::to_string))}
                button {
                    r#type: "submit",
                    class: SUBMIT_CLASS,
                    disabled: *mutation.pending.read(),
                    if *mutation.pending.read() { "Creating account..." } else { "Create account" }
                }
                p {
                    class: "text-center text-sm text-gray-600",
                    "Already registered? "
                    Link {
                        to: Route::Login {},
                        class: "text-blue-600 hover:text-blue-500",
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let api = use_context::<ApiClient>();
    let mutation = use_mutation();

    let email = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require_email(&mut errors, "email", &email.peek());
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = api.clone();
        let payload = serde_json::json!({ "email": email.peek().trim() });
        mutation.execute(
            &[],
            async move {
                api.post_json::<_, serde_json::Value>(endpoints::auth::FORGOT_PASSWORD, &payload)
                    .await
            },
            move |_| sent.set(true),
        );
    };

    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        AuthShell {
            title: "Reset your password",
            subtitle: "We will email you a reset link.",
            if sent() {
                div {
                    class: "rounded-md bg-green-50 p-4",
                    p {
                        class: "text-sm font-medium text-green-800",
                        "If an account exists for that address, a reset link is on its way."
                    }
                }
                p {
                    class: "text-center text-sm text-gray-600",
                    Link {
                        to: Route::Login {},
                        class: "text-blue-600 hover:text-blue-500",
                        "Back to sign in"
                    }
                }
            } else {
                form {
                    class: "space-y-4",
                    onsubmit: on_submit,
                    AuthError { message: mutation.error.read().clone() }
                    {labeled_input("Email", "email", email, field_errors.first("email").map(str::to_string))}
                    button {
                        r#type: "submit",
                        class: SUBMIT_CLASS,
                        disabled: *mutation.pending.read(),
                        "Send reset link"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let notify = use_notify();
    let mutation = use_mutation();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let password_confirmation = use_signal(String::new);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require_email(&mut errors, "email", &email.peek());
        forms::require(&mut errors, "password", &password.peek(), "Password");
        if *password.peek() != *password_confirmation.peek() {
            errors.push("password_confirmation", "Passwords do not match");
        }
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = api.clone();
        let payload = ResetPasswordPayload {
            token: token.clone(),
            email: email.peek().trim().to_string(),
            password: password.peek().clone(),
            password_confirmation: password_confirmation.peek().clone(),
        };
        mutation.execute(
            &[],
            async move {
                api.post_json::<_, serde_json::Value>(endpoints::auth::RESET_PASSWORD, &payload)
                    .await
            },
            move |_| {
                notify.success("Password updated", "Sign in with your new password.");
                navigator.push(Route::Login {});
            },
        );
    };

    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        AuthShell {
            title: "Choose a new password",
            subtitle: "Enter the email the reset link was sent to.",
            form {
                class: "space-y-4",
                onsubmit: on_submit,
                AuthError { message: mutation.error.read().clone() }
                {labeled_input("Email", "email", email, field_errors.first("email").map(str::to_string))}
                {labeled_input("New password", "password", password, field_errors.first("password").map(str::to_string))}
                {labeled_input("Confirm password", "password", password_confirmation, field_errors.first("password_confirmation").map(str::to_string))}
                button {
                    r#type: "submit",
                    class: SUBMIT_CLASS,
                    disabled: *mutation.pending.read(),
                    "Update password"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum VerifyState {
    Verifying,
    Done,
    Failed,
}

#[component]
pub fn VerifyEmail(token: String) -> Element {
    let api = use_context::<ApiClient>();
    let mut state = use_signal(|| VerifyState::Verifying);

    // One-shot verification on mount.
    use_hook(move || {
        let api = api.clone();
        spawn(async move {
            let payload = serde_json::json!({ "token": token });
            match api
                .post_json::<_, serde_json::Value>(endpoints::auth::VERIFY_EMAIL, &payload)
                .await
            {
                Ok(_) => state.set(VerifyState::Done),
                Err(_) => state.set(VerifyState::Failed),
            }
        });
    });

    rsx! {
        AuthShell {
            title: "Email verification",
            subtitle: "Confirming your address.",
            match state() {
                VerifyState::Verifying => rsx! {
                    p { class: "text-center text-sm text-gray-600", "Verifying your email..." }
                },
                VerifyState::Done => rsx! {
                    div {
                        class: "rounded-md bg-green-50 p-4",
                        p {
                            class: "text-sm font-medium text-green-800",
                            "Your email is verified. You can sign in now."
                        }
                    }
                    p {
                        class: "text-center text-sm",
                        Link {
                            to: Route::Login {},
                            class: "text-blue-600 hover:text-blue-500",
                            "Go to sign in"
                        }
                    }
                },
                VerifyState::Failed => rsx! {
                    div {
                        class: "rounded-md bg-red-50 p-4",
                        p {
                            class: "text-sm font-medium text-red-800",
                            "This verification link is invalid or has expired."
                        }
                    }
                    ResendVerification {}
                },
            }
        }
    }
}

/// Shown when a verification link is dead; requests a fresh one.
#[component]
fn ResendVerification() -> Element {
    let api = use_context::<ApiClient>();
    let mutation = use_mutation();
    let email = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require_email(&mut errors, "email", &email.peek());
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = api.clone();
        let payload = serde_json::json!({ "email": email.peek().trim() });
        mutation.execute(
            &[],
            async move {
                api.post_json::<_, serde_json::Value>(
                    endpoints::auth::RESEND_VERIFICATION,
                    &payload,
                )
                .await
            },
            move |_| sent.set(true),
        );
    };

    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        if sent() {
            p {
                class: "text-center text-sm text-gray-600",
                "A new verification email is on its way."
            }
        } else {
            form {
                class: "space-y-4",
                onsubmit: on_submit,
                {labeled_input("Email", "email", email, field_errors.first("email").map(str::to_string))}
                button {
                    r#type: "submit",
                    class: SUBMIT_CLASS,
                    disabled: *mutation.pending.read(),
                    "Resend verification email"
                }
            }
        }
    }
}
