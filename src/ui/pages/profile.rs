// src/ui/pages/profile.rs - Company profile, bank details, KYC, and terms

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient, FilePart, MultipartForm};
use crate::forms;
use crate::models::{Country, Currency, KycState, KycStatus, SellerProfile, TermsStatus};
use crate::query::{use_detail_query, use_mutation, use_reference_query, ResourceKind};
use crate::ui::components::{status_badge, FileField, SelectField, TextAreaField, TextField};
use crate::ui::pages::{remove_picked, PageError, PageSkeleton, PageWrapper};
use crate::ui::state::use_notify;

#[component]
pub fn Profile() -> Element {
    rsx! {
        PageWrapper {
            title: "Profile",
            subtitle: Some("Company details, payout account, and verification.".to_string()),

            ProfileLoader {}
            KycPanel {}
            TermsPanel {}
        }
    }
}

/// Loads the profile before mounting the form so field signals initialize
/// exactly once from the fetched values.
#[component]
fn ProfileLoader() -> Element {
    let api = use_context::<ApiClient>();
    let stale = api.config().list_stale_secs;

    let query = use_detail_query::<SellerProfile>(ResourceKind::Profile, Some(stale), || {
        endpoints::profile::SHOW.to_string()
    });

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageError { message }
        };
    }
    let data = query.data.read().clone();
    let Some(profile) = data else {
        return rsx! {
            PageSkeleton {}
        };
    };

    rsx! {
        ProfileForm { profile }
    }
}

#[component]
fn ProfileForm(profile: SellerProfile) -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let mutation = use_mutation();

    // Initialized once from the fetched profile; a cache refresh while the
    // user is typing must not clobber their edits.
    let initial = use_hook(|| profile.clone());
    let mut company_name = use_signal(|| initial.company_name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut phone = use_signal(|| initial.phone.clone());
    let mut address = use_signal(|| initial.address.clone());
    let mut country_id = use_signal(|| {
        initial.country_id.map(|id| id.to_string()).unwrap_or_default()
    });
    let mut currency_id = use_signal(|| {
        initial.currency_id.map(|id| id.to_string()).unwrap_or_default()
    });
    let mut bank_name = use_signal(|| initial.bank.bank_name.clone());
    let mut account_holder = use_signal(|| initial.bank.account_holder.clone());
    let mut iban = use_signal(|| initial.bank.iban.clone());
    let mut swift = use_signal(|| initial.bank.swift.clone());
    let mut logo_file = use_signal(|| None::<FilePart>);

    let countries = use_reference_query::<Country>(endpoints::reference::COUNTRIES);
    let currencies = use_reference_query::<Currency>(endpoints::reference::CURRENCIES);

    let country_options: Vec<(String, String)> = countries
        .data
        .read()
        .as_ref()
        .map(|list| {
            list.iter()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect()
        })
        .unwrap_or_default();
    let currency_options: Vec<(String, String)> = currencies
        .data
        .read()
        .as_ref()
        .map(|list| {
            list.iter()
                .map(|c| (c.id.to_string(), c.code.clone()))
                .collect()
        })
        .unwrap_or_default();

    let current_logo = initial.logo.clone();

    let submit_api = api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut errors = crate::error::FieldErrors::new();
        forms::require(&mut errors, "company_name", &company_name.read(), "Company name");
        forms::require_email(&mut errors, "email", &email.read());

        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let api = submit_api.clone();
        let logo = logo_file.read().clone();

        // A picked logo forces the multipart path; otherwise plain JSON.
        if let Some(logo) = logo {
            let form = MultipartForm::new()
                .method_override("PUT")
                .text("company_name", company_name.read().trim())
                .text("email", email.read().trim())
                .text("phone", phone.read().trim())
                .text("address", address.read().trim())
                .maybe_text("country_id", country_id.read().parse::<u64>().ok())
                .maybe_text("currency_id", currency_id.read().parse::<u64>().ok())
                .text("bank[bank_name]", bank_name.read().trim())
                .text("bank[account_holder]", account_holder.read().trim())
                .text("bank[iban]", iban.read().trim())
                .text("bank[swift]", swift.read().trim())
                .file("logo", logo);

            mutation.execute(
                &[ResourceKind::Profile],
                async move {
                    api.post_multipart::<serde_json::Value>(endpoints::profile::SHOW, form)
                        .await
                },
                move |_| {
                    logo_file.set(None);
                    notify.success("Profile saved", "Changes applied");
                },
            );
        } else {
            let payload = serde_json::json!({
                "company_name": company_name.read().trim(),
                "email": email.read().trim(),
                "phone": phone.read().trim(),
                "address": address.read().trim(),
                "country_id": country_id.read().parse::<u64>().ok(),
                "currency_id": currency_id.read().parse::<u64>().ok(),
                "bank": {
                    "bank_name": bank_name.read().trim(),
                    "account_holder": account_holder.read().trim(),
                    "iban": iban.read().trim(),
                    "swift": swift.read().trim(),
                },
            });
            mutation.execute(
                &[ResourceKind::Profile],
                async move {
                    api.put_json::<_, serde_json::Value>(endpoints::profile::SHOW, &payload)
                        .await
                },
                move |_| notify.success("Profile saved", "Changes applied"),
            );
        }
    };

    let errors = mutation.field_errors.read().clone();

    rsx! {
        form {
            class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
            onsubmit: on_submit,

            h2 { class: "text-lg font-medium text-gray-900", "Company" }

            if let Some(message) = mutation.error.read().as_ref() {
                div {
                    class: "rounded-md bg-red-50 p-4",
                    p { class: "text-sm font-medium text-red-800", "{message}" }
                }
            }

            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                TextField {
                    label: "Company name",
                    value: company_name.read().clone(),
                    error: errors.first("company_name").map(str::to_string),
                    on_input: move |v| company_name.set(v),
                }
                TextField {
                    label: "Email",
                    value: email.read().clone(),
                    input_type: "email",
                    error: errors.first("email").map(str::to_string),
                    on_input: move |v| email.set(v),
                }
                TextField {
                    label: "Phone",
                    value: phone.read().clone(),
                    error: errors.first("phone").map(str::to_string),
                    on_input: move |v| phone.set(v),
                }
                div {
                    FileField {
                        label: "Logo",
                        on_file: move |file| logo_file.set(Some(file)),
                    }
                    if let Some(picked) = logo_file.read().as_ref() {
                        p {
                            class: "mt-1 text-sm text-gray-500",
                            "Selected: {picked.filename} "
                            button {
                                r#type: "button",
                                class: "ml-2 font-medium text-red-600 hover:text-red-500",
                                onclick: move |_| logo_file.set(None),
                                "Remove"
                            }
                        }
                    } else if let Some(existing) = &current_logo {
                        p { class: "mt-1 text-sm text-gray-500", "Current: {existing}" }
                    }
                }
            }
            TextAreaField {
                label: "Address",
                value: address.read().clone(),
                rows: 2,
                error: errors.first("address").map(str::to_string),
                on_input: move |v| address.set(v),
            }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                SelectField {
                    label: "Country",
                    value: country_id.read().clone(),
                    options: country_options,
                    placeholder: Some("Choose a country".to_string()),
                    error: errors.first("country_id").map(str::to_string),
                    on_change: move |v| country_id.set(v),
                }
                SelectField {
                    label: "Currency",
                    value: currency_id.read().clone(),
                    options: currency_options,
                    placeholder: Some("Choose a currency".to_string()),
                    error: errors.first("currency_id").map(str::to_string),
                    on_change: move |v| currency_id.set(v),
                }
            }

            h2 { class: "text-lg font-medium text-gray-900 pt-2", "Payout account" }
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                TextField {
                    label: "Bank name",
                    value: bank_name.read().clone(),
                    error: errors.first("bank.bank_name").map(str::to_string),
                    on_input: move |v| bank_name.set(v),
                }
                TextField {
                    label: "Account holder",
                    value: account_holder.read().clone(),
                    error: errors.first("bank.account_holder").map(str::to_string),
                    on_input: move |v| account_holder.set(v),
                }
                TextField {
                    label: "IBAN",
                    value: iban.read().clone(),
                    error: errors.first("bank.iban").map(str::to_string),
                    on_input: move |v| iban.set(v),
                }
                TextField {
                    label: "SWIFT / BIC",
                    value: swift.read().clone(),
                    error: errors.first("bank.swift").map(str::to_string),
                    on_input: move |v| swift.set(v),
                }
            }

            div {
                class: "flex justify-end pt-2",
                button {
                    r#type: "submit",
                    class: "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                    disabled: *mutation.pending.read(),
                    if *mutation.pending.read() { "Saving..." } else { "Save profile" }
                }
            }
        }
    }
}

#[component]
fn KycPanel() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let stale = api.config().list_stale_secs;
    let mutation = use_mutation();

    let query = use_detail_query::<KycStatus>(ResourceKind::Profile, Some(stale), || {
        endpoints::profile::KYC_STATUS.to_string()
    });
    let mut documents = use_signal(Vec::<FilePart>::new);

    let submit_api = api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if documents.read().is_empty() {
            let mut errors = crate::error::FieldErrors::new();
            errors.push("documents", "Attach at least one document");
            mutation.reject(errors);
            return;
        }
        let api = submit_api.clone();
        let form = MultipartForm::new().files("documents[]", &documents.read());
        mutation.execute(
            &[ResourceKind::Profile],
            async move {
                api.post_multipart::<serde_json::Value>(endpoints::profile::KYC, form)
                    .await
            },
            move |_| {
                documents.set(Vec::new());
                notify.success("Documents submitted", "Verification is now under review");
            },
        );
    };

    let errors = mutation.field_errors.read().clone();
    let status = query.data.read().clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
            h2 { class: "text-lg font-medium text-gray-900", "Verification (KYC)" }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if let Some(status) = status {
                div {
                    class: "flex items-center space-x-3",
                    {status_badge(&status.status)}
                    if let Some(reason) = &status.rejection_reason {
                        p { class: "text-sm text-red-600", "{reason}" }
                    }
                }

                // Approved sellers have nothing left to submit.
                if status.status != KycState::Approved && status.status != KycState::Pending {
                    form {
                        class: "space-y-3",
                        onsubmit: on_submit,

                        if let Some(message) = mutation.error.read().as_ref() {
                            div {
                                class: "rounded-md bg-red-50 p-4",
                                p { class: "text-sm font-medium text-red-800", "{message}" }
                            }
                        }

                        FileField {
                            label: "Identity and company documents",
                            accept: "image/*,application/pdf".to_string(),
                            multiple: true,
                            error: errors.first("documents").map(str::to_string),
                            on_file: move |file| documents.with_mut(|d| d.push(file)),
                        }
                        if !documents.read().is_empty() {
                            ul {
                                class: "text-sm text-gray-500 space-y-1",
                                for (i, doc) in documents.read().iter().enumerate() {
                                    li {
                                        class: "flex items-center space-x-3",
                                        span { "{doc.filename}" }
                                        button {
                                            r#type: "button",
                                            class: "font-medium text-red-600 hover:text-red-500",
                                            onclick: move |_| documents.with_mut(|d| remove_picked(d, i)),
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                            disabled: *mutation.pending.read(),
                            if *mutation.pending.read() { "Submitting..." } else { "Submit for review" }
                        }
                    }
                }
            } else {
                PageSkeleton {}
            }
        }
    }
}

#[component]
fn TermsPanel() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let stale = api.config().list_stale_secs;
    let mutation = use_mutation();

    let query = use_detail_query::<TermsStatus>(ResourceKind::Profile, Some(stale), || {
        endpoints::profile::TERMS.to_string()
    });

    let accept_api = api.clone();
    let on_accept = move |_| {
        let api = accept_api.clone();
        mutation.execute(
            &[ResourceKind::Profile],
            async move {
                api.post_json::<_, serde_json::Value>(
                    endpoints::profile::TERMS_ACCEPT,
                    &serde_json::json!({}),
                )
                .await
            },
            move |_| notify.success("Terms accepted", "Thank you"),
        );
    };

    let terms = query.data.read().clone();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
            h2 { class: "text-lg font-medium text-gray-900", "Seller terms" }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if let Some(terms) = terms {
                if let Some(version) = &terms.version {
                    p { class: "text-sm text-gray-500", "Version {version}" }
                }
                if let Some(content) = &terms.content {
                    div {
                        class: "max-h-64 overflow-y-auto rounded-md border border-gray-200 p-4 text-sm text-gray-700 whitespace-pre-wrap",
                        "{content}"
                    }
                }
                if terms.accepted {
                    p { class: "text-sm text-green-700", "You have accepted the current terms." }
                } else {
                    div {
                        if let Some(message) = mutation.error.read().as_ref() {
                            div {
                                class: "rounded-md bg-red-50 p-4 mb-3",
                                p { class: "text-sm font-medium text-red-800", "{message}" }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                            disabled: *mutation.pending.read(),
                            onclick: on_accept,
                            if *mutation.pending.read() { "Accepting..." } else { "Accept terms" }
                        }
                    }
                }
            } else {
                PageSkeleton {}
            }
        }
    }
}
