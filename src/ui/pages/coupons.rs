// src/ui/pages/coupons.rs - Coupon list, modal editor and deletion

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::coupon_status_payload, endpoints::ListQuery, ApiClient};
use crate::forms;
use crate::models::{format_email_list, parse_email_list, Coupon};
use crate::query::{use_debounced, use_filter_reset, use_mutation, use_page_query, ResourceKind};
use crate::ui::components::{
    CheckboxField, ConfirmDialog, Modal, NumberField, Pager, SearchToolbar, TextAreaField,
    TextField,
};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::state::use_notify;
use crate::utils::format_date;

#[component]
pub fn Coupons() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let per_page = api.config().per_page;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);
    // None = closed, Some(None) = create, Some(Some(c)) = edit.
    let mut editor = use_signal::<Option<Option<Coupon>>>(|| None);
    let mut delete_target = use_signal::<Option<(u64, String)>>(|| None);
    let delete_mutation = use_mutation();
    let status_mutation = use_mutation();

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter_signature()
    });

    let query = use_page_query::<Coupon>(ResourceKind::Coupons, move || {
        let list = ListQuery::new(*page.read(), per_page).search(&search.settled.read());
        format!("{}{}", endpoints::coupons::LIST, list.to_query_string())
    });

    let toggle_api = api.clone();
    let on_toggle = move |coupon: Coupon| {
        let api = toggle_api.clone();
        let next = !coupon.is_active;
        let code = coupon.code.clone();
        status_mutation.execute(
            &[ResourceKind::Coupons],
            async move {
                api.put_json::<_, serde_json::Value>(
                    &endpoints::coupons::detail(coupon.id),
                    &coupon_status_payload(next),
                )
                .await
            },
            move |_| {
                notify.success(
                    if next { "Coupon activated" } else { "Coupon deactivated" },
                    &code,
                );
            },
        );
    };

    let delete_api = api.clone();
    let on_confirm_delete = move |_| {
        let Some((id, code)) = delete_target.read().clone() else {
            return;
        };
        let api = delete_api.clone();
        delete_mutation.execute(
            &[ResourceKind::Coupons],
            async move { api.delete(&endpoints::coupons::detail(id)).await },
            move |_| {
                notify.success("Coupon deleted", &code);
                delete_target.set(None);
            },
        );
    };

    rsx! {
        PageWrapper {
            title: "Coupons",
            actions: Some(rsx! {
                button {
                    r#type: "button",
                    class: "px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                    onclick: move |_| editor.set(Some(None)),
                    "New coupon"
                }
            }),

            SearchToolbar {
                placeholder: "Search by code...",
                search,
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No coupons yet. Create one to give customers a code.".to_string() }
                } else {
                    div {
                        class: format!(
                            "bg-white rounded-lg shadow overflow-hidden {}",
                            if *query.is_fetching.read() { "opacity-60" } else { "" }
                        ),
                        table {
                            class: "hidden md:table min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Code" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Discount" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Active" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Restrictions" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Expires" }
                                    th { class: "px-6 py-3" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for coupon in &page_data.items {
                                    CouponRow {
                                        key: "{coupon.id}",
                                        coupon: coupon.clone(),
                                        on_toggle: on_toggle.clone(),
                                        on_edit: move |c: Coupon| editor.set(Some(Some(c))),
                                        on_delete: move |(id, code)| delete_target.set(Some((id, code))),
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for coupon in &page_data.items {
                                CouponCard {
                                    key: "{coupon.id}",
                                    coupon: coupon.clone(),
                                    on_toggle: on_toggle.clone(),
                                    on_edit: move |c: Coupon| editor.set(Some(Some(c))),
                                    on_delete: move |(id, code)| delete_target.set(Some((id, code))),
                                }
                            }
                        }
                        Pager {
                            meta: page_data.meta.clone(),
                            fetching: *query.is_fetching.read(),
                            on_page: move |p| page.set(p),
                        }
                    }
                }
            }

            if let Some(initial) = editor.read().clone() {
                CouponEditor {
                    key: "{initial.as_ref().map(|c| c.id).unwrap_or(0)}",
                    initial,
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some((_, code)) = delete_target.read().clone() {
                ConfirmDialog {
                    title: "Delete coupon".to_string(),
                    message: format!("Delete coupon '{}'? Customers will no longer be able to redeem it.", code),
                    confirm_label: "Delete".to_string(),
                    pending: *delete_mutation.pending.read(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CouponRowProps {
    coupon: Coupon,
    on_toggle: Callback<Coupon>,
    on_edit: Callback<Coupon>,
    on_delete: Callback<(u64, String)>,
}

fn restrictions_label(coupon: &Coupon) -> String {
    match (&coupon.allowed_emails, coupon.usage_limit) {
        (Some(emails), Some(limit)) => format!("{} emails, {} uses", emails.len(), limit),
        (Some(emails), None) => format!("{} emails", emails.len()),
        (None, Some(limit)) => format!("{} uses", limit),
        (None, None) => "None".to_string(),
    }
}

#[component]
fn CouponRow(props: CouponRowProps) -> Element {
    let coupon = props.coupon.clone();
    let toggle_coupon = coupon.clone();
    let toggle_label = if coupon.is_active { "Deactivate" } else { "Activate" };
    let edit_coupon = coupon.clone();
    let delete_id = coupon.id;
    let delete_code = coupon.code.clone();

    let restrictions = restrictions_label(&coupon);

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 text-sm font-mono font-medium text-gray-900",
                "{coupon.code}"
            }
            td { class: "px-6 py-4 text-sm text-gray-700", "{coupon.discount_percent}%" }
            td {
                class: "px-6 py-4 text-sm",
                if coupon.is_active {
                    span { class: "text-green-700", "Yes" }
                } else {
                    span { class: "text-gray-400", "No" }
                }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{restrictions}" }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                if let Some(expires) = &coupon.expires_at {
                    "{format_date(expires)}"
                } else {
                    "Never"
                }
            }
            td {
                class: "px-6 py-4 text-right space-x-3 whitespace-nowrap",
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_toggle.call(toggle_coupon.clone()),
                    "{toggle_label}"
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_coupon.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_code.clone())),
                    "Delete"
                }
            }
        }
    }
}

/// Stacked-card form of a coupon row for narrow viewports.
#[component]
fn CouponCard(props: CouponRowProps) -> Element {
    let coupon = props.coupon.clone();
    let toggle_coupon = coupon.clone();
    let toggle_label = if coupon.is_active { "Deactivate" } else { "Activate" };
    let edit_coupon = coupon.clone();
    let delete_id = coupon.id;
    let delete_code = coupon.code.clone();

    let restrictions = restrictions_label(&coupon);
    let expires = coupon
        .expires_at
        .as_ref()
        .map(|d| format!("Expires {}", format_date(d)))
        .unwrap_or_else(|| "Never expires".to_string());

    rsx! {
        div {
            class: "px-4 py-4 space-y-2",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm font-mono font-medium text-gray-900", "{coupon.code}" }
                if coupon.is_active {
                    span { class: "text-sm text-green-700", "Active" }
                } else {
                    span { class: "text-sm text-gray-400", "Inactive" }
                }
            }
            p {
                class: "text-sm text-gray-500",
                "{coupon.discount_percent}% off · {restrictions} · {expires}"
            }
            div {
                class: "flex space-x-4 text-sm",
                button {
                    r#type: "button",
                    class: "font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_toggle.call(toggle_coupon.clone()),
                    "{toggle_label}"
                }
                button {
                    r#type: "button",
                    class: "font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_coupon.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_code.clone())),
                    "Delete"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CouponEditorProps {
    /// `None` creates, `Some` edits.
    initial: Option<Coupon>,
    on_close: Callback<()>,
}

#[component]
fn CouponEditor(props: CouponEditorProps) -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let mutation = use_mutation();

    let initial = props.initial.clone();
    let editing_id = initial.as_ref().map(|c| c.id);

    let mut code = use_signal(|| initial.as_ref().map(|c| c.code.clone()).unwrap_or_default());
    let mut discount = use_signal(|| {
        initial
            .as_ref()
            .map(|c| c.discount_percent.to_string())
            .unwrap_or_default()
    });
    let mut is_active = use_signal(|| initial.as_ref().map(|c| c.is_active).unwrap_or(true));
    let mut allowed_emails = use_signal(|| {
        initial
            .as_ref()
            .map(|c| format_email_list(&c.allowed_emails))
            .unwrap_or_default()
    });
    let mut usage_limit = use_signal(|| {
        initial
            .as_ref()
            .and_then(|c| c.usage_limit)
            .map(|v| v.to_string())
            .unwrap_or_default()
    });
    let mut expires_at = use_signal(|| {
        initial
            .as_ref()
            .and_then(|c| c.expires_at)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    let submit_api = api.clone();
    let on_close = props.on_close;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut errors = crate::error::FieldErrors::new();
        forms::require(&mut errors, "code", &code.read(), "Code");
        let discount_value = discount.read().parse::<f64>().unwrap_or(0.0);
        forms::require_percent(&mut errors, "discount_percent", discount_value, "Discount");

        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let expires = expires_at.read().trim().to_string();
        let payload = serde_json::json!({
            "code": code.read().trim(),
            "discount_percent": discount_value,
            "is_active": *is_active.read(),
            "allowed_emails": parse_email_list(&allowed_emails.read()),
            "usage_limit": usage_limit.read().parse::<u32>().ok(),
            "expires_at": if expires.is_empty() { None } else { Some(expires) },
        });

        let api = submit_api.clone();
        mutation.execute(
            &[ResourceKind::Coupons],
            async move {
                match editing_id {
                    Some(id) => {
                        api.put_json::<_, serde_json::Value>(
                            &endpoints::coupons::detail(id),
                            &payload,
                        )
                        .await
                    }
                    None => {
                        api.post_json::<_, serde_json::Value>(endpoints::coupons::LIST, &payload)
                            .await
                    }
                }
            },
            move |_| {
                notify.success(
                    "Coupon saved",
                    if editing_id.is_some() { "Changes applied" } else { "Coupon created" },
                );
                on_close.call(());
            },
        );
    };

    let errors = mutation.field_errors.read().clone();

    rsx! {
        Modal {
            title: if editing_id.is_some() { "Edit coupon".to_string() } else { "New coupon".to_string() },
            on_close: props.on_close,

            form {
                class: "space-y-4",
                onsubmit: on_submit,

                if let Some(message) = mutation.error.read().as_ref() {
                    div {
                        class: "rounded-md bg-red-50 p-4",
                        p { class: "text-sm font-medium text-red-800", "{message}" }
                    }
                }

                TextField {
                    label: "Code",
                    value: code.read().clone(),
                    placeholder: "e.g. WELCOME10",
                    error: errors.first("code").map(str::to_string),
                    on_input: move |v| code.set(v),
                }
                NumberField {
                    label: "Discount (%)",
                    value: discount.read().clone(),
                    error: errors.first("discount_percent").map(str::to_string),
                    on_input: move |v| discount.set(v),
                }
                CheckboxField {
                    label: "Active",
                    checked: *is_active.read(),
                    on_change: move |v| is_active.set(v),
                }
                TextAreaField {
                    label: "Allowed emails (comma separated, blank for everyone)",
                    value: allowed_emails.read().clone(),
                    rows: 3,
                    error: errors.first("allowed_emails").map(str::to_string),
                    on_input: move |v| allowed_emails.set(v),
                }
                div {
                    class: "grid grid-cols-2 gap-4",
                    NumberField {
                        label: "Usage limit",
                        value: usage_limit.read().clone(),
                        step: "1",
                        error: errors.first("usage_limit").map(str::to_string),
                        on_input: move |v| usage_limit.set(v),
                    }
                    TextField {
                        label: "Expires",
                        input_type: "date",
                        value: expires_at.read().clone(),
                        error: errors.first("expires_at").map(str::to_string),
                        on_input: move |v| expires_at.set(v),
                    }
                }

                div {
                    class: "flex justify-end space-x-3 pt-2",
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-sm font-medium rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 text-sm font-medium rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50",
                        disabled: *mutation.pending.read(),
                        if *mutation.pending.read() { "Saving..." } else { "Save coupon" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(allowed_emails: Option<Vec<String>>, usage_limit: Option<u32>) -> Coupon {
        Coupon {
            id: 1,
            code: "WELCOME10".to_string(),
            discount_percent: 10.0,
            is_active: true,
            allowed_emails,
            usage_limit,
            expires_at: None,
        }
    }

    // Both the table row and the stacked card render this summary.
    #[test]
    fn test_restrictions_label_summarizes_limits() {
        assert_eq!(restrictions_label(&coupon(None, None)), "None");
        assert_eq!(restrictions_label(&coupon(None, Some(50))), "50 uses");
        assert_eq!(
            restrictions_label(&coupon(Some(vec!["a@b.c".to_string()]), Some(5))),
            "1 emails, 5 uses"
        );
    }
}
