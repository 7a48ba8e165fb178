// src/ui/pages/team.rs - Team members, roles, and permissions

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, endpoints::ListQuery, ApiClient};
use crate::forms;
use crate::models::{group_permissions, Role, TeamMember};
use crate::query::{
    use_debounced, use_detail_query, use_filter_reset, use_mutation, use_page_query, ResourceKind,
};
use crate::ui::components::{
    status_badge, ConfirmDialog, Modal, Pager, SearchToolbar, SelectField, TextField,
};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper};
use crate::ui::state::use_notify;

#[component]
pub fn Team() -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let per_page = api.config().per_page;
    let stale = api.config().list_stale_secs;

    let mut page = use_signal(|| 1u32);
    let search = use_debounced(api.config().search_debounce_ms);
    // None = closed, Some(None) = invite, Some(Some(m)) = edit.
    let mut editor = use_signal::<Option<Option<TeamMember>>>(|| None);
    let mut delete_target = use_signal::<Option<(u64, String)>>(|| None);
    let status_mutation = use_mutation();
    let delete_mutation = use_mutation();

    use_filter_reset(page, move || {
        ListQuery::default()
            .search(&search.settled.read())
            .filter_signature()
    });

    let query = use_page_query::<TeamMember>(ResourceKind::TeamMembers, move || {
        let list = ListQuery::new(*page.read(), per_page).search(&search.settled.read());
        format!("{}{}", endpoints::team::MEMBERS, list.to_query_string())
    });
    let roles = use_detail_query::<Vec<Role>>(ResourceKind::Roles, Some(stale), || {
        endpoints::team::ROLES.to_string()
    });

    let toggle_api = api.clone();
    let on_toggle = move |member: TeamMember| {
        let api = toggle_api.clone();
        let next = member.status.toggled();
        let payload = serde_json::json!({ "status": next.as_str() });
        status_mutation.execute(
            &[ResourceKind::TeamMembers],
            async move {
                api.put_json::<_, serde_json::Value>(
                    &endpoints::team::member_status(member.id),
                    &payload,
                )
                .await
            },
            move |_| notify.success("Member updated", next.label()),
        );
    };

    let delete_api = api.clone();
    let on_confirm_delete = move |_| {
        let Some((id, name)) = delete_target.read().clone() else {
            return;
        };
        let api = delete_api.clone();
        delete_mutation.execute(
            &[ResourceKind::TeamMembers],
            async move { api.delete(&endpoints::team::member(id)).await },
            move |_| {
                notify.success("Member removed", &name);
                delete_target.set(None);
            },
        );
    };

    let role_options: Vec<(String, String)> = roles
        .data
        .read()
        .as_ref()
        .map(|list| {
            list.iter()
                .map(|r| (r.id.to_string(), r.name.clone()))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        PageWrapper {
            title: "Team",
            subtitle: Some("People with access to this seller account.".to_string()),
            actions: Some(rsx! {
                button {
                    r#type: "button",
                    class: "px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700",
                    onclick: move |_| editor.set(Some(None)),
                    "Add member"
                }
            }),

            SearchToolbar {
                placeholder: "Search by name or email...",
                search,
            }

            if let Some(error) = query.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if *query.is_loading.read() {
                PageSkeleton {}
            } else if let Some(page_data) = query.data.read().as_ref() {
                if page_data.items.is_empty() {
                    EmptyState { message: "No team members match the current filters.".to_string() }
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
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Email" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Role" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for member in &page_data.items {
                                    MemberRow {
                                        key: "{member.id}",
                                        member: member.clone(),
                                        pending: *status_mutation.pending.read(),
                                        on_edit: move |m: TeamMember| editor.set(Some(Some(m))),
                                        on_toggle: on_toggle.clone(),
                                        on_delete: move |(id, name)| delete_target.set(Some((id, name))),
                                    }
                                }
                            }
                        }
                        div {
                            class: "md:hidden divide-y divide-gray-200",
                            for member in &page_data.items {
                                MemberCard {
                                    key: "{member.id}",
                                    member: member.clone(),
                                    pending: *status_mutation.pending.read(),
                                    on_edit: move |m: TeamMember| editor.set(Some(Some(m))),
                                    on_toggle: on_toggle.clone(),
                                    on_delete: move |(id, name)| delete_target.set(Some((id, name))),
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

            RolesPanel {}

            if let Some(initial) = editor.read().clone() {
                MemberEditor {
                    key: "{initial.as_ref().map(|m| m.id).unwrap_or(0)}",
                    initial,
                    role_options: role_options.clone(),
                    on_close: move |_| editor.set(None),
                }
            }

            if let Some((_, name)) = delete_target.read().clone() {
                ConfirmDialog {
                    title: "Remove member".to_string(),
                    message: format!("Remove {} from the team? Their access ends immediately.", name),
                    confirm_label: "Remove".to_string(),
                    pending: *delete_mutation.pending.read(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MemberRowProps {
    member: TeamMember,
    pending: bool,
    on_edit: Callback<TeamMember>,
    on_toggle: Callback<TeamMember>,
    on_delete: Callback<(u64, String)>,
}

#[component]
fn MemberRow(props: MemberRowProps) -> Element {
    let member = props.member.clone();
    let edit_member = member.clone();
    let toggle_member = member.clone();
    let delete_id = member.id;
    let delete_name = member.full_name();
    let toggle_label = member.status.toggled().label();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{member.full_name()}" }
            td { class: "px-6 py-4 text-sm text-gray-700", "{member.email}" }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{member.role_name.as_deref().unwrap_or(\"—\")}"
            }
            td { class: "px-6 py-4", {status_badge(&member.status)} }
            td {
                class: "px-6 py-4 text-right space-x-3",
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-gray-600 hover:text-gray-500 disabled:opacity-50",
                    disabled: props.pending,
                    onclick: move |_| props.on_toggle.call(toggle_member.clone()),
                    "Set {toggle_label}"
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_member.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "text-sm font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_name.clone())),
                    "Remove"
                }
            }
        }
    }
}

/// Stacked-card form of a member row for narrow viewports.
#[component]
fn MemberCard(props: MemberRowProps) -> Element {
    let member = props.member.clone();
    let edit_member = member.clone();
    let toggle_member = member.clone();
    let delete_id = member.id;
    let delete_name = member.full_name();
    let toggle_label = member.status.toggled().label();

    rsx! {
        div {
            class: "px-4 py-4 space-y-2",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm font-medium text-gray-900", "{member.full_name()}" }
                {status_badge(&member.status)}
            }
            p { class: "text-sm text-gray-700", "{member.email}" }
            p {
                class: "text-sm text-gray-500",
                "{member.role_name.as_deref().unwrap_or(\"—\")}"
            }
            div {
                class: "flex space-x-4 text-sm",
                button {
                    r#type: "button",
                    class: "font-medium text-gray-600 hover:text-gray-500 disabled:opacity-50",
                    disabled: props.pending,
                    onclick: move |_| props.on_toggle.call(toggle_member.clone()),
                    "Set {toggle_label}"
                }
                button {
                    r#type: "button",
                    class: "font-medium text-blue-600 hover:text-blue-500",
                    onclick: move |_| props.on_edit.call(edit_member.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "font-medium text-red-600 hover:text-red-500",
                    onclick: move |_| props.on_delete.call((delete_id, delete_name.clone())),
                    "Remove"
                }
            }
        }
    }
}

/// Shares the members page's roles cache entry; only one fetch is issued.
#[component]
fn RolesPanel() -> Element {
    let api = use_context::<ApiClient>();
    let stale = api.config().list_stale_secs;
    let roles = use_detail_query::<Vec<Role>>(ResourceKind::Roles, Some(stale), || {
        endpoints::team::ROLES.to_string()
    });
    let mut creating = use_signal(|| false);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow overflow-hidden",
            div {
                class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-medium text-gray-900", "Roles" }
                    p { class: "mt-1 text-sm text-gray-500", "Each role grants a fixed set of permissions." }
                }
                button {
                    r#type: "button",
                    class: "px-3 py-1.5 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50",
                    onclick: move |_| creating.set(true),
                    "New role"
                }
            }
            if creating() {
                RoleEditor { on_close: move |_| creating.set(false) }
            }
            if let Some(error) = roles.error.read().as_ref() {
                PageError { message: error.message.clone() }
            } else if let Some(list) = roles.data.read().as_ref() {
                div {
                    class: "divide-y divide-gray-200",
                    for role in list {
                        div {
                            key: "{role.id}",
                            class: "px-6 py-4",
                            h3 { class: "text-sm font-medium text-gray-900", "{role.name}" }
                            div {
                                class: "mt-2 flex flex-wrap gap-4",
                                for (group, actions) in group_permissions(&role.permissions) {
                                    div {
                                        p { class: "text-xs font-medium text-gray-500 uppercase", "{group}" }
                                        p { class: "text-sm text-gray-700", {actions.join(", ")} }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                PageSkeleton {}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MemberEditorProps {
    /// `None` invites a new member, `Some` edits.
    initial: Option<TeamMember>,
    role_options: Vec<(String, String)>,
    on_close: Callback<()>,
}

#[component]
fn MemberEditor(props: MemberEditorProps) -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let mutation = use_mutation();

    let initial = props.initial.clone();
    let editing_id = initial.as_ref().map(|m| m.id);

    let mut first_name = use_signal(|| {
        initial.as_ref().map(|m| m.first_name.clone()).unwrap_or_default()
    });
    let mut last_name = use_signal(|| {
        initial.as_ref().map(|m| m.last_name.clone()).unwrap_or_default()
    });
    let mut email = use_signal(|| initial.as_ref().map(|m| m.email.clone()).unwrap_or_default());
    let mut role_id = use_signal(|| {
        initial
            .as_ref()
            .map(|m| m.role_id.to_string())
            .unwrap_or_default()
    });

    let submit_api = api.clone();
    let on_close = props.on_close;
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut errors = crate::error::FieldErrors::new();
        forms::require(&mut errors, "first_name", &first_name.read(), "First name");
        forms::require(&mut errors, "last_name", &last_name.read(), "Last name");
        forms::require_email(&mut errors, "email", &email.read());
        forms::require(&mut errors, "role_id", &role_id.read(), "Role");

        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let payload = serde_json::json!({
            "first_name": first_name.read().trim(),
            "last_name": last_name.read().trim(),
            "email": email.read().trim(),
            "role_id": role_id.read().parse::<u64>().ok(),
        });

        let api = submit_api.clone();
        mutation.execute(
            &[ResourceKind::TeamMembers],
            async move {
                match editing_id {
                    Some(id) => {
                        api.put_json::<_, serde_json::Value>(&endpoints::team::member(id), &payload)
                            .await
                    }
                    None => {
                        api.post_json::<_, serde_json::Value>(endpoints::team::MEMBERS, &payload)
                            .await
                    }
                }
            },
            move |_| {
                notify.success(
                    "Member saved",
                    if editing_id.is_some() { "Changes applied" } else { "Invitation sent" },
                );
                on_close.call(());
            },
        );
    };

    let errors = mutation.field_errors.read().clone();

    rsx! {
        Modal {
            title: if editing_id.is_some() { "Edit member".to_string() } else { "Add member".to_string() },
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

                div {
                    class: "grid grid-cols-2 gap-4",
                    TextField {
                        label: "First name",
                        value: first_name.read().clone(),
                        error: errors.first("first_name").map(str::to_string),
                        on_input: move |v| first_name.set(v),
                    }
                    TextField {
                        label: "Last name",
                        value: last_name.read().clone(),
                        error: errors.first("last_name").map(str::to_string),
                        on_input: move |v| last_name.set(v),
                    }
                }
                TextField {
                    label: "Email",
                    value: email.read().clone(),
                    input_type: "email",
                    error: errors.first("email").map(str::to_string),
                    on_input: move |v| email.set(v),
                }
                SelectField {
                    label: "Role",
                    value: role_id.read().clone(),
                    options: props.role_options.clone(),
                    placeholder: Some("Choose a role".to_string()),
                    error: errors.first("role_id").map(str::to_string),
                    on_change: move |v| role_id.set(v),
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
                        if *mutation.pending.read() { "Saving..." } else { "Save member" }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleEditor(on_close: Callback<()>) -> Element {
    let api = use_context::<ApiClient>();
    let notify = use_notify();
    let mutation = use_mutation();
    let stale = api.config().list_stale_secs;

    // The catalog of grantable permission strings, grouped for display.
    let available = use_detail_query::<Vec<String>>(ResourceKind::Roles, Some(stale), || {
        endpoints::team::PERMISSIONS.to_string()
    });

    let mut name = use_signal(String::new);
    let mut granted = use_signal(Vec::<String>::new);

    let submit_api = api.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut errors = crate::error::FieldErrors::new();
        forms::require(&mut errors, "name", &name.read(), "Name");
        if granted.read().is_empty() {
            errors.push("permissions", "Grant at least one permission");
        }
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let payload = serde_json::json!({
            "name": name.read().trim(),
            "permissions": granted.read().clone(),
        });
        let api = submit_api.clone();
        mutation.execute(
            &[ResourceKind::Roles],
            async move {
                api.post_json::<_, serde_json::Value>(endpoints::team::ROLES, &payload)
                    .await
            },
            move |_| {
                notify.success("Role created", "It can now be assigned to members");
                on_close.call(());
            },
        );
    };

    let errors = mutation.field_errors.read().clone();
    let catalog = available.data.read().clone().unwrap_or_default();

    rsx! {
        Modal {
            title: "New role".to_string(),
            on_close,

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
                    label: "Name",
                    value: name.read().clone(),
                    error: errors.first("name").map(str::to_string),
                    on_input: move |v| name.set(v),
                }

                div {
                    p { class: "block text-sm font-medium text-gray-700 mb-1", "Permissions" }
                    if let Some(message) = errors.first("permissions") {
                        p { class: "mb-2 text-sm text-red-600", "{message}" }
                    }
                    div {
                        class: "space-y-3 max-h-64 overflow-y-auto",
                        for (group, actions) in group_permissions(&catalog) {
                            div {
                                p { class: "text-xs font-medium text-gray-500 uppercase", "{group}" }
                                div {
                                    class: "mt-1 flex flex-wrap gap-x-4 gap-y-1",
                                    for action in actions {
                                        PermissionCheckbox {
                                            permission: format!("{}.{}", group, action),
                                            label: action.clone(),
                                            granted,
                                        }
                                    }
                                }
                            }
                        }
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
                        if *mutation.pending.read() { "Saving..." } else { "Create role" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PermissionCheckboxProps {
    /// The full `"group.action"` string submitted to the server.
    permission: String,
    label: String,
    granted: Signal<Vec<String>>,
}

#[component]
fn PermissionCheckbox(props: PermissionCheckboxProps) -> Element {
    let mut granted = props.granted;
    let permission = props.permission.clone();
    let checked = granted.read().contains(&permission);

    rsx! {
        label {
            class: "inline-flex items-center space-x-1.5 text-sm text-gray-700",
            input {
                r#type: "checkbox",
                class: "rounded border-gray-300 text-blue-600 focus:ring-blue-500",
                checked,
                onchange: move |evt| {
                    let permission = permission.clone();
                    granted.with_mut(|g| {
                        if evt.checked() {
                            if !g.contains(&permission) {
                                g.push(permission);
                            }
                        } else {
                            g.retain(|p| p != &permission);
                        }
                    });
                },
            }
            span { "{props.label}" }
        }
    }
}
