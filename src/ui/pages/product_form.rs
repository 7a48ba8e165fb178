// src/ui/pages/product_form.rs - Product create/edit with the variant editor

//! One component serves both flows: `id: None` creates, `id: Some` loads the
//! product and edits a defensive copy. Submission is always multipart (the
//! variant image files ride along); updates add the `_method=PUT` override.

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::api::{endpoints, ApiClient, FilePart, MultipartForm};
use crate::error::FieldErrors;
use crate::forms;
use crate::models::{
    set_default_variant, Brand, Category, Color, Product, Size, Style, Variant, VariantStatus,
};
use crate::query::{use_detail_query, use_mutation, use_reference_query, ResourceKind};
use crate::ui::components::{FieldError, FileField, TextAreaField, TextField};
use crate::ui::pages::{remove_picked, PageError, PageSkeleton, PageWrapper};
use crate::ui::router::{nav, Route};
use crate::ui::state::use_notify;

#[component]
pub fn ProductForm(id: Option<u64>) -> Element {
    match id {
        Some(id) => rsx! { ProductEditLoader { id } },
        None => rsx! { ProductFormFields { product: None } },
    }
}

/// Loads the product for editing, then mounts the form over a defensive
/// copy. In-progress edits are never clobbered by a refetch because the
/// form initializes its signals exactly once.
#[component]
fn ProductEditLoader(id: u64) -> Element {
    let api = use_context::<ApiClient>();
    let route = use_route::<Route>();
    let stale = api.config().list_stale_secs;
    let query = use_detail_query::<Product>(ResourceKind::Products, Some(stale), move || {
        endpoints::products::detail(id)
    });

    if let Some(message) = query.error.read().as_ref().map(|e| e.message.clone()) {
        return rsx! {
            PageWrapper {
                title: "Edit product",
                PageError { message, back: nav::parent_list(&route) }
            }
        };
    }
    let body = match query.data.read().as_ref() {
        Some(product) => rsx! {
            ProductFormFields { product: Some(product.clone()) }
        },
        None => rsx! {
            PageWrapper { title: "Edit product", PageSkeleton {} }
        },
    };
    body
}

#[component]
fn ProductFormFields(product: Option<Product>) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let notify = use_notify();
    let mutation = use_mutation();

    let id = product.as_ref().map(|p| p.id);
    let initial = product;

    let name = use_signal(|| initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let description = use_signal(|| {
        initial
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default()
    });
    let category_id =
        use_signal(|| opt_to_string(initial.as_ref().and_then(|p| p.category_id)));
    let subcategory_id =
        use_signal(|| opt_to_string(initial.as_ref().and_then(|p| p.subcategory_id)));
    let brand_id = use_signal(|| opt_to_string(initial.as_ref().and_then(|p| p.brand_id)));
    let style_id = use_signal(|| opt_to_string(initial.as_ref().and_then(|p| p.style_id)));
    // The editor always holds at least one row.
    let variants = use_signal(|| match initial.as_ref() {
        Some(p) if !p.variants.is_empty() => p.variants.clone(),
        _ => vec![Variant::blank()],
    });
    // Freshly picked files per variant row, parallel to `variants`.
    let new_images = use_signal(|| vec![Vec::<FilePart>::new(); variants.peek().len()]);

    let categories = use_reference_query::<Category>(endpoints::reference::CATEGORIES);
    let brands = use_reference_query::<Brand>(endpoints::reference::BRANDS);
    let styles = use_reference_query::<Style>(endpoints::reference::STYLES);
    let colors = use_reference_query::<Color>(endpoints::reference::COLORS);
    let sizes = use_reference_query::<Size>(endpoints::reference::SIZES);

    let submit_api = api.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let mut errors = FieldErrors::new();
        forms::require(&mut errors, "name", &name.peek(), "Name");
        forms::validate_variants(&mut errors, &variants.peek());
        if !errors.is_empty() {
            mutation.reject(errors);
            return;
        }

        let mut form = MultipartForm::new()
            .text("name", name.peek().trim())
            .text("description", description.peek().trim())
            .maybe_text("category_id", parse_id(&category_id.peek()))
            .maybe_text("subcategory_id", parse_id(&subcategory_id.peek()))
            .maybe_text("brand_id", parse_id(&brand_id.peek()))
            .maybe_text("style_id", parse_id(&style_id.peek()))
            .variants(&variants.peek());
        for (i, files) in new_images.peek().iter().enumerate() {
            form = form.files(&format!("variants[{}][images][]", i), files);
        }

        let (path, form) = match id {
            Some(id) => (endpoints::products::detail(id), form.method_override("PUT")),
            None => (endpoints::products::LIST.to_string(), form),
        };

        let api = submit_api.clone();
        let created = id.is_none();
        mutation.execute(
            &[ResourceKind::Products, ResourceKind::Inventory],
            async move { api.post_multipart::<serde_json::Value>(&path, form).await },
            move |_| {
                notify.success(
                    if created { "Product created" } else { "Product updated" },
                    "",
                );
                navigator.push(Route::Products {});
            },
        );
    };

    let title = if id.is_some() { "Edit product" } else { "New product" };
    let field_errors = mutation.field_errors.read().clone();

    rsx! {
        PageWrapper {
            title: "{title}",

            form {
                class: "space-y-6 max-w-4xl",
                onsubmit: on_submit,

                if let Some(message) = mutation.error.read().as_ref() {
                    div {
                        class: "rounded-md bg-red-50 p-4",
                        p { class: "text-sm font-medium text-red-800", "{message}" }
                    }
                }

                div {
                    class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
                    h2 { class: "text-lg font-medium text-gray-900", "Details" }
                    TextField {
                        label: "Name",
                        value: name.read().clone(),
                        error: field_errors.first("name").map(str::to_string),
                        on_input: {
                            let mut name = name;
                            move |v| name.set(v)
                        },
                    }
                    TextAreaField {
                        label: "Description",
                        value: description.read().clone(),
                        error: field_errors.first("description").map(str::to_string),
                        on_input: {
                            let mut description = description;
                            move |v| description.set(v)
                        },
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                        CategoryPicker {
                            categories: categories.data.read().clone().unwrap_or_default(),
                            category_id,
                            subcategory_id,
                        }
                        ReferenceSelect {
                            label: "Brand",
                            value: brand_id,
                            options: brands.data.read().clone().unwrap_or_default()
                                .into_iter().map(|b| (b.id, b.name)).collect::<Vec<_>>(),
                        }
                        ReferenceSelect {
                            label: "Style",
                            value: style_id,
                            options: styles.data.read().clone().unwrap_or_default()
                                .into_iter().map(|s| (s.id, s.name)).collect::<Vec<_>>(),
                        }
                    }
                }

                VariantEditor {
                    variants,
                    new_images,
                    colors: colors.data.read().clone().unwrap_or_default(),
                    sizes: sizes.data.read().clone().unwrap_or_default(),
                    field_errors: field_errors.clone(),
                }

                div {
                    class: "flex justify-end space-x-3",
                    Link {
                        to: Route::Products {},
                        class: "px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50",
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded-md bg-blue-600 text-sm font-medium text-white hover:bg-blue-700 disabled:opacity-50",
                        disabled: *mutation.pending.read(),
                        if *mutation.pending.read() { "Saving..." } else { "Save product" }
                    }
                }
            }
        }
    }
}

fn opt_to_string(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_id(value: &str) -> Option<u64> {
    value.parse().ok()
}

#[derive(Props, Clone, PartialEq)]
struct ReferenceSelectProps {
    label: &'static str,
    value: Signal<String>,
    options: Vec<(u64, String)>,
}

#[component]
fn ReferenceSelect(props: ReferenceSelectProps) -> Element {
    let mut value = props.value;
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            select {
                class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                value: "{value}",
                onchange: move |evt| value.set(evt.value()),
                option { value: "", "None" }
                for (id, name) in &props.options {
                    option { value: "{id}", "{name}" }
                }
            }
        }
    }
}

/// Category select plus a dependent subcategory select. Changing the
/// category clears the subcategory.
#[derive(Props, Clone, PartialEq)]
struct CategoryPickerProps {
    categories: Vec<Category>,
    category_id: Signal<String>,
    subcategory_id: Signal<String>,
}

#[component]
fn CategoryPicker(props: CategoryPickerProps) -> Element {
    let mut category_id = props.category_id;
    let mut subcategory_id = props.subcategory_id;

    let subcategories = props
        .categories
        .iter()
        .find(|c| c.id.to_string() == *category_id.read())
        .map(|c| c.subcategories.clone())
        .unwrap_or_default();

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "Category" }
            select {
                class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                value: "{category_id}",
                onchange: move |evt| {
                    category_id.set(evt.value());
                    subcategory_id.set(String::new());
                },
                option { value: "", "None" }
                for category in &props.categories {
                    option { value: "{category.id}", "{category.name}" }
                }
            }
        }
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "Subcategory" }
            select {
                class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                value: "{subcategory_id}",
                onchange: move |evt| subcategory_id.set(evt.value()),
                option { value: "", "None" }
                for subcategory in &subcategories {
                    option { value: "{subcategory.id}", "{subcategory.name}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct VariantEditorProps {
    variants: Signal<Vec<Variant>>,
    new_images: Signal<Vec<Vec<FilePart>>>,
    colors: Vec<Color>,
    sizes: Vec<Size>,
    field_errors: FieldErrors,
}

#[component]
fn VariantEditor(props: VariantEditorProps) -> Element {
    let mut variants = props.variants;
    let mut new_images = props.new_images;
    let rows = variants.read().clone();
    let count = rows.len();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow px-6 py-5 space-y-4",
            div {
                class: "flex items-center justify-between",
                h2 { class: "text-lg font-medium text-gray-900", "Variants" }
                button {
                    r#type: "button",
                    class: "px-3 py-1.5 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50",
                    onclick: move |_| {
                        variants.with_mut(|v| v.push(Variant::blank()));
                        new_images.with_mut(|n| n.push(Vec::new()));
                    },
                    "Add variant"
                }
            }
            FieldError { error: props.field_errors.first("variants").map(str::to_string) }

            for (index, variant) in rows.into_iter().enumerate() {
                VariantRow {
                    key: "{index}",
                    index,
                    variant,
                    can_remove: count > 1,
                    colors: props.colors.clone(),
                    sizes: props.sizes.clone(),
                    price_error: props.field_errors
                        .first(&format!("variants.{}.price", index))
                        .map(str::to_string),
                    picked: new_images.read().get(index).cloned().unwrap_or_default(),
                    variants,
                    new_images,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct VariantRowProps {
    index: usize,
    variant: Variant,
    can_remove: bool,
    colors: Vec<Color>,
    sizes: Vec<Size>,
    price_error: Option<String>,
    picked: Vec<FilePart>,
    variants: Signal<Vec<Variant>>,
    new_images: Signal<Vec<Vec<FilePart>>>,
}

#[component]
fn VariantRow(props: VariantRowProps) -> Element {
    let index = props.index;
    let mut variants = props.variants;
    let mut new_images = props.new_images;
    let variant = props.variant.clone();

    let status_options = [
        VariantStatus::InStock,
        VariantStatus::OutOfStock,
        VariantStatus::ComingSoon,
        VariantStatus::Archived,
    ];

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg p-4 space-y-4",
            div {
                class: "flex items-center justify-between",
                label {
                    class: "inline-flex items-center space-x-2 text-sm font-medium text-gray-700",
                    input {
                        r#type: "radio",
                        name: "default_variant",
                        checked: variant.is_default,
                        onchange: move |_| {
                            variants.with_mut(|v| set_default_variant(v, index));
                        },
                    }
                    span { "Default variant" }
                }
                if props.can_remove {
                    button {
                        r#type: "button",
                        class: "text-sm text-red-600 hover:text-red-500",
                        onclick: move |_| {
                            variants.with_mut(|v| {
                                v.remove(index);
                                // Removing the default hands the flag to the
                                // first remaining row.
                                if !v.is_empty() && !v.iter().any(|x| x.is_default) {
                                    set_default_variant(v, 0);
                                }
                            });
                            new_images.with_mut(|n| {
                                if index < n.len() {
                                    n.remove(index);
                                }
                            });
                        },
                        "Remove"
                    }
                }
            }

            div {
                class: "grid grid-cols-2 sm:grid-cols-4 gap-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Price" }
                    input {
                        r#type: "number",
                        step: "0.01",
                        class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{variant.price}",
                        oninput: move |evt| {
                            let price = evt.value().parse().unwrap_or(0.0);
                            variants.with_mut(|v| {
                                if let Some(row) = v.get_mut(index) {
                                    row.price = price;
                                }
                            });
                        },
                    }
                    FieldError { error: props.price_error.clone() }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Quantity" }
                    input {
                        r#type: "number",
                        min: "0",
                        class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: "{variant.quantity}",
                        oninput: move |evt| {
                            let quantity = evt.value().parse().unwrap_or(0);
                            variants.with_mut(|v| {
                                if let Some(row) = v.get_mut(index) {
                                    row.quantity = quantity;
                                }
                            });
                        },
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Color" }
                    select {
                        class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: opt_to_string(variant.color_id),
                        onchange: move |evt| {
                            let color = parse_id(&evt.value());
                            variants.with_mut(|v| {
                                if let Some(row) = v.get_mut(index) {
                                    row.color_id = color;
                                }
                            });
                        },
                        option { value: "", "None" }
                        for color in &props.colors {
                            option { value: "{color.id}", "{color.name}" }
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Size" }
                    select {
                        class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: opt_to_string(variant.size_id),
                        onchange: move |evt| {
                            let size = parse_id(&evt.value());
                            variants.with_mut(|v| {
                                if let Some(row) = v.get_mut(index) {
                                    row.size_id = size;
                                }
                            });
                        },
                        option { value: "", "None" }
                        for size in &props.sizes {
                            option { value: "{size.id}", "{size.name}" }
                        }
                    }
                }
            }

            div {
                class: "grid grid-cols-2 sm:grid-cols-5 gap-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", "Status" }
                    select {
                        class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                        value: serde_json::to_value(variant.status)
                            .ok()
                            .and_then(|v| v.as_str().map(str::to_string))
                            .unwrap_or_default(),
                        onchange: move |evt| {
                            if let Ok(status) = serde_json::from_value::<VariantStatus>(
                                serde_json::Value::String(evt.value()),
                            ) {
                                variants.with_mut(|v| {
                                    if let Some(row) = v.get_mut(index) {
                                        row.status = status;
                                    }
                                });
                            }
                        },
                        for status in status_options {
                            option {
                                value: serde_json::to_value(status)
                                    .ok()
                                    .and_then(|v| v.as_str().map(str::to_string))
                                    .unwrap_or_default(),
                                "{status.label()}"
                            }
                        }
                    }
                }
                DimensionInput { index, field: Dimension::Length, value: variant.dimensions.length, variants }
                DimensionInput { index, field: Dimension::Width, value: variant.dimensions.width, variants }
                DimensionInput { index, field: Dimension::Height, value: variant.dimensions.height, variants }
                DimensionInput { index, field: Dimension::Weight, value: variant.dimensions.weight, variants }
            }

            div {
                FileField {
                    label: "Images",
                    multiple: true,
                    on_file: move |file: FilePart| {
                        new_images.with_mut(|n| {
                            if let Some(slot) = n.get_mut(index) {
                                slot.push(file);
                            }
                        });
                    },
                }
                if !variant.images.is_empty() || !props.picked.is_empty() {
                    ul {
                        class: "mt-2 text-sm text-gray-600 space-y-1",
                        for image in &variant.images {
                            li { "Existing: {image.url}" }
                        }
                        for (i, file) in props.picked.iter().enumerate() {
                            li {
                                class: "flex items-center space-x-3",
                                span { "New: {file.filename}" }
                                button {
                                    r#type: "button",
                                    class: "text-red-600 hover:text-red-500",
                                    onclick: move |_| {
                                        new_images.with_mut(|n| {
                                            if let Some(slot) = n.get_mut(index) {
                                                remove_picked(slot, i);
                                            }
                                        });
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dimension {
    Length,
    Width,
    Height,
    Weight,
}

impl Dimension {
    fn label(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Weight => "Weight",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DimensionInputProps {
    index: usize,
    field: Dimension,
    value: Option<f64>,
    variants: Signal<Vec<Variant>>,
}

#[component]
fn DimensionInput(props: DimensionInputProps) -> Element {
    let mut variants = props.variants;
    let index = props.index;
    let field = props.field;
    let value = props.value.map(|v| v.to_string()).unwrap_or_default();

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{field.label()}" }
            input {
                r#type: "number",
                step: "any",
                class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                value: "{value}",
                oninput: move |evt| {
                    let parsed = evt.value().parse().ok();
                    variants.with_mut(|v| {
                        if let Some(row) = v.get_mut(index) {
                            match field {
                                Dimension::Length => row.dimensions.length = parsed,
                                Dimension::Width => row.dimensions.width = parsed,
                                Dimension::Height => row.dimensions.height = parsed,
                                Dimension::Weight => row.dimensions.weight = parsed,
                            }
                        }
                    });
                },
            }
        }
    }
}
