// src/ui/components/fields.rs - Labeled form inputs with validation display

//! Every input shows its first validation message underneath, whether it
//! came from client-side checks or from a 422 response. Values are kept as
//! strings while editing and parsed at submit time.

use dioxus::prelude::*;

use crate::api::FilePart;

const INPUT_CLASS: &str = "block w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:ring-blue-500";
const INPUT_ERROR_CLASS: &str = "block w-full rounded-md border border-red-300 px-3 py-2 text-sm focus:border-red-500 focus:ring-red-500";

#[derive(Props, Clone, PartialEq)]
pub struct FieldErrorProps {
    pub error: Option<String>,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            p { class: "mt-1 text-sm text-red-600", "{message}" }
        },
        None => rsx! {},
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default)]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let class = if props.error.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS };
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            input {
                r#type: "{props.input_type}",
                class: "{class}",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            FieldError { error: props.error.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NumberFieldProps {
    pub label: String,
    pub value: String,
    #[props(default = "any".to_string())]
    pub step: String,
    #[props(default)]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let class = if props.error.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS };
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            input {
                r#type: "number",
                step: "{props.step}",
                class: "{class}",
                value: "{props.value}",
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            FieldError { error: props.error.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: String,
    pub value: String,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let class = if props.error.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS };
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            textarea {
                class: "{class}",
                rows: "{props.rows}",
                value: "{props.value}",
                oninput: move |evt| props.on_input.call(evt.value()),
            }
            FieldError { error: props.error.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: String,
    /// Currently selected value; an empty string selects the placeholder.
    pub value: String,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    pub on_change: Callback<String>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let class = if props.error.is_some() { INPUT_ERROR_CLASS } else { INPUT_CLASS };
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            select {
                class: "{class}",
                value: "{props.value}",
                onchange: move |evt| props.on_change.call(evt.value()),
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", "{placeholder}" }
                }
                for (value, label) in &props.options {
                    option { value: "{value}", "{label}" }
                }
            }
            FieldError { error: props.error.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxFieldProps {
    pub label: String,
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[component]
pub fn CheckboxField(props: CheckboxFieldProps) -> Element {
    rsx! {
        label {
            class: "inline-flex items-center space-x-2 text-sm text-gray-700",
            input {
                r#type: "checkbox",
                class: "rounded border-gray-300 text-blue-600 focus:ring-blue-500",
                checked: props.checked,
                onchange: move |evt| props.on_change.call(evt.checked()),
            }
            span { "{props.label}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FileFieldProps {
    pub label: String,
    #[props(default = "image/*".to_string())]
    pub accept: String,
    #[props(default = false)]
    pub multiple: bool,
    #[props(default)]
    pub error: Option<String>,
    /// Called once per picked file after its bytes are read. Re-opening the
    /// picker adds to the selection; it never replaces earlier picks.
    pub on_file: Callback<FilePart>,
}

#[component]
pub fn FileField(props: FileFieldProps) -> Element {
    let on_file = props.on_file;
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            input {
                r#type: "file",
                accept: "{props.accept}",
                multiple: props.multiple,
                class: "block w-full text-sm text-gray-600 file:mr-3 file:rounded-md file:border-0 file:bg-blue-50 file:px-3 file:py-2 file:text-sm file:font-medium file:text-blue-700 hover:file:bg-blue-100",
                onchange: move |evt| {
                    if let Some(engine) = evt.files() {
                        spawn(async move {
                            for name in engine.files() {
                                if let Some(bytes) = engine.read_file(&name).await {
                                    on_file.call(FilePart::new(name, bytes));
                                }
                            }
                        });
                    }
                },
            }
            FieldError { error: props.error.clone() }
        }
    }
}
