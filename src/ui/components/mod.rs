// src/ui/components/mod.rs - Shared widgets used across the pages

mod badge;
mod dialog;
mod fields;
mod pager;
mod toast;
mod toolbar;

pub use badge::{status_badge, BadgeTone, StatusBadge};
pub use dialog::{ConfirmDialog, Modal};
pub use fields::{CheckboxField, FieldError, FileField, NumberField, SelectField, TextAreaField, TextField};
pub use pager::Pager;
pub use toast::ToastStack;
pub use toolbar::SearchToolbar;
