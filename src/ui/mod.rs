// src/ui/mod.rs - UI system coordinator

use chrono::{DateTime, Utc};
use uuid::Uuid;

// Re-export main app component
pub use app::App;

// Module declarations
pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;

pub use router::Route;
pub use state::{use_app, use_notify, use_session, AppContext, Notifier};

/// A transient toast shown in the layout's notification stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Tailwind classes for the toast accent.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Self::Success => "border-green-400 bg-green-50 text-green-800",
            Self::Error => "border-red-400 bg-red-50 text-red-800",
            Self::Info => "border-blue-400 bg-blue-50 text-blue-800",
        }
    }
}
