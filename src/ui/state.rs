// src/ui/state.rs - Application state context and helper hooks

use dioxus::prelude::*;
use uuid::Uuid;

use crate::models::Session;
use crate::ui::{Notification, NotificationKind};
use crate::utils::sleep_ms;

/// How long a toast stays on screen.
const NOTIFICATION_TTL_MS: u32 = 4000;

/// Process-wide state shared through context: the session (read by the
/// route guard and the header, written by login/logout/401), the language
/// preference, and the toast stack.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Signal<Option<Session>>,
    pub language: Signal<String>,
    pub notifications: Signal<Vec<Notification>>,
}

/// Hook to access the shared application context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to read the current session.
pub fn use_session() -> Signal<Option<Session>> {
    use_app().session
}

/// Handle for pushing toasts from event handlers and async tasks.
#[derive(Clone, Copy)]
pub struct Notifier {
    notifications: Signal<Vec<Notification>>,
}

pub fn use_notify() -> Notifier {
    Notifier {
        notifications: use_app().notifications,
    }
}

impl Notifier {
    fn push(&self, kind: NotificationKind, title: &str, message: &str) {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            timestamp: chrono::Utc::now(),
        };
        let id = notification.id;
        let mut notifications = self.notifications;
        notifications.with_mut(|n| n.push(notification));

        spawn(async move {
            sleep_ms(NOTIFICATION_TTL_MS).await;
            notifications.with_mut(|n| n.retain(|item| item.id != id));
        });
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(NotificationKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(NotificationKind::Error, title, message);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(NotificationKind::Info, title, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        let mut notifications = self.notifications;
        notifications.with_mut(|n| n.retain(|item| item.id != id));
    }
}
