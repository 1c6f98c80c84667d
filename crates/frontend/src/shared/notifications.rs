//! Toast notifications
//!
//! Only one toast is visible at a time: showing a new one replaces the current
//! one. Each toast dismisses itself after `notifications.duration_ms`.

use crate::shared::config::site_config;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "alert-circle",
            NotificationKind::Warning => "alert-triangle",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Anything that can show a toast to the visitor
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    fn info(&self, message: &str) {
        self.notify(NotificationKind::Info, message);
    }
}

/// Сервис уведомлений, доступен через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get()
    }

    /// Закрыть уведомление, если оно всё ещё показано
    pub fn dismiss(&self, id: Uuid) {
        self.current.update(|current| {
            if current.as_ref().map(|n| n.id) == Some(id) {
                *current = None;
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.to_string(),
        };
        let id = notification.id;
        self.current.set(Some(notification));

        let service = *self;
        Timeout::new(site_config().notifications.duration_ms, move || {
            service.dismiss(id);
        })
        .forget();
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the current toast
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || {
            service.current().map(|n| {
                let id = n.id;
                view! {
                    <div class=format!("notification {} show", n.kind.css_class()) role="status">
                        {icon(n.kind.icon_name())}
                        <span>{n.message.clone()}</span>
                        <button
                            class="notification-close"
                            aria-label="Close"
                            on:click=move |_| service.dismiss(id)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
