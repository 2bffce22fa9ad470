//! Всплывающие уведомления (toast) с автоскрытием.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    fn modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification--success",
            NotificationKind::Error => "notification--error",
            NotificationKind::Warning => "notification--warning",
            NotificationKind::Info => "notification--info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Сервис уведомлений, раздаётся через context
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        match kind {
            NotificationKind::Error => log::error!("{}", message),
            NotificationKind::Warning => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notification { id, message, kind });
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Warning);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стек уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=format!("notification {}", n.kind.modifier())>
                            <span class="notification__icon">{n.kind.icon()}</span>
                            <span class="notification__text">{n.message}</span>
                            <button class="notification__close" on:click=move |_| service.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
