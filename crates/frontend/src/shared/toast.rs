//! Всплывающие уведомления. Fire-and-forget: `notify` ничего не возвращает,
//! тост сам исчезает через `toast_ttl_ms`.

use contracts::shared::notification::{Notification, NotificationKind, Notifier};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    ttl_ms: u32,
}

impl ToastService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            ttl_ms,
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, notification: Notification) {
        let id = Uuid::new_v4();
        leptos::logging::log!("🔔 toast: {}", notification.title);
        self.toasts.update(|list| list.push(Toast { id, notification }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.ttl_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind_class = match toast.notification.kind {
                        NotificationKind::Info => "toast--info",
                        NotificationKind::Error => "toast--error",
                    };
                    view! {
                        <div class=format!("toast {}", kind_class) on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{toast.notification.title.clone()}</div>
                            <div class="toast__description">{toast.notification.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
