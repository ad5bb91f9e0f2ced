use leptos::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4000;

/// Fire-and-forget success/error notifications
pub trait NotificationRelay: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue rendered by [`Toasts`]
#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn push(&self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationRelay for NotificationService {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Relay that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRelay;

impl NotificationRelay for LogRelay {
    fn notify_success(&self, message: &str) {
        log::info!("{}", message);
    }

    fn notify_error(&self, message: &str) {
        log::error!("{}", message);
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().unwrap_or_else(|| {
        log::warn!("NotificationService not provided, using a detached one");
        NotificationService::new()
    })
}

#[component]
pub fn Toasts() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toasts">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        service.dismiss(id);
                    });
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__text">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let service = NotificationService::new();
        let first = service.push(ToastKind::Success, "Saved");
        service.notify_error("Failed");

        let toasts = service.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].kind, ToastKind::Error);

        service.dismiss(first);
        let toasts = service.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Failed");
    }
}
