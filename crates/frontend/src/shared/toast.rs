use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notifications. Each toast auto-dismisses after a few seconds;
/// clicking one dismisses it immediately.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    };
                    let id = toast.id;
                    view! {
                        <div class=kind_class on:click=move |_| service.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
