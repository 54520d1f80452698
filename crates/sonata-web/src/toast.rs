//! Transient notifications ("toasts").
//!
//! Fire-and-forget: callers push a message and never hear back. Each toast
//! dismisses itself after [`TOAST_TTL_MS`] or when clicked.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::auth::Notifier;

pub const TOAST_TTL_MS: u32 = 3_000;
/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

fn enqueue(queue: &mut Vec<Toast>, toast: Toast) {
    queue.push(toast);
    if queue.len() > MAX_VISIBLE {
        let excess = queue.len() - MAX_VISIBLE;
        queue.drain(..excess);
    }
}

fn dismiss(queue: &mut Vec<Toast>, id: u64) {
    queue.retain(|t| t.id != id);
}

/// Notification service, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        self.toasts.update(|q| enqueue(q, toast));

        let toasts = self.toasts;
        Timeout::new(TOAST_TTL_MS, move || {
            toasts.try_update(|q| dismiss(q, id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|q| dismiss(q, id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify_success(&self, message: &str) {
        self.success(message);
    }

    fn notify_error(&self, message: &str) {
        self.error(message);
    }
}

/// Renders the toast stack. Mount once, near the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toaster.dismiss(id)>
                            {toast.message}
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

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            kind: ToastKind::Success,
            message: format!("#{id}"),
        }
    }

    #[test]
    fn queue_drops_oldest_beyond_limit() {
        let mut q = Vec::new();
        for id in 1..=(MAX_VISIBLE as u64 + 2) {
            enqueue(&mut q, toast(id));
        }
        assert_eq!(q.len(), MAX_VISIBLE);
        assert_eq!(q.first().unwrap().id, 3);
        assert_eq!(q.last().unwrap().id, MAX_VISIBLE as u64 + 2);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut q = vec![toast(1), toast(2), toast(3)];
        dismiss(&mut q, 2);
        assert_eq!(q.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        dismiss(&mut q, 42);
        assert_eq!(q.len(), 2);
    }
}
