//! Toast display surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single consumer of the notification bus. Each rendered toast starts
//! its own removal timer when it mounts, so entries expire independently.
//! Clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::state::toast::{Notifier, Toast, ToastKind, use_notifier};

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    let queue = notifier.queue();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast notifier=notifier/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, notifier: Notifier) -> impl IntoView {
    let id = toast.id;
    let is_error = toast.kind == ToastKind::Error;
    schedule_expiry(notifier, id);

    view! {
        <div
            class="toast"
            class:toast--error=is_error
            role="status"
            on:click=move |_| notifier.dismiss(id)
        >
            {toast.text}
        </div>
    }
}

fn schedule_expiry(notifier: Notifier, id: u64) {
    #[cfg(feature = "csr")]
    {
        let ttl_ms = notifier.queue().with_untracked(crate::state::toast::ToastQueue::ttl_ms);
        crate::util::loader::spawn_task(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs_f64(ttl_ms / 1000.0)).await;
            notifier.dismiss(id);
            notifier.expire_due();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifier, id);
    }
}
