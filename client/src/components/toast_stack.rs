//! Toast rendering and the helper that raises them.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// How long a toast stays up before it dismisses itself.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Queue a toast; in the browser it is dismissed after `TOAST_LIFETIME`.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_LIFETIME).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
